//! Code Field Primitive - segmented one-time-code / PIN entry.
//!
//! One logical input made of `code_length` single-character cells.
//!
//! # Features
//!
//! - Cursor advances on input and collapses back on delete
//! - Focusing past an empty cell lands on the first empty cell
//! - Optional comparison target, case-sensitive or not, with automatic
//!   reset on mismatch
//! - Six border variants, four layout positions
//! - Reactive signals for the value and the active cell
//!
//! # Example
//!
//! ```
//! use spark_code_field::config::CodeFieldConfig;
//! use spark_code_field::primitives::{code_field, CodeFieldProps};
//! use spark_code_field::state::{tracked_focus, CellEvent};
//!
//! let config = CodeFieldConfig { code_length: 4, ..Default::default() };
//! let (handles, focused) = tracked_focus(4);
//! let mut field = code_field(
//!     CodeFieldProps::new(config).on_fulfill(|done| println!("code: {}", done.code)),
//!     handles,
//! );
//!
//! assert_eq!(focused.get(), Some(0)); // auto focus
//! field.dispatch(0, CellEvent::TextChanged("1".to_string()));
//! assert_eq!(field.value(), "1");
//! assert_eq!(focused.get(), Some(1));
//! ```

use spark_signals::Signal;
use tracing::debug;

use crate::config::CodeFieldConfig;
use crate::controller::CodeFieldController;
use crate::layout::{place_cells, FieldLayout, LayoutError};
use crate::renderer::FrameBuffer;
use crate::state::{CellEvent, Effect, EntryState, FocusTable, Matcher};
use crate::theme::cell_style;

use super::types::{CellView, CodeFieldProps};

/// A mounted code field.
pub struct CodeField {
    config: CodeFieldConfig,
    controller: CodeFieldController,
}

/// Mount a code field.
///
/// Configuration diagnostics are logged, never raised. When `auto_focus` is
/// set, the first cell's handle is asked for focus.
pub fn code_field(props: CodeFieldProps, handles: FocusTable) -> CodeField {
    props.config.report_diagnostics();

    let config = props.config.clone();
    let matcher = Matcher::new(config.compare_with_code.clone(), config.ignore_case);
    let controller = CodeFieldController::new(config.cell_count(), matcher, handles, props.callbacks());

    let matcher = controller.store().matcher();
    debug!(
        cells = config.cell_count(),
        variant = config.variant.name(),
        position = config.position.as_str(),
        target_len = matcher.target().map(|t| t.chars().count()),
        ignore_case = config.ignore_case,
        "code field mounted"
    );

    if config.auto_focus {
        controller.handles().focus(0);
    }

    CodeField { config, controller }
}

impl CodeField {
    pub fn config(&self) -> &CodeFieldConfig {
        &self.config
    }

    /// Route a host event raised on cell `index`.
    pub fn dispatch(&mut self, index: usize, event: CellEvent) -> Vec<Effect> {
        self.controller.handle_cell_event(index, event)
    }

    pub fn focus(&mut self, index: usize) -> Vec<Effect> {
        self.controller.focus(index)
    }

    pub fn enter_character(&mut self, ch: char, index: usize) -> Vec<Effect> {
        self.controller.enter_character(ch, index)
    }

    pub fn backspace(&mut self) -> Vec<Effect> {
        self.controller.backspace()
    }

    /// Empty every cell and focus the first one.
    pub fn clear(&mut self) -> Vec<Effect> {
        self.controller.clear()
    }

    /// Joined code entered so far.
    pub fn value(&self) -> String {
        self.controller.store().state().value()
    }

    pub fn cells(&self) -> &[Option<char>] {
        self.controller.store().state().cells()
    }

    pub fn entry(&self) -> EntryState {
        self.controller.store().entry()
    }

    /// Cell awaiting the next character.
    pub fn active_index(&self) -> Option<usize> {
        self.controller.store().state().active_index()
    }

    pub fn value_signal(&self) -> Signal<String> {
        self.controller.store().value_signal()
    }

    pub fn active_signal(&self) -> Signal<Option<usize>> {
        self.controller.store().active_signal()
    }

    pub fn handles_mut(&mut self) -> &mut FocusTable {
        self.controller.handles_mut()
    }

    /// Per-cell value and style, in cell order.
    pub fn cell_views(&self) -> Vec<CellView> {
        let active = self.active_index();
        self.cells()
            .iter()
            .enumerate()
            .map(|(index, cell)| {
                let is_active = active == Some(index);
                CellView {
                    index,
                    value: cell.map(String::from).unwrap_or_default(),
                    active: is_active,
                    style: cell_style(&self.config, is_active),
                }
            })
            .collect()
    }

    /// Place the cells in a container `available_width` wide.
    pub fn layout(&self, available_width: u16) -> Result<FieldLayout, LayoutError> {
        place_cells(&self.config, available_width)
    }

    /// Draw the field into `buffer` at `origin`, returning the layout used.
    pub fn render(
        &self,
        buffer: &mut FrameBuffer,
        origin: (u16, u16),
        available_width: u16,
    ) -> Result<FieldLayout, LayoutError> {
        let mut layout = self.layout(available_width)?;
        let (ox, oy) = origin;

        if let Some(bg) = self.config.overrides.container.background {
            let area = crate::layout::CellRect {
                x: ox,
                y: oy,
                width: layout.width,
                height: layout.height,
            };
            buffer.fill_rect(area, bg);
        }

        for (rect, view) in layout.cells.iter_mut().zip(self.cell_views()) {
            rect.x = rect.x.saturating_add(ox);
            rect.y = rect.y.saturating_add(oy);
            buffer.draw_code_cell(*rect, &view.style, view.glyph());
        }

        Ok(layout)
    }
}

// =============================================================================
// TESTS
// =============================================================================
