//! Primitive types - props and rendered cell views.

use std::rc::Rc;

use crate::config::CodeFieldConfig;
use crate::controller::{CodeChangeCallback, FieldCallbacks, FulfillCallback};
use crate::state::Fulfillment;
use crate::theme::CellStyle;

// =============================================================================
// CodeFieldProps
// =============================================================================

/// Everything a code field is mounted with.
#[derive(Clone, Default)]
pub struct CodeFieldProps {
    pub config: CodeFieldConfig,
    pub on_code_change: Option<CodeChangeCallback>,
    pub on_fulfill: Option<FulfillCallback>,
}

impl CodeFieldProps {
    pub fn new(config: CodeFieldConfig) -> Self {
        Self {
            config,
            on_code_change: None,
            on_fulfill: None,
        }
    }

    pub fn on_code_change(mut self, f: impl Fn(&str) + 'static) -> Self {
        self.on_code_change = Some(Rc::new(f));
        self
    }

    pub fn on_fulfill(mut self, f: impl Fn(&Fulfillment) + 'static) -> Self {
        self.on_fulfill = Some(Rc::new(f));
        self
    }

    pub(crate) fn callbacks(&self) -> FieldCallbacks {
        FieldCallbacks {
            on_code_change: self.on_code_change.clone(),
            on_fulfill: self.on_fulfill.clone(),
        }
    }
}

// =============================================================================
// CellView
// =============================================================================

/// What a host renders for one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub index: usize,
    /// The cell's character, or empty.
    pub value: String,
    /// Whether the cell awaits the next character.
    pub active: bool,
    pub style: CellStyle,
}

impl CellView {
    pub fn glyph(&self) -> Option<char> {
        self.value.chars().next()
    }
}
