//! Focus handles - the controller's view of the host's input cells.
//!
//! The host owns its rendered cells. The code field only keeps a
//! [`FocusTable`]: a lookup from cell index to an opaque [`FocusHandle`]
//! it can ask to take or drop input focus.
//!
//! [`tracked_focus`] builds a table for hosts without native focus (the
//! terminal): every handle writes into one shared `focused` signal.
//!
//! # Example
//!
//! ```
//! use spark_code_field::state::tracked_focus;
//!
//! let (table, focused) = tracked_focus(4);
//! table.focus(2);
//! assert_eq!(focused.get(), Some(2));
//! table.blur(2);
//! assert_eq!(focused.get(), None);
//! ```

use std::rc::Rc;

use spark_signals::{signal, Signal};
use tracing::trace;

// =============================================================================
// FocusHandle
// =============================================================================

/// Capability to move host input focus onto or off one cell.
pub trait FocusHandle {
    fn focus(&self);
    fn blur(&self);
}

/// Handle whose focus and blur write a shared focused-index signal.
#[derive(Clone)]
pub struct SignalFocus {
    index: usize,
    focused: Signal<Option<usize>>,
}

impl SignalFocus {
    pub fn new(index: usize, focused: Signal<Option<usize>>) -> Self {
        Self { index, focused }
    }
}

impl FocusHandle for SignalFocus {
    fn focus(&self) {
        self.focused.set(Some(self.index));
    }

    fn blur(&self) {
        if self.focused.get() == Some(self.index) {
            self.focused.set(None);
        }
    }
}

// =============================================================================
// FocusTable
// =============================================================================

/// Lookup from cell index to the host's focus handle.
///
/// Slots may be empty while the host has not mounted a cell yet; requests to
/// an empty slot are dropped.
#[derive(Clone, Default)]
pub struct FocusTable {
    handles: Vec<Option<Rc<dyn FocusHandle>>>,
}

impl FocusTable {
    /// Table with `len` empty slots.
    pub fn new(len: usize) -> Self {
        Self {
            handles: vec![None; len],
        }
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Attach a handle, growing the table if needed.
    pub fn register(&mut self, index: usize, handle: Rc<dyn FocusHandle>) {
        if index >= self.handles.len() {
            self.handles.resize(index + 1, None);
        }
        self.handles[index] = Some(handle);
    }

    /// Detach a handle. Returns whether one was attached.
    pub fn unregister(&mut self, index: usize) -> bool {
        self.handles
            .get_mut(index)
            .and_then(Option::take)
            .is_some()
    }

    /// Ask the host to focus a cell. Returns false when no handle is attached.
    pub fn focus(&self, index: usize) -> bool {
        match self.handles.get(index).and_then(Option::as_ref) {
            Some(handle) => {
                handle.focus();
                true
            }
            None => {
                trace!(index, "focus request without a handle");
                false
            }
        }
    }

    /// Ask the host to blur a cell. Returns false when no handle is attached.
    pub fn blur(&self, index: usize) -> bool {
        match self.handles.get(index).and_then(Option::as_ref) {
            Some(handle) => {
                handle.blur();
                true
            }
            None => {
                trace!(index, "blur request without a handle");
                false
            }
        }
    }
}

/// Table of [`SignalFocus`] handles sharing one focused-index signal.
pub fn tracked_focus(len: usize) -> (FocusTable, Signal<Option<usize>>) {
    let focused = signal(None);
    let mut table = FocusTable::new(len);
    for index in 0..len {
        table.register(index, Rc::new(SignalFocus::new(index, focused.clone())));
    }
    (table, focused)
}

// =============================================================================
// TESTS
// =============================================================================
