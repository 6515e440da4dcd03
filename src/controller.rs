//! Interaction controller.
//!
//! Translates per-cell host events into store transitions, then carries out
//! the resulting effects: focus and blur requests go to the [`FocusTable`],
//! code changes and fulfillments go to the application callbacks.

use std::rc::Rc;

use tracing::{debug, trace};

use crate::state::{
    CellEvent, CodeStore, Effect, FieldEvent, FocusTable, Fulfillment, Matcher,
};

/// Called with the joined code after every accepted keystroke or deletion.
pub type CodeChangeCallback = Rc<dyn Fn(&str)>;

/// Called once per completed entry attempt.
pub type FulfillCallback = Rc<dyn Fn(&Fulfillment)>;

/// Application callbacks of one field.
#[derive(Clone, Default)]
pub struct FieldCallbacks {
    pub on_code_change: Option<CodeChangeCallback>,
    pub on_fulfill: Option<FulfillCallback>,
}

pub struct CodeFieldController {
    store: CodeStore,
    handles: FocusTable,
    callbacks: FieldCallbacks,
}

impl CodeFieldController {
    pub fn new(len: usize, matcher: Matcher, handles: FocusTable, callbacks: FieldCallbacks) -> Self {
        Self {
            store: CodeStore::new(len, matcher),
            handles,
            callbacks,
        }
    }

    pub fn store(&self) -> &CodeStore {
        &self.store
    }

    pub fn handles(&self) -> &FocusTable {
        &self.handles
    }

    pub fn handles_mut(&mut self) -> &mut FocusTable {
        &mut self.handles
    }

    /// Route a host event raised on cell `index`.
    pub fn handle_cell_event(&mut self, index: usize, event: CellEvent) -> Vec<Effect> {
        let field_event = match event {
            CellEvent::Focused => FieldEvent::CellFocused(index),
            CellEvent::TextChanged(text) => match text.chars().next() {
                Some(ch) => FieldEvent::CharacterEntered { ch, index },
                None => {
                    trace!(index, "empty text change ignored");
                    return Vec::new();
                }
            },
            CellEvent::KeyPressed(key) if key.is_press() && key.is_delete() => {
                FieldEvent::BackspacePressed
            }
            CellEvent::KeyPressed(key) => {
                trace!(index, key = %key.key, "key ignored");
                return Vec::new();
            }
            CellEvent::Blurred => {
                trace!(index, "cell blurred");
                return Vec::new();
            }
        };
        self.apply(field_event)
    }

    pub fn focus(&mut self, index: usize) -> Vec<Effect> {
        self.apply(FieldEvent::CellFocused(index))
    }

    pub fn enter_character(&mut self, ch: char, index: usize) -> Vec<Effect> {
        self.apply(FieldEvent::CharacterEntered { ch, index })
    }

    pub fn backspace(&mut self) -> Vec<Effect> {
        self.apply(FieldEvent::BackspacePressed)
    }

    pub fn clear(&mut self) -> Vec<Effect> {
        self.apply(FieldEvent::Cleared)
    }

    /// Apply an event and run its effects in order.
    pub fn apply(&mut self, event: FieldEvent) -> Vec<Effect> {
        debug!(?event, "field event");
        let effects = self.store.apply(event);
        for effect in &effects {
            self.run(effect);
        }
        effects
    }

    fn run(&self, effect: &Effect) {
        match effect {
            Effect::Focus(index) => {
                self.handles.focus(*index);
            }
            Effect::Blur(index) => {
                self.handles.blur(*index);
            }
            Effect::CodeChanged(code) => {
                if let Some(on_code_change) = &self.callbacks.on_code_change {
                    on_code_change(code);
                }
            }
            Effect::Fulfilled(fulfillment) => {
                if let Some(on_fulfill) = &self.callbacks.on_fulfill {
                    on_fulfill(fulfillment);
                }
            }
        }
    }
}
