//! Code store - the entry machine published through signals.
//!
//! Hosts read the current cells, joined value and active cell through
//! [`Signal`]s so a renderer bound to them re-runs after every transition.
//! Updates are published before any effect runs, so callbacks observe the
//! post-transition state.

use spark_signals::{signal, Signal};

use super::entry::{CodeState, Effect, EntryState, FieldEvent, Matcher};

pub struct CodeStore {
    state: CodeState,
    matcher: Matcher,
    cells: Signal<Vec<Option<char>>>,
    value: Signal<String>,
    active: Signal<Option<usize>>,
}

impl CodeStore {
    pub fn new(len: usize, matcher: Matcher) -> Self {
        let state = CodeState::new(len);
        Self {
            cells: signal(state.cells().to_vec()),
            value: signal(state.value()),
            active: signal(state.active_index()),
            state,
            matcher,
        }
    }

    /// Apply one event, publish the new state and return its effects.
    pub fn apply(&mut self, event: FieldEvent) -> Vec<Effect> {
        let effects = self.state.step(event, &self.matcher);
        self.publish();
        effects
    }

    fn publish(&self) {
        self.cells.set(self.state.cells().to_vec());
        self.value.set(self.state.value());
        self.active.set(self.state.active_index());
    }

    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn entry(&self) -> EntryState {
        self.state.entry()
    }

    pub fn state(&self) -> &CodeState {
        &self.state
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn cells_signal(&self) -> Signal<Vec<Option<char>>> {
        self.cells.clone()
    }

    pub fn value_signal(&self) -> Signal<String> {
        self.value.clone()
    }

    pub fn active_signal(&self) -> Signal<Option<usize>> {
        self.active.clone()
    }
}
