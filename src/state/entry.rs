//! Entry state machine - the cursor logic of a code field.
//!
//! The machine owns the per-cell characters and an explicit cursor state:
//!
//! - `Entering(cursor)` - cells before `cursor` are filled, cells from
//!   `cursor` on are empty
//! - `Complete` - every cell is filled and the attempt was accepted
//!
//! It is advanced by [`FieldEvent`]s and answers with the [`Effect`]s the
//! caller must carry out (focus requests, callbacks), in order. The machine
//! itself performs no side effects.

use tracing::{debug, trace};

// =============================================================================
// TYPES
// =============================================================================

/// Where the next character goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryState {
    /// Waiting for a character in cell `cursor`.
    Entering(usize),
    /// All cells filled and accepted.
    Complete,
}

/// Input to the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    CharacterEntered { ch: char, index: usize },
    BackspacePressed,
    CellFocused(usize),
    Cleared,
}

/// Result of a completed entry attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fulfillment {
    pub code: String,
    /// `Some` only when a comparison target is configured.
    pub is_matching: Option<bool>,
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Move host input focus to a cell.
    Focus(usize),
    /// Remove host input focus from a cell.
    Blur(usize),
    /// The joined code changed.
    CodeChanged(String),
    /// The last cell was filled.
    Fulfilled(Fulfillment),
}

// =============================================================================
// MATCHER
// =============================================================================

/// Local comparison of an entered code against an expected one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Matcher {
    target: Option<String>,
    ignore_case: bool,
}

impl Matcher {
    pub fn new(target: Option<String>, ignore_case: bool) -> Self {
        Self { target, ignore_case }
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// `None` when there is nothing to compare with.
    pub fn matches(&self, code: &str) -> Option<bool> {
        let target = self.target.as_deref()?;
        Some(if self.ignore_case {
            code.to_lowercase() == target.to_lowercase()
        } else {
            code == target
        })
    }
}

// =============================================================================
// CODE STATE
// =============================================================================

/// Cells plus cursor, always in filled-prefix / empty-suffix shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeState {
    cells: Vec<Option<char>>,
    entry: EntryState,
}

impl CodeState {
    /// All-empty state with the cursor on cell 0. `len` below 1 is treated as 1.
    pub fn new(len: usize) -> Self {
        Self {
            cells: vec![None; len.max(1)],
            entry: EntryState::Entering(0),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[Option<char>] {
        &self.cells
    }

    pub fn entry(&self) -> EntryState {
        self.entry
    }

    pub fn is_complete(&self) -> bool {
        self.entry == EntryState::Complete
    }

    /// Cursor position; `len()` once complete.
    pub fn cursor(&self) -> usize {
        match self.entry {
            EntryState::Entering(cursor) => cursor,
            EntryState::Complete => self.len(),
        }
    }

    /// Cell awaiting input, if any.
    pub fn active_index(&self) -> Option<usize> {
        match self.entry {
            EntryState::Entering(cursor) => Some(cursor),
            EntryState::Complete => None,
        }
    }

    /// Joined code. Empty cells contribute nothing.
    pub fn value(&self) -> String {
        self.cells.iter().flatten().collect()
    }

    /// Check the filled-prefix / empty-suffix shape.
    pub fn holds_invariant(&self) -> bool {
        let cursor = self.cursor();
        self.cells
            .iter()
            .enumerate()
            .all(|(i, cell)| cell.is_some() == (i < cursor))
    }

    /// Advance the machine by one event.
    pub fn step(&mut self, event: FieldEvent, matcher: &Matcher) -> Vec<Effect> {
        let effects = match event {
            FieldEvent::CellFocused(index) => self.focus(index),
            FieldEvent::CharacterEntered { ch, index } => self.enter_character(ch, index, matcher),
            FieldEvent::BackspacePressed => self.backspace(),
            FieldEvent::Cleared => self.clear(),
        };
        debug_assert!(self.holds_invariant());
        effects
    }

    fn focus(&mut self, index: usize) -> Vec<Effect> {
        if index >= self.len() {
            trace!(index, len = self.len(), "focus outside the field ignored");
            return Vec::new();
        }
        let resolved = self.resolve(index);
        vec![Effect::Focus(resolved)]
    }

    fn enter_character(&mut self, ch: char, index: usize, matcher: &Matcher) -> Vec<Effect> {
        if index >= self.len() {
            trace!(index, len = self.len(), "character outside the field ignored");
            return Vec::new();
        }

        let index = self.resolve(index);
        self.cells[index] = Some(ch);
        let value = self.value();

        if index + 1 < self.len() {
            self.entry = EntryState::Entering(index + 1);
            debug!(cursor = index + 1, "cursor advanced");
            return vec![Effect::Focus(index + 1), Effect::CodeChanged(value)];
        }

        self.entry = EntryState::Complete;
        let is_matching = matcher.matches(&value);
        debug!(?is_matching, "code complete");

        let mut effects = vec![
            Effect::CodeChanged(value.clone()),
            Effect::Fulfilled(Fulfillment { code: value, is_matching }),
        ];
        match is_matching {
            None => effects.push(Effect::Blur(index)),
            Some(false) => {
                self.reset();
                effects.push(Effect::Focus(0));
            }
            // Matched: cells stay filled and host focus is left alone.
            Some(true) => {}
        }
        effects
    }

    fn backspace(&mut self) -> Vec<Effect> {
        let next = self.cursor().saturating_sub(1);
        self.truncate_from(next);
        debug!(cursor = next, "backspace");
        vec![Effect::CodeChanged(self.value()), Effect::Focus(next)]
    }

    fn clear(&mut self) -> Vec<Effect> {
        self.reset();
        vec![Effect::Focus(0)]
    }

    /// Resolve a request to put the cursor on `index`.
    ///
    /// An empty cell before `index` wins and nothing is cleared. Otherwise
    /// every cell from `index` on is discarded.
    fn resolve(&mut self, index: usize) -> usize {
        match self.cells[..index].iter().position(Option::is_none) {
            Some(empty) => {
                trace!(requested = index, redirected = empty, "focus redirected to first empty cell");
                self.entry = EntryState::Entering(empty);
                empty
            }
            None => {
                self.truncate_from(index);
                index
            }
        }
    }

    fn truncate_from(&mut self, index: usize) {
        for cell in &mut self.cells[index..] {
            *cell = None;
        }
        self.entry = EntryState::Entering(index);
    }

    fn reset(&mut self) {
        self.cells.fill(None);
        self.entry = EntryState::Entering(0);
    }
}

// =============================================================================
// TESTS
// =============================================================================
