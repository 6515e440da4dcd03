//! Keyboard events and per-cell host events.
//!
//! [`CellEvent`] is what a host reports for one cell: it gained focus, its
//! text changed, a key was pressed on it, or it lost focus.
//! [`KeyboardEvent`] mirrors a key press; terminal hosts build one from a
//! crossterm event with [`convert_key_event`] and turn it into a cell event
//! with [`cell_event_for_key`].

use crossterm::event::{KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyModifiers};

// =============================================================================
// TYPES
// =============================================================================

/// Keyboard modifier state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }

    /// Any modifier that turns a character key into a shortcut.
    pub fn is_command(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

/// Key event state (press, repeat, release)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Keyboard event
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// The key that was pressed (e.g., "a", "Backspace", "ArrowLeft")
    pub key: String,
    pub modifiers: Modifiers,
    pub state: KeyState,
}

impl KeyboardEvent {
    /// Create a simple key press event
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            state: KeyState::Press,
        }
    }

    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    /// Press or auto-repeat.
    pub fn is_press(&self) -> bool {
        self.state != KeyState::Release
    }

    /// Backspace or Delete, the keys that erase a cell.
    pub fn is_delete(&self) -> bool {
        matches!(self.key.as_str(), "Backspace" | "Delete")
    }

    /// The typed character, for single-character keys without command modifiers.
    pub fn as_char(&self) -> Option<char> {
        if self.modifiers.is_command() {
            return None;
        }
        let mut chars = self.key.chars();
        let ch = chars.next()?;
        if chars.next().is_some() {
            return None; // named key
        }
        Some(ch)
    }
}

/// Event a host raises on one cell.
#[derive(Clone, Debug, PartialEq)]
pub enum CellEvent {
    Focused,
    /// New cell text; only its first character is used.
    TextChanged(String),
    KeyPressed(KeyboardEvent),
    Blurred,
}

// =============================================================================
// CROSSTERM CONVERSION
// =============================================================================

/// Convert crossterm KeyEvent to our KeyboardEvent
pub fn convert_key_event(event: CrosstermKeyEvent) -> KeyboardEvent {
    let key = match event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "BackTab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        _ => String::new(),
    };

    let state = match event.kind {
        KeyEventKind::Press => KeyState::Press,
        KeyEventKind::Repeat => KeyState::Repeat,
        KeyEventKind::Release => KeyState::Release,
    };

    KeyboardEvent {
        key,
        modifiers: convert_modifiers(event.modifiers),
        state,
    }
}

fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.contains(KeyModifiers::ALT),
        shift: mods.contains(KeyModifiers::SHIFT),
        meta: mods.contains(KeyModifiers::META) || mods.contains(KeyModifiers::SUPER),
    }
}

/// Map a key press on a terminal cell to the event a text input would raise.
///
/// Characters become text changes, delete keys stay key presses, anything
/// else (releases, shortcuts, navigation) is not a cell event.
pub fn cell_event_for_key(event: &KeyboardEvent) -> Option<CellEvent> {
    if !event.is_press() {
        return None;
    }
    if event.is_delete() {
        return Some(CellEvent::KeyPressed(event.clone()));
    }
    event.as_char().map(|ch| CellEvent::TextChanged(ch.to_string()))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_char_and_backspace() {
        let event = convert_key_event(CrosstermKeyEvent::new(KeyCode::Char('7'), KeyModifiers::NONE));
        assert_eq!(event.key, "7");
        assert_eq!(event.as_char(), Some('7'));

        let event = convert_key_event(CrosstermKeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE));
        assert!(event.is_delete());
        assert_eq!(event.as_char(), None);
    }

    #[test]
    fn test_convert_modifiers() {
        let event = convert_key_event(CrosstermKeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        ));
        assert!(event.modifiers.ctrl);
        assert!(event.modifiers.shift);
        assert!(!event.modifiers.alt);
    }

    #[test]
    fn test_cell_event_for_key() {
        assert_eq!(
            cell_event_for_key(&KeyboardEvent::new("a")),
            Some(CellEvent::TextChanged("a".to_string()))
        );
        assert_eq!(
            cell_event_for_key(&KeyboardEvent::new("Backspace")),
            Some(CellEvent::KeyPressed(KeyboardEvent::new("Backspace")))
        );
        assert_eq!(cell_event_for_key(&KeyboardEvent::new("ArrowLeft")), None);
        assert_eq!(
            cell_event_for_key(&KeyboardEvent::with_modifiers("c", Modifiers::ctrl())),
            None
        );

        let mut release = KeyboardEvent::new("a");
        release.state = KeyState::Release;
        assert_eq!(cell_event_for_key(&release), None);
    }

    #[test]
    fn test_shift_keeps_typed_char() {
        let event = KeyboardEvent::with_modifiers(
            "A",
            Modifiers { shift: true, ..Modifiers::none() },
        );
        assert_eq!(event.as_char(), Some('A'));
    }
}
