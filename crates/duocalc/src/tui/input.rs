//! Keyboard input handling: crossterm key events mapped to typed actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::operations::Operation;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Insert a character into the focused field
    InsertChar(char),
    /// Delete the last character of the focused field
    Backspace,
    /// Move focus to the other operand field
    SwitchField,
    /// Select an operation (which attempts the calculation)
    SelectOperation(Operation),
    /// Clear input, outcome, and selection
    Reset,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions.
///
/// `+` and `-` are ambiguous: they are operation keys, but also legal sign
/// characters inside an operand. They insert when they can only be a sign
/// (field empty, or right after an exponent marker) and select their
/// operation everywhere else.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action.
    ///
    /// `focused_text` is the current text of the focused field; the
    /// sign-position rule for `+`/`-` depends on it.
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent, focused_text: &str) -> KeyAction {
        let KeyEvent {
            code, modifiers, ..
        } = event;

        // Handle Ctrl+key combinations
        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::Reset,
                _ => KeyAction::None,
            };
        }

        match code {
            KeyCode::Char(c) => Self::char_action(c, focused_text),
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                KeyAction::SwitchField
            }
            KeyCode::Esc => KeyAction::Reset,
            _ => KeyAction::None,
        }
    }

    /// Maps a printable character to an action
    fn char_action(c: char, focused_text: &str) -> KeyAction {
        match c {
            '0'..='9' | '.' | 'e' | 'E' => KeyAction::InsertChar(c),
            '+' if Self::is_sign_position(focused_text) => KeyAction::InsertChar(c),
            '-' if Self::is_sign_position(focused_text) => KeyAction::InsertChar(c),
            '+' => KeyAction::SelectOperation(Operation::Add),
            '-' => KeyAction::SelectOperation(Operation::Subtract),
            '*' | '×' => KeyAction::SelectOperation(Operation::Multiply),
            '/' | '÷' => KeyAction::SelectOperation(Operation::Divide),
            'q' => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    /// True when a `+`/`-` keystroke can only mean a numeric sign: at the
    /// start of an empty field or immediately after an exponent marker.
    #[must_use]
    pub fn is_sign_position(text: &str) -> bool {
        text.is_empty() || text.ends_with(['e', 'E'])
    }
}
