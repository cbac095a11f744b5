//! TUI application state: the core interaction state plus frontend-only
//! bookkeeping (field focus, quit flag).

use crate::core::operations::Operation;
use crate::core::state::{InteractionState, OperandSlot, Phase};

/// Calculator application state for the terminal frontend.
///
/// All edits route through the core transitions; the app never mutates the
/// raw text behind the state machine's back.
#[derive(Debug)]
pub struct CalculatorApp {
    /// The calculator core
    state: InteractionState,
    /// Which operand field has keyboard focus
    focus: OperandSlot,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new app in the initial `Empty` state with the first field
    /// focused
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: InteractionState::new(),
            focus: OperandSlot::First,
            should_quit: false,
        }
    }

    /// Returns the core interaction state
    #[must_use]
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Returns the focused field
    #[must_use]
    pub fn focus(&self) -> OperandSlot {
        self.focus
    }

    /// Returns the text of the focused field
    #[must_use]
    pub fn focused_text(&self) -> &str {
        self.state.raw().get(self.focus)
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Moves focus to the other operand field
    pub fn switch_focus(&mut self) {
        self.focus = self.focus.other();
    }

    /// Appends a character to the focused field
    pub fn insert_char(&mut self, c: char) {
        let mut text = self.focused_text().to_string();
        text.push(c);
        self.state.on_operand_changed(self.focus, &text);
    }

    /// Removes the last character of the focused field
    pub fn backspace(&mut self) {
        let mut text = self.focused_text().to_string();
        if text.pop().is_some() {
            self.state.on_operand_changed(self.focus, &text);
        }
    }

    /// Selects an operation, which immediately attempts the calculation
    pub fn select_operation(&mut self, op: Operation) {
        self.state.on_operation_selected(op);
    }

    /// Clears input, outcome, and selection; focus returns to the first
    /// field
    pub fn reset(&mut self) {
        self.state.on_reset();
        self.focus = OperandSlot::First;
    }

    /// Current display phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Whether the reset control should be offered
    #[must_use]
    pub fn can_reset(&self) -> bool {
        self.state.can_reset()
    }
}
