//! Platform-neutral browser wrapper: string-friendly signatures over the
//! core state machine and a serializable snapshot for the page to render
//! from.

use serde::{Deserialize, Serialize};

use crate::core::operations::Operation;
use crate::core::state::{InteractionState, OperandSlot, Phase};

/// One JSON-friendly projection of the interaction state per action.
///
/// The page renders exclusively from this; it never reaches into the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// Raw text of the first operand field
    pub first: String,
    /// Raw text of the second operand field
    pub second: String,
    /// Current display phase
    pub phase: Phase,
    /// Formatted result, error message, or `""` for placeholder states
    pub display: String,
    /// Glyph of the selected operation, if any
    pub selected_glyph: Option<String>,
    /// Whether the reset control should be offered
    pub can_reset: bool,
}

/// Browser-ready calculator wrapping the core state machine
#[derive(Debug, Default)]
pub struct WasmCalculator {
    state: InteractionState,
}

impl WasmCalculator {
    /// Creates a new calculator in the initial `Empty` state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the core interaction state
    #[must_use]
    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Replaces the first operand field's text
    pub fn set_first_operand(&mut self, text: &str) {
        self.state.on_operand_changed(OperandSlot::First, text);
    }

    /// Replaces the second operand field's text
    pub fn set_second_operand(&mut self, text: &str) {
        self.state.on_operand_changed(OperandSlot::Second, text);
    }

    /// Selects an operation, which immediately attempts the calculation
    pub fn select_operation(&mut self, op: Operation) {
        self.state.on_operation_selected(op);
    }

    /// Selects an operation by its canonical display glyph.
    ///
    /// Returns false (and changes nothing) for an unknown glyph.
    pub fn select_glyph(&mut self, glyph: &str) -> bool {
        match Operation::from_glyph(glyph) {
            Some(op) => {
                self.select_operation(op);
                true
            }
            None => false,
        }
    }

    /// Clears input, outcome, and selection
    pub fn reset(&mut self) {
        self.state.on_reset();
    }

    /// Current display phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// The display panel string (result, error message, or empty)
    #[must_use]
    pub fn result_display(&self) -> String {
        self.state.result_display()
    }

    /// Builds the snapshot the page renders from
    #[must_use]
    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            first: self.state.raw().first.clone(),
            second: self.state.raw().second.clone(),
            phase: self.state.phase(),
            display: self.state.result_display(),
            selected_glyph: self.state.selected().map(|op| op.glyph().to_string()),
            can_reset: self.state.can_reset(),
        }
    }

    /// The snapshot as JSON
    #[must_use]
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.snapshot()).unwrap_or_default()
    }
}
