//! Interaction state: the single snapshot of user-visible calculator state
//! and the three transitions the frontends drive it through.

use serde::{Deserialize, Serialize};

use crate::core::normalize::normalize;
use crate::core::operations::{Evaluator, Operation};
use crate::core::CalcResult;

/// Names which operand field an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperandSlot {
    /// The first (left-hand) operand field
    First,
    /// The second (right-hand) operand field
    Second,
}

impl OperandSlot {
    /// Returns the other slot
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

/// The raw text of the two operand fields, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
    /// First operand field text
    pub first: String,
    /// Second operand field text
    pub second: String,
}

impl RawInput {
    /// Returns the text of one field
    #[must_use]
    pub fn get(&self, slot: OperandSlot) -> &str {
        match slot {
            OperandSlot::First => &self.first,
            OperandSlot::Second => &self.second,
        }
    }

    fn set(&mut self, slot: OperandSlot, text: &str) {
        match slot {
            OperandSlot::First => self.first = text.to_string(),
            OperandSlot::Second => self.second = text.to_string(),
        }
    }

    fn clear(&mut self) {
        self.first.clear();
        self.second.clear();
    }

    /// True when both fields are empty (untrimmed keystroke-level emptiness)
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.first.is_empty() && self.second.is_empty()
    }
}

/// Tagged result of a calculation attempt: a rounded value or the failure
/// the user has to correct
pub type CalculationOutcome = CalcResult<f64>;

/// The display panel's state, derived from the interaction state.
///
/// An existing outcome takes precedence over the raw-text tests, which is
/// what keeps a stale result or error visible while the user retypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No input and no outcome; nothing to clear
    Empty,
    /// Some raw text, no calculation attempted yet
    Editing,
    /// Last calculation produced a value
    Result,
    /// Last calculation produced a failure
    Error,
}

/// The complete snapshot of user-visible calculator state.
///
/// Owned exclusively by the running frontend and mutated only through the
/// three transition methods, each of which runs to completion before the
/// next user action is accepted. Never persisted.
///
/// Invariants: `outcome` and `selected` are cleared together by
/// [`on_reset`](Self::on_reset), and `selected` is set before an outcome is
/// computed so the attempted operation stays highlighted even when
/// validation fails.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    raw: RawInput,
    outcome: Option<CalculationOutcome>,
    selected: Option<Operation>,
}

impl InteractionState {
    /// Creates the initial `Empty` state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw field text
    #[must_use]
    pub fn raw(&self) -> &RawInput {
        &self.raw
    }

    /// Returns the last calculation outcome, if any
    #[must_use]
    pub fn outcome(&self) -> Option<&CalculationOutcome> {
        self.outcome.as_ref()
    }

    /// Returns the last selected operation, if any
    #[must_use]
    pub fn selected(&self) -> Option<Operation> {
        self.selected
    }

    /// Replaces the text of one operand field.
    ///
    /// A prior result or error is deliberately NOT cleared: it stays
    /// visible while the user retypes, until the next calculation attempt.
    pub fn on_operand_changed(&mut self, which: OperandSlot, text: &str) -> &Self {
        tracing::debug!(slot = ?which, %text, "operand edited");
        self.raw.set(which, text);
        self
    }

    /// Selects an operation and immediately attempts the calculation.
    ///
    /// The selection is recorded before validation runs, so a failed
    /// normalization still leaves the attempted operation highlighted.
    pub fn on_operation_selected(&mut self, op: Operation) -> &Self {
        self.selected = Some(op);
        let outcome = normalize(&self.raw.first, &self.raw.second)
            .and_then(|operands| Evaluator::evaluate(operands, op));
        tracing::debug!(op = op.glyph(), ?outcome, "calculation attempted");
        self.outcome = Some(outcome);
        self
    }

    /// Clears raw input, outcome, and selection; returns to `Empty`.
    ///
    /// Idempotent.
    pub fn on_reset(&mut self) -> &Self {
        tracing::debug!("state reset");
        self.raw.clear();
        self.outcome = None;
        self.selected = None;
        self
    }

    /// Derives the current display phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        match &self.outcome {
            Some(Ok(_)) => Phase::Result,
            Some(Err(_)) => Phase::Error,
            None if self.raw.is_blank() => Phase::Empty,
            None => Phase::Editing,
        }
    }

    /// True when there is anything to clear; collaborators offer the reset
    /// control only then
    #[must_use]
    pub fn can_reset(&self) -> bool {
        self.phase() != Phase::Empty
    }

    /// The exact string a collaborator shows in the display panel: the
    /// formatted value, the error message, or `""` for placeholder states.
    #[must_use]
    pub fn result_display(&self) -> String {
        match &self.outcome {
            Some(Ok(value)) => format_number(*value),
            Some(Err(e)) => e.to_string(),
            None => String::new(),
        }
    }
}

/// Formats a result value for display.
///
/// Integers drop their decimals, everything else is printed to the four
/// rounded places with trailing zeros trimmed. Both frontends display
/// through this one function so they can never disagree.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        // Results are already rounded to 4 places; printing more would
        // resurrect float noise
        let formatted = format!("{value:.4}");
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CalcError;

    fn state_with(first: &str, second: &str) -> InteractionState {
        let mut state = InteractionState::new();
        state.on_operand_changed(OperandSlot::First, first);
        state.on_operand_changed(OperandSlot::Second, second);
        state
    }

    // ===== Initial state tests =====

    #[test]
    fn test_initial_state_empty() {
        let state = InteractionState::new();
        assert_eq!(state.phase(), Phase::Empty);
        assert!(state.outcome().is_none());
        assert!(state.selected().is_none());
        assert!(!state.can_reset());
        assert_eq!(state.result_display(), "");
    }

    // ===== OperandSlot tests =====

    #[test]
    fn test_operand_slot_other() {
        assert_eq!(OperandSlot::First.other(), OperandSlot::Second);
        assert_eq!(OperandSlot::Second.other(), OperandSlot::First);
    }

    // ===== Edit transition tests =====

    #[test]
    fn test_edit_moves_to_editing() {
        let mut state = InteractionState::new();
        state.on_operand_changed(OperandSlot::First, "1");
        assert_eq!(state.phase(), Phase::Editing);
        assert!(state.can_reset());
    }

    #[test]
    fn test_edit_targets_the_named_slot() {
        let state = state_with("10", "4");
        assert_eq!(state.raw().get(OperandSlot::First), "10");
        assert_eq!(state.raw().get(OperandSlot::Second), "4");
    }

    #[test]
    fn test_edit_replaces_text() {
        let mut state = state_with("10", "4");
        state.on_operand_changed(OperandSlot::First, "7");
        assert_eq!(state.raw().first, "7");
    }

    #[test]
    fn test_clearing_both_fields_returns_to_empty() {
        let mut state = state_with("10", "4");
        state.on_operand_changed(OperandSlot::First, "");
        state.on_operand_changed(OperandSlot::Second, "");
        assert_eq!(state.phase(), Phase::Empty);
    }

    // ===== Selection transition tests =====

    #[test]
    fn test_select_computes_result() {
        let mut state = state_with("10", "4");
        state.on_operation_selected(Operation::Divide);
        assert_eq!(state.phase(), Phase::Result);
        assert_eq!(state.outcome(), Some(&Ok(2.5)));
        assert_eq!(state.selected(), Some(Operation::Divide));
    }

    #[test]
    fn test_select_records_operation_before_validation() {
        let mut state = state_with("", "5");
        state.on_operation_selected(Operation::Add);
        // Validation failed but the attempted operation is still visible
        assert_eq!(state.selected(), Some(Operation::Add));
        assert_eq!(state.outcome(), Some(&Err(CalcError::EmptyInput)));
        assert_eq!(state.phase(), Phase::Error);
    }

    #[test]
    fn test_select_division_by_zero() {
        let mut state = state_with("7", "0");
        state.on_operation_selected(Operation::Divide);
        assert_eq!(state.outcome(), Some(&Err(CalcError::DivisionByZero)));
        assert_eq!(state.phase(), Phase::Error);
    }

    #[test]
    fn test_select_invalid_format() {
        let mut state = state_with("abc", "2");
        state.on_operation_selected(Operation::Add);
        assert_eq!(state.outcome(), Some(&Err(CalcError::InvalidFormat)));
    }

    #[test]
    fn test_reselect_overwrites_outcome() {
        let mut state = state_with("7", "0");
        state.on_operation_selected(Operation::Divide);
        assert_eq!(state.phase(), Phase::Error);
        state.on_operation_selected(Operation::Add);
        assert_eq!(state.phase(), Phase::Result);
        assert_eq!(state.result_display(), "7");
    }

    // ===== Stale outcome tests =====

    #[test]
    fn test_edit_keeps_stale_result_visible() {
        let mut state = state_with("10", "4");
        state.on_operation_selected(Operation::Add);
        assert_eq!(state.phase(), Phase::Result);

        state.on_operand_changed(OperandSlot::First, "99");
        // Outcome persists until the next calculation attempt
        assert_eq!(state.phase(), Phase::Result);
        assert_eq!(state.result_display(), "14");
    }

    #[test]
    fn test_edit_keeps_stale_error_visible() {
        let mut state = state_with("7", "0");
        state.on_operation_selected(Operation::Divide);
        state.on_operand_changed(OperandSlot::Second, "2");
        assert_eq!(state.phase(), Phase::Error);
    }

    #[test]
    fn test_stale_result_with_cleared_fields_still_offers_reset() {
        let mut state = state_with("10", "4");
        state.on_operation_selected(Operation::Add);
        state.on_operand_changed(OperandSlot::First, "");
        state.on_operand_changed(OperandSlot::Second, "");
        assert!(state.can_reset());
    }

    // ===== Reset transition tests =====

    #[test]
    fn test_reset_clears_everything() {
        let mut state = state_with("10", "4");
        state.on_operation_selected(Operation::Multiply);
        state.on_reset();
        assert_eq!(state.phase(), Phase::Empty);
        assert!(state.raw().is_blank());
        assert!(state.outcome().is_none());
        assert!(state.selected().is_none());
    }

    #[test]
    fn test_reset_idempotent() {
        let mut state = state_with("10", "4");
        state.on_operation_selected(Operation::Multiply);
        state.on_reset();
        let once = state.clone();
        state.on_reset();
        assert_eq!(state, once);
        assert_eq!(state, InteractionState::new());
    }

    // ===== Display tests =====

    #[test]
    fn test_result_display_error_message() {
        let mut state = state_with("7", "0");
        state.on_operation_selected(Operation::Divide);
        assert_eq!(state.result_display(), "Cannot divide by zero");
    }

    #[test]
    fn test_result_display_rounded_multiply() {
        let mut state = state_with("3.14159", "2");
        state.on_operation_selected(Operation::Multiply);
        assert_eq!(state.result_display(), "6.2832");
    }

    #[test]
    fn test_result_display_infinite_value() {
        let mut state = state_with("1e308", "1e308");
        state.on_operation_selected(Operation::Add);
        assert_eq!(state.phase(), Phase::Result);
        assert_eq!(state.result_display(), "inf");
    }

    // ===== format_number tests =====

    #[test]
    fn test_format_number_integer() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-42.0), "-42");
    }

    #[test]
    fn test_format_number_decimal() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(6.2832), "6.2832");
    }

    #[test]
    fn test_format_number_trailing_zeros_trimmed() {
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(0.25), "0.25");
    }

    #[test]
    fn test_format_number_zero() {
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_format_number_infinity() {
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
    }
}
