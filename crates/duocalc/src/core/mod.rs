//! Core calculator logic: input normalization, arithmetic evaluation, and
//! the interaction state machine.
//!
//! Everything in here is synchronous and side-effect free; the frontends
//! own the single `InteractionState` instance and drive it through its
//! three transition methods.

pub mod normalize;
pub mod operations;
pub mod state;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types - exhaustive enum, all user-correctable.
///
/// Every failure travels back to the display panel as a value; none of
/// them unwinds past an action handler. The display strings are the exact
/// messages shown to the user, one distinguishable message per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// One or both operand fields were blank after trimming
    #[error("Please enter both numbers")]
    EmptyInput,
    /// An operand field was non-blank but not a finite number
    #[error("Invalid number format")]
    InvalidFormat,
    /// Divide selected with a second operand of exactly zero
    #[error("Cannot divide by zero")]
    DivisionByZero,
}
