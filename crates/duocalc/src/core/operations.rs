//! Arithmetic operations and the evaluator that applies them.

use serde::{Deserialize, Serialize};

use crate::core::normalize::ValidatedOperands;
use crate::core::{CalcError, CalcResult};

/// Type-safe operation enum - the four supported operations.
///
/// The variant is the identity used in `match` and equality; the display
/// glyph is lookup data attached to it, so glyph changes can never break a
/// selection comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operation {
    /// All operations in display order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the canonical display glyph for this operation
    #[must_use]
    pub const fn glyph(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Looks an operation up by its canonical glyph.
    ///
    /// Only the canonical glyphs resolve; keyboard aliases like `*` are the
    /// business of the input layers.
    #[must_use]
    pub fn from_glyph(glyph: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.glyph() == glyph)
    }
}

/// Scale factor for rounding results to 4 decimal places
const ROUND_SCALE: f64 = 10_000.0;

/// Rounds a raw result to 4 decimal places.
///
/// `f64::round` rounds half away from zero; that is the rounding choice
/// this calculator documents and tests against. Infinities pass through
/// unchanged.
#[must_use]
pub fn round4(value: f64) -> f64 {
    (value * ROUND_SCALE).round() / ROUND_SCALE
}

/// Core evaluator: validated operands + operation, result rounded for
/// display or a semantic failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    /// Applies an operation to validated operands.
    ///
    /// The raw floating-point result is rounded to 4 decimal places
    /// uniformly across all four operations. Operand magnitudes that
    /// overflow to infinity are not guarded: an infinite result is a valid
    /// value and renders as such. With division by zero excluded, finite
    /// operands can never produce NaN here.
    ///
    /// # Errors
    ///
    /// [`CalcError::DivisionByZero`] when dividing by exactly zero.
    pub fn evaluate(operands: ValidatedOperands, op: Operation) -> CalcResult<f64> {
        let ValidatedOperands { a, b } = operands;
        let raw = match op {
            Operation::Add => Self::add(a, b),
            Operation::Subtract => Self::subtract(a, b),
            Operation::Multiply => Self::multiply(a, b),
            Operation::Divide => Self::divide(a, b)?,
        };
        Ok(round4(raw))
    }

    /// Addition: a + b
    #[must_use]
    pub fn add(a: f64, b: f64) -> f64 {
        a + b
    }

    /// Subtraction: a - b
    #[must_use]
    pub fn subtract(a: f64, b: f64) -> f64 {
        a - b
    }

    /// Multiplication: a * b
    #[must_use]
    pub fn multiply(a: f64, b: f64) -> f64 {
        a * b
    }

    /// Division: a / b, rejecting a zero divisor.
    ///
    /// IEEE equality makes `-0` a zero divisor too.
    pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
        if b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Ok(a / b)
    }
}
