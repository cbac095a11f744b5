//! Duocalc - Two-Operand Arithmetic Calculator
//!
//! The user enters two numbers, picks one of four operations, and sees the
//! rounded result or a correctable error. The functional core is a pure
//! state machine (`core`) that the frontends merely render:
//!
//! - **TUI** (`tui` feature, default): terminal frontend built on ratatui.
//! - **Browser** (`wasm` feature): wasm-bindgen bindings over the same core.
//!
//! The core and the platform-neutral browser wrapper compile with no
//! features at all, so every behavior is testable without a terminal or a
//! browser attached.
//!
//! # Example
//!
//! ```rust
//! use duocalc::prelude::*;
//!
//! let mut state = InteractionState::new();
//! state.on_operand_changed(OperandSlot::First, "10");
//! state.on_operand_changed(OperandSlot::Second, "4");
//! state.on_operation_selected(Operation::Divide);
//!
//! assert_eq!(state.phase(), Phase::Result);
//! assert_eq!(state.result_display(), "2.5");
//!
//! // Division by zero is an outcome, never a panic
//! state.on_operand_changed(OperandSlot::Second, "0");
//! state.on_operation_selected(Operation::Divide);
//! assert_eq!(state.phase(), Phase::Error);
//! ```

// Allow common test patterns in this crate
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;

#[cfg(feature = "tui")]
pub mod tui;

/// WASM module - the platform-neutral wrapper is always available so the
/// browser behavior can be tested without actual browser bindings
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::normalize::{normalize, ValidatedOperands};
    pub use crate::core::operations::{Evaluator, Operation};
    pub use crate::core::state::{
        CalculationOutcome, InteractionState, OperandSlot, Phase, RawInput,
    };
    pub use crate::core::{CalcError, CalcResult};
    pub use crate::wasm::{StateSnapshot, WasmCalculator};

    #[cfg(feature = "tui")]
    pub use crate::tui::{CalculatorApp, InputHandler, KeyAction};
}
