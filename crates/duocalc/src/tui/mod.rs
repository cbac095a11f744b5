//! TUI frontend: renders the calculator state and feeds user actions back
//! into the core transitions.

mod app;
mod input;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use ui::{render, CalculatorUI};
