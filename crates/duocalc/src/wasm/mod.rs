//! Browser frontend: a platform-neutral wrapper over the core plus the
//! actual wasm-bindgen bindings.
//!
//! The wrapper compiles everywhere, so all browser-facing behavior is
//! testable natively; only `BrowserCalculator` needs the `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod calculator;

#[cfg(feature = "wasm")]
pub use browser::BrowserCalculator;
pub use calculator::{StateSnapshot, WasmCalculator};
