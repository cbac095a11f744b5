//! Browser bindings over [`WasmCalculator`] using wasm-bindgen.
//!
//! The page passes operand text and operation glyphs; every call returns
//! enough for the next render, and `snapshot` hands back the full state as
//! JSON.

// Note: This module is conditionally compiled via #[cfg(feature = "wasm")] in mod.rs

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::wasm::calculator::WasmCalculator;

/// Browser calculator - the WASM entry point
#[derive(Debug)]
#[wasm_bindgen]
pub struct BrowserCalculator {
    inner: WasmCalculator,
}

impl Default for BrowserCalculator {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl BrowserCalculator {
    /// Create a new browser calculator
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        // Panic hook gives readable messages in the browser console
        console_error_panic_hook::set_once();
        console::log_1(&"duocalc ready".into());

        Self {
            inner: WasmCalculator::new(),
        }
    }

    /// Get the first operand field's text
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn first(&self) -> String {
        self.inner.state().raw().first.clone()
    }

    /// Set the first operand field's text
    #[wasm_bindgen(setter)]
    pub fn set_first(&mut self, value: String) {
        self.inner.set_first_operand(&value);
    }

    /// Get the second operand field's text
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn second(&self) -> String {
        self.inner.state().raw().second.clone()
    }

    /// Set the second operand field's text
    #[wasm_bindgen(setter)]
    pub fn set_second(&mut self, value: String) {
        self.inner.set_second_operand(&value);
    }

    /// The display panel string: formatted result, error message, or ""
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn display(&self) -> String {
        self.inner.result_display()
    }

    /// Glyph of the selected operation, or "" when none is selected
    #[wasm_bindgen(getter, js_name = selectedGlyph)]
    #[must_use]
    pub fn selected_glyph(&self) -> String {
        self.inner
            .snapshot()
            .selected_glyph
            .unwrap_or_default()
    }

    /// Whether the page should offer the clear control
    #[wasm_bindgen(getter, js_name = canReset)]
    #[must_use]
    pub fn can_reset(&self) -> bool {
        self.inner.state().can_reset()
    }

    /// Select an operation by its button glyph and return the new display
    /// string. Unknown glyphs are ignored and return the current display.
    pub fn select(&mut self, glyph: &str) -> String {
        if !self.inner.select_glyph(glyph) {
            console::warn_1(&format!("unknown operation glyph: {glyph}").into());
        }
        self.inner.result_display()
    }

    /// Clear input, outcome, and selection
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// The full state snapshot as JSON for the page to render from
    #[must_use]
    pub fn snapshot(&self) -> String {
        self.inner.snapshot_json()
    }
}
