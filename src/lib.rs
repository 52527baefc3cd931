//! Pixel Paint - full-window grid painting on a browser canvas
//!
//! Move the pointer over the grid; hold the primary button to fill the
//! nearest cell with the current color, hold the secondary button to erase.
//!
//! Architecture:
//! - core/   - grid layout, shape registry, pointer state (no browser types)
//! - render/ - drawing-surface seam and the cell/shape draw routines
//! - app/    - PaintCore (explicit app state, event queue, frame step) + JS facade
//! - web/    - DOM lookup, listeners and the requestAnimationFrame loop

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod app;
pub mod config;
pub mod error;
pub mod render;
pub mod web;

use wasm_bindgen::prelude::*;

// Reached by the exported logging macros as `$crate::web_sys`
#[doc(hidden)]
pub use web_sys;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize panic reporting and announce the module
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Pixel Paint {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get crate version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use app::{FrameStats, InputEvent, PaintCore, Painter};
pub use config::PaintConfig;
pub use error::PaintError;
pub use web::start;
