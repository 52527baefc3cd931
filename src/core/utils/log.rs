//! Console logging macros
//!
//! On wasm32 these forward to the browser console through the crate's own
//! `web_sys` re-export, so callers need no `web_sys` dependency.
//! Everywhere else (native tests, tooling) they write to stderr, since calling
//! a wasm-bindgen import outside the browser aborts.
//!
//! Usage:
//! ```rust
//! use pixel_paint::console_log;
//!
//! let cells = 221;
//! console_log!("grid rebuilt: {} cells", cells);
//! ```

/// Log an informational line
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        #[cfg(target_arch = "wasm32")]
        {
            $crate::web_sys::console::log_1(&message.as_str().into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            eprintln!("[pixel-paint] {}", message);
        }
    }};
}

/// Log a warning line
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        let message = format!($($arg)*);
        #[cfg(target_arch = "wasm32")]
        {
            $crate::web_sys::console::warn_1(&message.as_str().into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            eprintln!("[pixel-paint] warning: {}", message);
        }
    }};
}
