use std::fmt;

use wasm_bindgen::JsValue;

#[derive(Clone, Debug, PartialEq)]
pub enum PaintError {
    /// A paint/erase action found no cell under the cursor
    NoTargetCell { x: f64, y: f64 },
    InvalidConfig(String),
    /// A drawing call on the surface failed
    Surface(String),
    /// No 2D rendering surface is available
    Unsupported,
}

impl fmt::Display for PaintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaintError::NoTargetCell { x, y } => write!(f, "no grid cell near ({}, {})", x, y),
            PaintError::InvalidConfig(msg) => write!(f, "invalid config: {}", msg),
            PaintError::Surface(msg) => write!(f, "surface error: {}", msg),
            PaintError::Unsupported => write!(f, "2d canvas rendering is not supported"),
        }
    }
}

impl std::error::Error for PaintError {}

impl From<serde_json::Error> for PaintError {
    fn from(e: serde_json::Error) -> Self {
        PaintError::InvalidConfig(e.to_string())
    }
}

impl From<PaintError> for JsValue {
    fn from(e: PaintError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
