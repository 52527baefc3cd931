//! Tunable constants, loadable from a partial JSON object

use serde::{Deserialize, Serialize};

use crate::error::PaintError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaintConfig {
    /// Side length of a cell (and of every painted square), in pixels
    pub cell_size: f64,
    pub grid_stroke_color: String,
    pub label_font: String,
    pub label_color: String,
    /// Fill color before the color input is touched
    pub default_color: String,
    /// Distance from the cursor to the color picker, both axes
    pub picker_offset: f64,
    pub canvas_id: String,
    pub picker_id: String,
    pub fallback_selector: String,
}

impl Default for PaintConfig {
    fn default() -> Self {
        Self {
            cell_size: 50.0,
            grid_stroke_color: "#707070".to_string(),
            label_font: "bold 20px Courier New".to_string(),
            label_color: "#707070".to_string(),
            default_color: "#2d2d2d".to_string(),
            picker_offset: 20.0,
            canvas_id: "paint_canvas".to_string(),
            picker_id: "pencilColor".to_string(),
            fallback_selector: ".canvas-not-supported-holder".to_string(),
        }
    }
}

impl PaintConfig {
    pub fn from_json(json: &str) -> Result<Self, PaintError> {
        let config: PaintConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PaintError> {
        validate_cell_size(self.cell_size)
    }
}

/// Smallest cell side accepted, in pixels
pub const MIN_CELL_SIZE: f64 = 1.0;

pub(crate) fn validate_cell_size(size: f64) -> Result<(), PaintError> {
    if !size.is_finite() || size < MIN_CELL_SIZE {
        return Err(PaintError::InvalidConfig(format!(
            "cell_size must be a number >= {}, got {}",
            MIN_CELL_SIZE, size
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = PaintConfig::from_json(r##"{ "cell_size": 32, "default_color": "#ff0000" }"##).unwrap();
        assert_eq!(config.cell_size, 32.0);
        assert_eq!(config.default_color, "#ff0000");
        assert_eq!(config.label_font, "bold 20px Courier New");
        assert_eq!(config.picker_offset, 20.0);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(PaintConfig::from_json("{}").unwrap(), PaintConfig::default());
    }

    #[test]
    fn rejects_non_positive_cell_size() {
        let err = PaintConfig::from_json(r#"{ "cell_size": 0 }"#).unwrap_err();
        assert!(matches!(err, PaintError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_sub_pixel_cell_size() {
        let err = PaintConfig::from_json(r#"{ "cell_size": 0.01 }"#).unwrap_err();
        assert!(matches!(err, PaintError::InvalidConfig(_)));
        assert!(PaintConfig::from_json(r#"{ "cell_size": 1 }"#).is_ok());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(PaintConfig::from_json("{ cell_size: }").is_err());
    }
}
