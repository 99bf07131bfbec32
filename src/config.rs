//! Canvas and style configuration for the cross-section view.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by [`SectionConfig::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("canvasafmeting moet positief en eindig zijn, kreeg {width} x {height}")]
    CanvasSize { width: f64, height: f64 },
    #[error("marge {margin} laat geen tekenruimte over binnen {width} x {height}")]
    Margin { margin: f64, width: f64, height: f64 },
    #[error("kolombreedte moet positief zijn, kreeg {0}")]
    ColumnWidth(f64),
    #[error("diepte-interval van de schaalverdeling moet positief zijn, kreeg {0}")]
    DepthStep(f64),
}

/// Drawing configuration. All lengths are canvas pixels, except
/// `depth_step` which is in depth units (meters).
///
/// Deserializes with defaults for every missing field, so a front end may
/// send a partial object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SectionConfig {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
    pub column_width: f64,
    /// Interval between depth grid lines.
    pub depth_step: f64,
    pub background: String,
    pub column_stroke: String,
    /// Alpha applied to a layer color for connective fills (0-255).
    pub connector_alpha: u8,
    pub connector_stroke: String,
    pub grid_color: String,
    pub grid_dash: Vec<f64>,
    /// How far grid lines extend past the margins on both sides.
    pub grid_overhang: f64,
    pub label_color: String,
    pub elevation_color: String,
    pub label_font: String,
    pub small_font: String,
    /// Used when a layer color cannot be parsed.
    pub fallback_layer_color: String,
    pub line_width: f64,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 500.0,
            margin: 60.0,
            column_width: 40.0,
            depth_step: 2.0,
            background: "#f8f9fa".to_owned(),
            column_stroke: "#000".to_owned(),
            connector_alpha: 0x80,
            connector_stroke: "#00000040".to_owned(),
            grid_color: "#666".to_owned(),
            grid_dash: vec![5.0, 3.0],
            grid_overhang: 10.0,
            label_color: "#000".to_owned(),
            elevation_color: "#666".to_owned(),
            label_font: "14px Arial".to_owned(),
            small_font: "12px Arial".to_owned(),
            fallback_layer_color: "#cccccc".to_owned(),
            line_width: 1.0,
        }
    }
}

impl SectionConfig {
    /// Same defaults with another canvas size.
    #[must_use]
    pub fn with_size(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |value: f64| value.is_finite() && value > 0.0;

        if !positive(self.width) || !positive(self.height) {
            return Err(ConfigError::CanvasSize {
                width: self.width,
                height: self.height,
            });
        }
        if !self.margin.is_finite()
            || self.margin < 0.0
            || 2.0 * self.margin >= self.width
            || 2.0 * self.margin >= self.height
        {
            return Err(ConfigError::Margin {
                margin: self.margin,
                width: self.width,
                height: self.height,
            });
        }
        if !positive(self.column_width) {
            return Err(ConfigError::ColumnWidth(self.column_width));
        }
        if !positive(self.depth_step) {
            return Err(ConfigError::DepthStep(self.depth_step));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, SectionConfig};

    #[test]
    fn defaults_match_canvas_constants() {
        let config = SectionConfig::default();
        assert_eq!((config.width, config.height), (1000.0, 500.0));
        assert_eq!(config.margin, 60.0);
        assert_eq!(config.column_width, 40.0);
        assert_eq!(config.depth_step, 2.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: SectionConfig =
            serde_json::from_str(r#"{"width": 800, "columnWidth": 30}"#).unwrap();
        assert_eq!(config.width, 800.0);
        assert_eq!(config.column_width, 30.0);
        assert_eq!(config.height, 500.0);
        assert_eq!(config.grid_dash, vec![5.0, 3.0]);
    }

    #[test]
    fn rejects_degenerate_canvas() {
        assert!(matches!(
            SectionConfig::with_size(0.0, 500.0).validate(),
            Err(ConfigError::CanvasSize { .. })
        ));
        assert!(matches!(
            SectionConfig::with_size(100.0, 100.0).validate(),
            Err(ConfigError::Margin { .. })
        ));

        let mut config = SectionConfig::default();
        config.depth_step = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::DepthStep(0.0)));
    }
}
