use serde::{Deserialize, Serialize};

use crate::core::{ScaleExtent, Viewport};
use crate::error::{ZoomError, ZoomResult};
use crate::interaction::{DoubleClickZoom, GestureConfig};

/// Public controller bootstrap configuration.
///
/// Serializable so hosts can ship tuning alongside their plot setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomControllerConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub scale_extent: ScaleExtent,
    /// Minimum redraw-loop run after each zoom input.
    #[serde(default = "default_settle_duration_ms")]
    pub settle_duration_ms: f64,
    /// Duration used by fly-to transitions when the caller passes none.
    #[serde(default = "default_transition_ms")]
    pub default_transition_ms: f64,
    #[serde(default = "default_pointer_move_rate_hz")]
    pub pointer_move_rate_hz: f64,
    #[serde(default)]
    pub gesture: GestureConfig,
    #[serde(default = "default_wheel_sensitivity")]
    pub wheel_sensitivity: f64,
    #[serde(default)]
    pub double_click_zoom: DoubleClickZoom,
    /// `(dx, dy)` applied to hover annotations.
    #[serde(default = "default_annotation_offset")]
    pub annotation_offset: (f64, f64),
}

impl ZoomControllerConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            scale_extent: ScaleExtent::default(),
            settle_duration_ms: default_settle_duration_ms(),
            default_transition_ms: default_transition_ms(),
            pointer_move_rate_hz: default_pointer_move_rate_hz(),
            gesture: GestureConfig::default(),
            wheel_sensitivity: default_wheel_sensitivity(),
            double_click_zoom: DoubleClickZoom::default(),
            annotation_offset: default_annotation_offset(),
        }
    }

    #[must_use]
    pub fn with_scale_extent(mut self, scale_extent: ScaleExtent) -> Self {
        self.scale_extent = scale_extent;
        self
    }

    #[must_use]
    pub fn with_gesture_config(mut self, gesture: GestureConfig) -> Self {
        self.gesture = gesture;
        self
    }

    #[must_use]
    pub fn with_settle_duration_ms(mut self, settle_duration_ms: f64) -> Self {
        self.settle_duration_ms = settle_duration_ms;
        self
    }

    #[must_use]
    pub fn with_default_transition_ms(mut self, default_transition_ms: f64) -> Self {
        self.default_transition_ms = default_transition_ms;
        self
    }

    #[must_use]
    pub fn with_pointer_move_rate_hz(mut self, pointer_move_rate_hz: f64) -> Self {
        self.pointer_move_rate_hz = pointer_move_rate_hz;
        self
    }

    #[must_use]
    pub fn with_double_click_zoom(mut self, double_click_zoom: DoubleClickZoom) -> Self {
        self.double_click_zoom = double_click_zoom;
        self
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(self) -> ZoomResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ZoomError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ZoomResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ZoomError::InvalidData(format!("failed to parse config: {e}")))
    }
}

pub(super) fn validate_controller_config(
    config: ZoomControllerConfig,
) -> ZoomResult<ZoomControllerConfig> {
    config.viewport.validate()?;
    config.scale_extent.validate()?;
    config.gesture.validate()?;

    for (name, value) in [
        ("settle_duration_ms", config.settle_duration_ms),
        ("default_transition_ms", config.default_transition_ms),
        ("double_click_zoom.duration_ms", config.double_click_zoom.duration_ms),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ZoomError::InvalidData(format!(
                "`{name}` must be finite and >= 0"
            )));
        }
    }
    for (name, value) in [
        ("pointer_move_rate_hz", config.pointer_move_rate_hz),
        ("wheel_sensitivity", config.wheel_sensitivity),
        ("double_click_zoom.factor", config.double_click_zoom.factor),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ZoomError::InvalidData(format!(
                "`{name}` must be finite and > 0"
            )));
        }
    }
    let (dx, dy) = config.annotation_offset;
    if !dx.is_finite() || !dy.is_finite() {
        return Err(ZoomError::InvalidData(
            "annotation offset must be finite".to_owned(),
        ));
    }
    Ok(config)
}

fn default_settle_duration_ms() -> f64 {
    10_000.0
}

fn default_transition_ms() -> f64 {
    4_000.0
}

fn default_pointer_move_rate_hz() -> f64 {
    20.0
}

fn default_wheel_sensitivity() -> f64 {
    0.002
}

fn default_annotation_offset() -> (f64, f64) {
    (0.0, 30.0)
}
