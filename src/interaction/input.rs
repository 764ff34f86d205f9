use serde::{Deserialize, Serialize};

use crate::core::{PixelPoint, ScaleExtent, ZoomTransform};
use crate::error::{ZoomError, ZoomResult};

/// Unit of a wheel delta, mirroring DOM `WheelEvent.deltaMode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum WheelDeltaMode {
    #[default]
    Pixel,
    Line,
    Page,
}

/// Raw zoom/pan input delivered by the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureInput {
    Wheel {
        x: f64,
        y: f64,
        delta_y: f64,
        delta_mode: WheelDeltaMode,
        ctrl_key: bool,
    },
    PanStart {
        x: f64,
        y: f64,
    },
    PanMove {
        x: f64,
        y: f64,
    },
    PanEnd,
    /// Combined relative scale of a pinch since the previous event.
    Pinch {
        x: f64,
        y: f64,
        scale_factor: f64,
    },
    DoubleClick {
        x: f64,
        y: f64,
        shift_key: bool,
    },
}

impl GestureInput {
    pub fn validate(self) -> ZoomResult<Self> {
        let finite = match self {
            Self::Wheel { x, y, delta_y, .. } => {
                x.is_finite() && y.is_finite() && delta_y.is_finite()
            }
            Self::PanStart { x, y } | Self::PanMove { x, y } | Self::DoubleClick { x, y, .. } => {
                x.is_finite() && y.is_finite()
            }
            Self::PanEnd => true,
            Self::Pinch { x, y, scale_factor } => {
                if !scale_factor.is_finite() || scale_factor <= 0.0 {
                    return Err(ZoomError::InvalidData(
                        "pinch scale factor must be finite and > 0".to_owned(),
                    ));
                }
                x.is_finite() && y.is_finite()
            }
        };
        if !finite {
            return Err(ZoomError::InvalidData(
                "gesture input coordinates must be finite".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Double-click zoom tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoubleClickZoom {
    pub enabled: bool,
    pub factor: f64,
    pub duration_ms: f64,
}

impl Default for DoubleClickZoom {
    fn default() -> Self {
        Self {
            enabled: true,
            factor: 2.0,
            duration_ms: 250.0,
        }
    }
}

/// Stateless zoom math: turns one input into the next transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomBehavior {
    pub scale_extent: ScaleExtent,
    pub wheel_sensitivity: f64,
}

impl ZoomBehavior {
    #[must_use]
    pub fn wheel_exponent(self, delta_y: f64, delta_mode: WheelDeltaMode, ctrl_key: bool) -> f64 {
        let unit = match delta_mode {
            WheelDeltaMode::Pixel => self.wheel_sensitivity,
            WheelDeltaMode::Line => 0.05,
            WheelDeltaMode::Page => 1.0,
        };
        let ctrl = if ctrl_key { 10.0 } else { 1.0 };
        -delta_y * unit * ctrl
    }

    /// Wheel zoom keeping the point under the pointer fixed.
    #[must_use]
    pub fn wheel(
        self,
        transform: ZoomTransform,
        pointer: PixelPoint,
        delta_y: f64,
        delta_mode: WheelDeltaMode,
        ctrl_key: bool,
    ) -> ZoomTransform {
        let factor = self.wheel_exponent(delta_y, delta_mode, ctrl_key).exp2();
        self.scale_around(transform, pointer, factor)
    }

    /// Multiplies `k` by `factor` (clamped) while keeping `center` fixed.
    #[must_use]
    pub fn scale_around(
        self,
        transform: ZoomTransform,
        center: PixelPoint,
        factor: f64,
    ) -> ZoomTransform {
        let anchor = transform.invert(center);
        let k = self.scale_extent.clamp(transform.k * factor);
        if k == transform.k {
            return transform;
        }
        Self::pin(ZoomTransform { k, ..transform }, center, anchor)
    }

    /// Translates so that pre-transform point `anchor` is displayed at `pointer`.
    #[must_use]
    pub fn pin(transform: ZoomTransform, pointer: PixelPoint, anchor: PixelPoint) -> ZoomTransform {
        ZoomTransform {
            k: transform.k,
            x: pointer.x - anchor.x * transform.k,
            y: pointer.y - anchor.y * transform.k,
        }
    }
}
