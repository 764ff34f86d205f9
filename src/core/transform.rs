use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, PixelPoint};
use crate::error::{ZoomError, ZoomResult};

/// Affine pan/zoom applied on top of the base data-to-pixel scales.
///
/// A pixel `p` produced by a base scale is displayed at `p * k + (x, y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomTransform {
    pub k: f64,
    pub x: f64,
    pub y: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ZoomTransform {
    pub const IDENTITY: Self = Self {
        k: 1.0,
        x: 0.0,
        y: 0.0,
    };

    pub fn new(k: f64, x: f64, y: f64) -> ZoomResult<Self> {
        if !k.is_finite() || k <= 0.0 {
            return Err(ZoomError::InvalidData(
                "zoom scale factor must be finite and > 0".to_owned(),
            ));
        }
        if !x.is_finite() || !y.is_finite() {
            return Err(ZoomError::InvalidData(
                "zoom translation must be finite".to_owned(),
            ));
        }
        Ok(Self { k, x, y })
    }

    /// Appends a translation expressed in pre-scale units.
    #[must_use]
    pub fn translate(self, tx: f64, ty: f64) -> Self {
        Self {
            k: self.k,
            x: self.x + self.k * tx,
            y: self.y + self.k * ty,
        }
    }

    /// Appends a uniform scale about the current origin.
    #[must_use]
    pub fn scale(self, factor: f64) -> Self {
        Self {
            k: self.k * factor,
            x: self.x,
            y: self.y,
        }
    }

    #[must_use]
    pub fn apply(self, point: PixelPoint) -> PixelPoint {
        PixelPoint::new(self.apply_x(point.x), self.apply_y(point.y))
    }

    #[must_use]
    pub fn apply_x(self, x: f64) -> f64 {
        x * self.k + self.x
    }

    #[must_use]
    pub fn apply_y(self, y: f64) -> f64 {
        y * self.k + self.y
    }

    #[must_use]
    pub fn invert(self, point: PixelPoint) -> PixelPoint {
        PixelPoint::new(self.invert_x(point.x), self.invert_y(point.y))
    }

    #[must_use]
    pub fn invert_x(self, x: f64) -> f64 {
        (x - self.x) / self.k
    }

    #[must_use]
    pub fn invert_y(self, y: f64) -> f64 {
        (y - self.y) / self.k
    }

    /// Derives the zoomed x scale: same range, domain pulled back through this transform.
    pub fn rescale_x(self, scale: LinearScale) -> ZoomResult<LinearScale> {
        let (r0, r1) = scale.range();
        scale.with_domain((
            scale.invert(self.invert_x(r0)),
            scale.invert(self.invert_x(r1)),
        ))
    }

    pub fn rescale_y(self, scale: LinearScale) -> ZoomResult<LinearScale> {
        let (r0, r1) = scale.range();
        scale.with_domain((
            scale.invert(self.invert_y(r0)),
            scale.invert(self.invert_y(r1)),
        ))
    }

    #[must_use]
    pub fn with_scale_extent(self, extent: ScaleExtent) -> Self {
        Self {
            k: extent.clamp(self.k),
            ..self
        }
    }
}

impl fmt::Display for ZoomTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translate({},{}) scale({})", self.x, self.y, self.k)
    }
}

/// Allowed range for the uniform zoom factor `k`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleExtent {
    pub min: f64,
    pub max: f64,
}

impl Default for ScaleExtent {
    fn default() -> Self {
        Self {
            min: 1.0 / 3.0,
            max: 100_000.0,
        }
    }
}

impl ScaleExtent {
    pub fn new(min: f64, max: f64) -> ZoomResult<Self> {
        Self { min, max }.validate()
    }

    pub fn validate(self) -> ZoomResult<Self> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min <= 0.0 {
            return Err(ZoomError::InvalidData(
                "scale extent bounds must be finite and > 0".to_owned(),
            ));
        }
        if self.min > self.max {
            return Err(ZoomError::InvalidData(
                "scale extent min must be <= max".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    pub fn clamp(self, k: f64) -> f64 {
        k.clamp(self.min, self.max)
    }
}
