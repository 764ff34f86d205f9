use serde::{Deserialize, Serialize};

use crate::error::{ZoomError, ZoomResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> ZoomResult<Self> {
        if !self.is_valid() {
            return Err(ZoomError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    #[must_use]
    pub fn width_px(self) -> f64 {
        f64::from(self.width)
    }

    #[must_use]
    pub fn height_px(self) -> f64 {
        f64::from(self.height)
    }

    #[must_use]
    pub fn center(self) -> PixelPoint {
        PixelPoint::new(self.width_px() / 2.0, self.height_px() / 2.0)
    }
}

/// A location in data coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A location in logical pixel space, origin at the top-left of the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for PixelPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Data-space bounding interval per axis.
///
/// Each interval is stored as `(min, max)` and must satisfy `min < max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl Extent {
    pub fn new(x: (f64, f64), y: (f64, f64)) -> ZoomResult<Self> {
        Self { x, y }.validate()
    }

    pub fn validate(self) -> ZoomResult<Self> {
        for (axis, (min, max)) in [("x", self.x), ("y", self.y)] {
            if !min.is_finite() || !max.is_finite() {
                return Err(ZoomError::InvalidData(format!(
                    "extent `{axis}` bounds must be finite"
                )));
            }
            if min >= max {
                return Err(ZoomError::InvalidData(format!(
                    "extent `{axis}` must satisfy min < max, got [{min}, {max}]"
                )));
            }
        }
        Ok(self)
    }

    #[must_use]
    pub fn center(self) -> DataPoint {
        DataPoint::new((self.x.0 + self.x.1) / 2.0, (self.y.0 + self.y.1) / 2.0)
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.x.1 - self.x.0
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.y.1 - self.y.0
    }
}
