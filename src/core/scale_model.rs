use serde::{Deserialize, Serialize};

use crate::core::{Extent, LinearScale, Viewport, ZoomTransform};
use crate::error::ZoomResult;

/// Data-to-pixel scales for both axes at identity zoom.
///
/// One data unit spans the same number of pixels on both axes; the axis
/// with spare room is centered with a symmetric buffer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseScales {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl BaseScales {
    pub fn compute(extent: Extent, viewport: Viewport) -> ZoomResult<Self> {
        let extent = extent.validate()?;
        let viewport = viewport.validate()?;
        let width = viewport.width_px();
        let height = viewport.height_px();

        let x_pixels_per_unit = width / extent.width();
        let y_pixels_per_unit = height / extent.height();
        let aspect_ratio = x_pixels_per_unit / y_pixels_per_unit;

        let (x_buffer, y_buffer) = if aspect_ratio > 1.0 {
            let target = width / aspect_ratio;
            ((width - target) / 2.0, 0.0)
        } else {
            let target = height * aspect_ratio;
            (0.0, (height - target) / 2.0)
        };

        Ok(Self {
            x: LinearScale::new(extent.x, (x_buffer, width - x_buffer))?,
            y: LinearScale::new(extent.y, (y_buffer, height - y_buffer))?,
        })
    }

    /// Pixels per data unit; equal on both axes by construction.
    #[must_use]
    pub fn pixels_per_unit(self) -> f64 {
        self.x.range_span() / self.x.domain_span()
    }

    pub fn rescaled(self, transform: ZoomTransform) -> ZoomResult<ScaleSet> {
        Ok(ScaleSet {
            x: self.x,
            y: self.y,
            x_: transform.rescale_x(self.x)?,
            y_: transform.rescale_y(self.y)?,
        })
    }
}

/// Base scales plus their zoom-adjusted counterparts.
///
/// `x_` and `y_` are derived from `x`, `y` and one transform; the set is a
/// value and is rebuilt whenever the transform changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleSet {
    pub x: LinearScale,
    pub y: LinearScale,
    pub x_: LinearScale,
    pub y_: LinearScale,
}

impl ScaleSet {
    #[must_use]
    pub fn base(self) -> BaseScales {
        BaseScales {
            x: self.x,
            y: self.y,
        }
    }
}

pub fn compute_scales(
    extent: Extent,
    viewport: Viewport,
    transform: ZoomTransform,
) -> ZoomResult<ScaleSet> {
    BaseScales::compute(extent, viewport)?.rescaled(transform)
}
