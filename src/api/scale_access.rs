use tracing::{debug, trace};

use crate::core::{
    BaseScales, DataPoint, Extent, Matrix3, PixelPoint, ScaleSet, flatten_matrix,
    window_transform,
};
use crate::error::{ZoomError, ZoomResult};
use crate::render::ViewFrame;

use super::ZoomController;

impl<D: Clone + 'static> ZoomController<D> {
    /// Identity-zoom scales, computed once per extent/viewport and cached.
    pub fn base_scales(&self) -> ZoomResult<BaseScales> {
        if let Some(cached) = self.base_scales.get() {
            return Ok(cached);
        }

        let provider = self.extent_provider.as_ref().ok_or_else(|| {
            ZoomError::PreconditionViolation(
                "scales requested before an extent provider was attached".to_owned(),
            )
        })?;
        let extent = provider.extent().ok_or_else(|| {
            ZoomError::PreconditionViolation("scales requested before extent present".to_owned())
        })?;

        let base = BaseScales::compute(extent, self.viewport)?;
        debug!(
            x_range = ?base.x.range(),
            y_range = ?base.y.range(),
            pixels_per_unit = base.pixels_per_unit(),
            "computed base scales"
        );
        self.base_scales.set(Some(base));
        Ok(base)
    }

    /// Base scales plus rescaled `x_`/`y_` for the live transform.
    pub fn scales(&self) -> ZoomResult<ScaleSet> {
        self.base_scales()?.rescaled(self.transform)
    }

    /// Drops cached base scales, e.g. after the extent provider's data changed.
    pub fn invalidate_scales(&mut self) {
        self.base_scales.set(None);
    }

    /// Data-space interval visible on each axis, or `None` before scales exist.
    #[must_use]
    pub fn current_corners(&self) -> Option<Extent> {
        let scales = match self.scales() {
            Ok(scales) => scales,
            Err(err) => {
                trace!(error = %err, "current corners unavailable");
                return None;
            }
        };
        Some(Extent {
            x: (scales.x_.invert(0.0), scales.x_.invert(self.viewport.width_px())),
            y: (scales.y_.invert(0.0), scales.y_.invert(self.viewport.height_px())),
        })
    }

    #[must_use]
    pub fn current_center(&self) -> Option<DataPoint> {
        self.current_corners().map(Extent::center)
    }

    /// Maps a data point to surface pixels through the rescaled scales.
    pub fn data_to_pixel(&self, point: DataPoint) -> ZoomResult<PixelPoint> {
        let scales = self.scales()?;
        Ok(PixelPoint::new(scales.x_.apply(point.x), scales.y_.apply(point.y)))
    }

    pub fn pixel_to_data(&self, pixel: PixelPoint) -> ZoomResult<DataPoint> {
        let scales = self.scales()?;
        Ok(DataPoint::new(
            scales.x_.invert(pixel.x),
            scales.y_.invert(pixel.y),
        ))
    }

    /// Data-to-pixel matrix of the base scales; the transform is applied on top.
    pub fn projection_matrix(&self) -> ZoomResult<Matrix3> {
        let base = self.base_scales()?;
        Ok(window_transform(base.x, base.y))
    }

    /// Row-major flattened `projection_matrix`, ready for a uniform upload.
    pub fn webgl_scale(&self) -> ZoomResult<[f64; 9]> {
        self.projection_matrix().map(flatten_matrix)
    }

    pub fn view_frame(&self) -> ZoomResult<ViewFrame> {
        let scales = self.scales()?;
        Ok(ViewFrame {
            viewport: self.viewport,
            transform: self.transform,
            scales,
            projection: window_transform(scales.x, scales.y),
        })
    }
}
