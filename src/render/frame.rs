use crate::core::{Matrix3, ScaleSet, Viewport, ZoomTransform, flatten_matrix};
use crate::error::{ZoomError, ZoomResult};

/// Everything a point renderer reads for one redraw.
///
/// `projection` maps data coordinates through the base scales; renderers
/// apply `transform` on top of it (typically on the GPU).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewFrame {
    pub viewport: Viewport,
    pub transform: ZoomTransform,
    pub scales: ScaleSet,
    pub projection: Matrix3,
}

impl ViewFrame {
    #[must_use]
    pub fn projection_flat(&self) -> [f64; 9] {
        flatten_matrix(self.projection)
    }

    pub fn validate(&self) -> ZoomResult<()> {
        self.viewport.validate()?;
        let t = self.transform;
        if !t.k.is_finite() || t.k <= 0.0 || !t.x.is_finite() || !t.y.is_finite() {
            return Err(ZoomError::InvalidData(format!(
                "frame transform must be finite with k > 0, got {t}"
            )));
        }
        if self.projection.iter().flatten().any(|v| !v.is_finite()) {
            return Err(ZoomError::InvalidData(
                "frame projection matrix must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}
