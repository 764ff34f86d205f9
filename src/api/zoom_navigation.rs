use tracing::debug;

use crate::core::{Extent, ZoomTransform, ZoomTransition};
use crate::error::{ZoomError, ZoomResult};

use super::ZoomController;

/// Fraction of the viewport a bounding box fills after `zoom_to_bounding_box`.
const BOUNDING_BOX_FILL: f64 = 0.9;

impl<D: Clone + 'static> ZoomController<D> {
    /// Flies to scale `k` with data point `(x, y)` centered in the viewport.
    ///
    /// `duration_ms = None` uses the configured default. Returns the target
    /// transform, which the live transform equals once the transition ends.
    pub fn zoom_to(
        &mut self,
        k: f64,
        x: f64,
        y: f64,
        duration_ms: Option<f64>,
    ) -> ZoomResult<ZoomTransform> {
        if !k.is_finite() || k <= 0.0 {
            return Err(ZoomError::InvalidData(
                "zoom target scale must be finite and > 0".to_owned(),
            ));
        }
        if !x.is_finite() || !y.is_finite() {
            return Err(ZoomError::InvalidData(
                "zoom target point must be finite".to_owned(),
            ));
        }

        let base = self.base_scales()?;
        let center = self.viewport.center();
        let target = ZoomTransform::IDENTITY
            .translate(center.x, center.y)
            .scale(self.config.scale_extent.clamp(k))
            .translate(-base.x.apply(x), -base.y.apply(y));

        self.transition_to(target, duration_ms)?;
        Ok(target)
    }

    /// Flies to the largest scale at which `corners` fits with a 10% margin,
    /// centered on the box midpoint.
    pub fn zoom_to_bounding_box(
        &mut self,
        corners: Extent,
        duration_ms: Option<f64>,
    ) -> ZoomResult<ZoomTransform> {
        let corners = corners.validate()?;
        let base = self.base_scales()?;
        let (x0, x1) = (base.x.apply(corners.x.0), base.x.apply(corners.x.1));
        let (y0, y1) = (base.y.apply(corners.y.0), base.y.apply(corners.y.1));

        let width_ratio = (x1 - x0).abs() / self.viewport.width_px();
        let height_ratio = (y1 - y0).abs() / self.viewport.height_px();
        let k = BOUNDING_BOX_FILL / width_ratio.max(height_ratio);

        let center = self.viewport.center();
        let target = ZoomTransform::IDENTITY
            .translate(center.x, center.y)
            .scale(self.config.scale_extent.clamp(k))
            .translate(-(x0 + x1) / 2.0, -(y0 + y1) / 2.0);

        self.transition_to(target, duration_ms)?;
        Ok(target)
    }

    /// Flies back to the identity transform.
    pub fn reset_zoom(&mut self, duration_ms: Option<f64>) -> ZoomResult<()> {
        self.transition_to(ZoomTransform::IDENTITY, duration_ms)
    }

    /// Starts a transition to `target`, superseding any running one.
    ///
    /// Zero duration applies `target` immediately.
    pub(super) fn transition_to(
        &mut self,
        target: ZoomTransform,
        duration_ms: Option<f64>,
    ) -> ZoomResult<()> {
        let duration_ms = duration_ms.unwrap_or(self.config.default_transition_ms);
        if !duration_ms.is_finite() || duration_ms < 0.0 {
            return Err(ZoomError::InvalidData(
                "transition duration must be finite and >= 0".to_owned(),
            ));
        }

        let now = self.now_ms();
        if self.transition.take().is_some() {
            debug!("superseding active zoom transition");
        }

        if duration_ms == 0.0 {
            self.transform = target;
            debug!(transform = %target, "zoom applied immediately");
        } else {
            let transition =
                ZoomTransition::new(self.transform, target, self.viewport, now, duration_ms)?;
            self.transition = Some(transition);
            debug!(transform = %target, duration_ms, "zoom transition started");
        }

        self.timer.restart(now, duration_ms + self.config.settle_duration_ms)?;
        Ok(())
    }
}
