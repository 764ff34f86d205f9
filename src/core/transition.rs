use crate::core::{
    PixelPoint, Viewport, ZoomInterpolator, ZoomTransform, ZoomView, ease_cubic_in_out,
};
use crate::error::{ZoomError, ZoomResult};

/// Programmatic fly-to between two transforms over wall-clock time.
///
/// Sampling at or after `start + duration` yields `to` exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomTransition {
    from: ZoomTransform,
    to: ZoomTransform,
    anchor: PixelPoint,
    view_width: f64,
    interpolator: ZoomInterpolator,
    start_ms: f64,
    duration_ms: f64,
}

/// One interpolated step of a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSample {
    pub transform: ZoomTransform,
    pub finished: bool,
}

impl ZoomTransition {
    pub fn new(
        from: ZoomTransform,
        to: ZoomTransform,
        viewport: Viewport,
        start_ms: f64,
        duration_ms: f64,
    ) -> ZoomResult<Self> {
        let viewport = viewport.validate()?;
        if !start_ms.is_finite() || !duration_ms.is_finite() || duration_ms < 0.0 {
            return Err(ZoomError::InvalidData(
                "transition start and duration must be finite, duration >= 0".to_owned(),
            ));
        }

        let anchor = viewport.center();
        let view_width = viewport.width_px().max(viewport.height_px());
        let view_of = |t: ZoomTransform| {
            let center = t.invert(anchor);
            ZoomView::new(center.x, center.y, view_width / t.k)
        };

        Ok(Self {
            from,
            to,
            anchor,
            view_width,
            interpolator: ZoomInterpolator::new(view_of(from), view_of(to)),
            start_ms,
            duration_ms,
        })
    }

    #[must_use]
    pub fn target(&self) -> ZoomTransform {
        self.to
    }

    #[must_use]
    pub fn origin(&self) -> ZoomTransform {
        self.from
    }

    #[must_use]
    pub fn end_ms(&self) -> f64 {
        self.start_ms + self.duration_ms
    }

    #[must_use]
    pub fn sample(&self, now_ms: f64) -> TransitionSample {
        let elapsed = now_ms - self.start_ms;
        if self.duration_ms <= 0.0 || elapsed >= self.duration_ms {
            return TransitionSample {
                transform: self.to,
                finished: true,
            };
        }

        let t = ease_cubic_in_out(elapsed.max(0.0) / self.duration_ms);
        let view = self.interpolator.sample(t);
        let k = self.view_width / view.width;
        TransitionSample {
            transform: ZoomTransform {
                k,
                x: self.anchor.x - view.cx * k,
                y: self.anchor.y - view.cy * k,
            },
            finished: false,
        }
    }
}
