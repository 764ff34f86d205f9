//! Smooth zoom interpolation between two views.
//!
//! A view is `(cx, cy, w)`: the pre-transform point shown at the anchor and
//! the pre-transform width visible across the surface. The path follows
//! van Wijk & Nuij, "Smooth and efficient zooming and panning" (2003).

use std::f64::consts::SQRT_2;

const RHO: f64 = SQRT_2;
const RHO2: f64 = 2.0;
const RHO4: f64 = 4.0;
const EPSILON2: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomView {
    pub cx: f64,
    pub cy: f64,
    pub width: f64,
}

impl ZoomView {
    #[must_use]
    pub fn new(cx: f64, cy: f64, width: f64) -> Self {
        Self { cx, cy, width }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ZoomPath {
    /// Start and end centers coincide: pure exponential zoom.
    Scale { log_ratio: f64 },
    Fly { distance: f64, r0: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomInterpolator {
    from: ZoomView,
    to: ZoomView,
    path: ZoomPath,
    arc_length: f64,
}

impl ZoomInterpolator {
    #[must_use]
    pub fn new(from: ZoomView, to: ZoomView) -> Self {
        let dx = to.cx - from.cx;
        let dy = to.cy - from.cy;
        let d2 = dx * dx + dy * dy;

        if d2 < EPSILON2 {
            let log_ratio = (to.width / from.width).ln();
            return Self {
                from,
                to,
                path: ZoomPath::Scale { log_ratio },
                arc_length: log_ratio / RHO,
            };
        }

        let d1 = d2.sqrt();
        let w0 = from.width;
        let w1 = to.width;
        let b0 = (w1 * w1 - w0 * w0 + RHO4 * d2) / (2.0 * w0 * RHO2 * d1);
        let b1 = (w1 * w1 - w0 * w0 - RHO4 * d2) / (2.0 * w1 * RHO2 * d1);
        let r0 = ((b0 * b0 + 1.0).sqrt() - b0).ln();
        let r1 = ((b1 * b1 + 1.0).sqrt() - b1).ln();

        Self {
            from,
            to,
            path: ZoomPath::Fly { distance: d1, r0 },
            arc_length: (r1 - r0) / RHO,
        }
    }

    /// Length of the optimal path; proportional to its natural duration.
    #[must_use]
    pub fn arc_length(&self) -> f64 {
        self.arc_length
    }

    /// Samples the path at `t` in `[0, 1]`; `t >= 1` returns the target exactly.
    #[must_use]
    pub fn sample(&self, t: f64) -> ZoomView {
        if t >= 1.0 {
            return self.to;
        }
        let t = t.max(0.0);
        let dx = self.to.cx - self.from.cx;
        let dy = self.to.cy - self.from.cy;

        match self.path {
            ZoomPath::Scale { log_ratio } => ZoomView::new(
                self.from.cx + t * dx,
                self.from.cy + t * dy,
                self.from.width * (t * log_ratio).exp(),
            ),
            ZoomPath::Fly { distance, r0 } => {
                let s = t * self.arc_length;
                let cosh_r0 = r0.cosh();
                let u = self.from.width / (RHO2 * distance)
                    * (cosh_r0 * (RHO * s + r0).tanh() - r0.sinh());
                ZoomView::new(
                    self.from.cx + u * dx,
                    self.from.cy + u * dy,
                    self.from.width * cosh_r0 / (RHO * s + r0).cosh(),
                )
            }
        }
    }
}

/// Symmetric cubic easing, slow at both ends.
#[must_use]
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        let from = ZoomView::new(0.0, 0.0, 100.0);
        let to = ZoomView::new(40.0, -20.0, 5.0);
        let interpolator = ZoomInterpolator::new(from, to);
        let start = interpolator.sample(0.0);
        assert!((start.cx - from.cx).abs() <= 1e-9);
        assert!((start.cy - from.cy).abs() <= 1e-9);
        assert!((start.width - from.width).abs() <= 1e-9);
        assert_eq!(interpolator.sample(1.0), to);
    }

    #[test]
    fn coincident_centers_zoom_exponentially() {
        let interpolator =
            ZoomInterpolator::new(ZoomView::new(5.0, 5.0, 100.0), ZoomView::new(5.0, 5.0, 1.0));
        let mid = interpolator.sample(0.5);
        assert!((mid.width - 10.0).abs() <= 1e-9);
        assert_eq!((mid.cx, mid.cy), (5.0, 5.0));
    }

    #[test]
    fn easing_is_symmetric_and_bounded() {
        assert_eq!(ease_cubic_in_out(0.0), 0.0);
        assert_eq!(ease_cubic_in_out(1.0), 1.0);
        assert!((ease_cubic_in_out(0.5) - 0.5).abs() <= 1e-12);
        assert!((ease_cubic_in_out(0.25) + ease_cubic_in_out(0.75) - 1.0).abs() <= 1e-12);
    }
}
