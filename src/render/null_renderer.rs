use crate::core::Viewport;
use crate::error::ZoomResult;
use crate::render::{PointRenderer, ViewFrame};

/// No-op renderer used by tests and headless controller usage.
///
/// It still validates frame content so tests can catch inconsistent
/// transforms before a real backend is introduced. Hit-testing never
/// finds a point.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub bound_viewport: Option<Viewport>,
    pub frames_rendered: usize,
    pub last_frame: Option<ViewFrame>,
}

impl<D> PointRenderer<D> for NullRenderer {
    fn bind_zoom(&mut self, viewport: Viewport) -> ZoomResult<()> {
        self.bound_viewport = Some(viewport);
        Ok(())
    }

    fn render(&mut self, frame: &ViewFrame) -> ZoomResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_frame = Some(*frame);
        Ok(())
    }

    fn pick(&mut self, _x: f64, _y: f64) -> Option<D> {
        None
    }
}
