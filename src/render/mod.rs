mod frame;
mod null_renderer;
mod refresh_timer;

pub use frame::ViewFrame;
pub use null_renderer::NullRenderer;
pub use refresh_timer::{FrameLoopHandle, RefreshTimer, TimerTick};

use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::ZoomResult;

/// Slot a renderer occupies on the shared zoom surface.
///
/// `Primary` is the point surface that answers hit-tests; `Overlay` draws
/// on top of it and follows the same transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RendererRole {
    Primary,
    Overlay,
}

/// Contract implemented by any point-rendering backend.
///
/// Backends receive a fully materialized `ViewFrame` so drawing code stays
/// isolated from zoom and gesture logic.
pub trait PointRenderer<D> {
    /// Called once when the renderer is attached to a controller.
    fn bind_zoom(&mut self, viewport: Viewport) -> ZoomResult<()> {
        let _ = viewport;
        Ok(())
    }

    fn render(&mut self, frame: &ViewFrame) -> ZoomResult<()>;

    /// Returns the data entity drawn at pixel `(x, y)`, if any.
    fn pick(&mut self, x: f64, y: f64) -> Option<D>;
}
