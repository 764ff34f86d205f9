use tracing::{debug, warn};

use crate::error::ZoomResult;
use crate::render::{FrameLoopHandle, TimerTick};

use super::ZoomController;

impl<D: Clone + 'static> ZoomController<D> {
    /// Keeps the redraw loop running for at least `min_duration_ms`.
    pub fn restart_timer(&mut self, min_duration_ms: f64) -> ZoomResult<FrameLoopHandle> {
        let now = self.now_ms();
        self.timer.restart(now, min_duration_ms)
    }

    pub fn stop_timer(&mut self) {
        self.timer.stop();
    }

    /// One animation-frame callback.
    ///
    /// Advances any running transition, redraws every attached renderer with
    /// a fresh frame, then lets the loop expire unless `force` is set. A
    /// failed redraw stops the loop before the error is returned.
    pub fn tick(&mut self, force: bool) -> ZoomResult<TimerTick> {
        if !self.timer.is_running() && !force {
            return Ok(TimerTick::Idle);
        }
        let now = self.now_ms();

        if let Some(transition) = self.transition {
            let sample = transition.sample(now);
            self.transform = sample.transform;
            if sample.finished {
                self.transition = None;
                debug!(transform = %sample.transform, "zoom transition finished");
            }
        }

        if let Err(err) = self.render_all() {
            warn!(error = %err, "render failed; stopping refresh loop");
            self.timer.stop();
            return Err(err);
        }

        Ok(self.timer.tick(now, force))
    }

    fn render_all(&mut self) -> ZoomResult<()> {
        if self.renderers.is_empty() {
            return Ok(());
        }
        let frame = self.view_frame()?;
        for renderer in self.renderers.values_mut() {
            renderer.render(&frame)?;
        }
        Ok(())
    }
}
