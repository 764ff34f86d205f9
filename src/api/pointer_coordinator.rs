use tracing::{debug, trace, warn};

use crate::core::PixelPoint;
use crate::error::{ZoomError, ZoomResult};
use crate::extensions::{Annotation, AnnotationBatch, PlotHost};
use crate::interaction::GestureKind;
use crate::render::{PointRenderer, RendererRole};

use super::ZoomController;

impl<D: Clone + PartialEq + 'static> ZoomController<D> {
    /// Pointer pressed: starts a click/drag gesture if a point is under it.
    ///
    /// Returns the pressed entity. A gesture left active by a lost
    /// pointer-up is discarded with a warning, whether or not the new press
    /// lands on a point.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> ZoomResult<Option<D>> {
        self.ensure_initialized()?;
        let location = PixelPoint::new(x, y);
        let now = self.now_ms();
        let picked = self.primary_renderer_mut()?.pick(x, y);

        if self.gesture.is_dragging() {
            warn!(x, y, "pointer down while a gesture is active; discarding it");
            self.gesture.reset();
        }
        let Some(target) = picked else {
            return Ok(None);
        };
        self.gesture.start(target.clone(), location, now)?;
        trace!(x, y, "gesture started");
        Ok(Some(target))
    }

    /// Pointer released: classifies the active gesture.
    ///
    /// Clicks are forwarded to the host exactly once. Returns `None` when
    /// no gesture was active.
    pub fn pointer_up(&mut self, x: f64, y: f64) -> ZoomResult<Option<GestureKind>> {
        self.ensure_initialized()?;
        if !self.gesture.is_dragging() {
            return Ok(None);
        }
        if self.host.is_none() {
            return Err(host_not_attached());
        }

        let now = self.now_ms();
        let release = self.gesture.stop(PixelPoint::new(x, y), now)?;
        match release.kind {
            GestureKind::Click => {
                debug!(
                    distance_px = release.distance_px,
                    duration_ms = release.duration_ms,
                    "point click"
                );
                self.host_mut()?.on_point_click(&release.target);
            }
            GestureKind::Drag => {
                debug!(
                    distance_px = release.distance_px,
                    duration_ms = release.duration_ms,
                    "point drag"
                );
            }
        }
        Ok(Some(release.kind))
    }

    /// Pointer moved: hit-tests and refreshes the hover annotation.
    ///
    /// Rate-limited; returns `false` when the move was dropped. If the
    /// previously hovered point stops being hovered while a gesture is
    /// active (pointer moved to empty space or onto another point), the
    /// gesture ends without a click.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ZoomResult<bool> {
        self.ensure_initialized()?;
        let location = PixelPoint::new(x, y);
        self.interaction.on_pointer_move(location);

        let now = self.now_ms();
        if !self.pointer_throttle.admit(now) {
            return Ok(false);
        }
        if self.host.is_none() {
            return Err(host_not_attached());
        }

        let picked = self.primary_renderer_mut()?.pick(x, y);
        let (dx, dy) = self.config.annotation_offset;
        let annotations: AnnotationBatch<D> = picked
            .iter()
            .map(|data| Annotation {
                x,
                y,
                dx,
                dy,
                data: data.clone(),
            })
            .collect();
        self.host_mut()?.show_annotations(&annotations);

        let hover_exited = self
            .hovered
            .as_ref()
            .is_some_and(|previous| picked.as_ref() != Some(previous));
        if hover_exited && self.gesture.is_dragging() {
            let release = self.gesture.stop(location, now)?;
            debug!(kind = ?release.kind, "hovered point exited during gesture");
        }
        self.hovered = picked;
        Ok(true)
    }

    /// Pointer left the surface: clears hover state and annotations.
    pub fn pointer_leave(&mut self) {
        self.interaction.on_pointer_leave();
        self.hovered = None;
        if let Some(host) = self.host.as_mut() {
            host.show_annotations(&[]);
        }
    }

    fn primary_renderer_mut(&mut self) -> ZoomResult<&mut (dyn PointRenderer<D> + 'static)> {
        self.renderers
            .get_mut(&RendererRole::Primary)
            .map(|renderer| &mut **renderer)
            .ok_or(ZoomError::RendererNotAttached(RendererRole::Primary))
    }

    fn host_mut(&mut self) -> ZoomResult<&mut (dyn PlotHost<D> + 'static)> {
        self.host
            .as_mut()
            .map(|host| &mut **host)
            .ok_or_else(host_not_attached)
    }
}

fn host_not_attached() -> ZoomError {
    ZoomError::PreconditionViolation("no plot host attached to receive pointer events".to_owned())
}
