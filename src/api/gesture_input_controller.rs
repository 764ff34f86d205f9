use tracing::{debug, trace};

use crate::core::{PixelPoint, ZoomTransform};
use crate::error::ZoomResult;
use crate::interaction::{GestureInput, ZoomBehavior};

use super::ZoomController;

impl<D: Clone + 'static> ZoomController<D> {
    /// Applies one raw zoom/pan input and keeps the redraw loop alive.
    ///
    /// User input interrupts any running fly-to transition. Returns the
    /// live transform after the input.
    pub fn on_gesture(&mut self, input: GestureInput) -> ZoomResult<ZoomTransform> {
        self.ensure_initialized()?;
        let input = input.validate()?;
        let behavior = self.zoom_behavior();
        let previous = self.transform;

        if self.transition.take().is_some() {
            debug!("zoom input interrupted transition");
        }

        let next = match input {
            GestureInput::Wheel {
                x,
                y,
                delta_y,
                delta_mode,
                ctrl_key,
            } => behavior.wheel(
                previous,
                PixelPoint::new(x, y),
                delta_y,
                delta_mode,
                ctrl_key,
            ),
            GestureInput::PanStart { x, y } => {
                let anchor = previous.invert(PixelPoint::new(x, y));
                self.interaction.on_pan_start(anchor);
                previous
            }
            GestureInput::PanMove { x, y } => match self.interaction.pan_anchor() {
                Some(anchor) => ZoomBehavior::pin(previous, PixelPoint::new(x, y), anchor),
                None => {
                    trace!("pan move without pan start ignored");
                    previous
                }
            },
            GestureInput::PanEnd => {
                self.interaction.on_pan_end();
                previous
            }
            GestureInput::Pinch {
                x,
                y,
                scale_factor,
            } => behavior.scale_around(previous, PixelPoint::new(x, y), scale_factor),
            GestureInput::DoubleClick { x, y, shift_key } => {
                let zoom = self.config.double_click_zoom;
                if !zoom.enabled {
                    return Ok(previous);
                }
                let factor = if shift_key {
                    zoom.factor.recip()
                } else {
                    zoom.factor
                };
                let target = behavior.scale_around(previous, PixelPoint::new(x, y), factor);
                self.transition_to(target, Some(zoom.duration_ms))?;
                return Ok(self.transform);
            }
        };

        if next != previous {
            self.transform = next;
            let now = self.now_ms();
            self.timer.restart(now, self.config.settle_duration_ms)?;
            trace!(transform = %next, "zoom input applied");
        }
        Ok(self.transform)
    }

    fn zoom_behavior(&self) -> ZoomBehavior {
        ZoomBehavior {
            scale_extent: self.config.scale_extent,
            wheel_sensitivity: self.config.wheel_sensitivity,
        }
    }
}
