mod gesture;
mod input;
mod throttle;

pub use gesture::{GestureConfig, GestureKind, GestureRelease, GestureState};
pub use input::{DoubleClickZoom, GestureInput, WheelDeltaMode, ZoomBehavior};
pub use throttle::PointerMoveThrottle;

use serde::{Deserialize, Serialize};

use crate::core::PixelPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Panning,
}

/// Pointer-side zoom state that is not part of the transform itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    mode: InteractionMode,
    /// Pre-transform point grabbed by the current pan.
    pan_anchor: Option<PixelPoint>,
    cursor: Option<PixelPoint>,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Idle,
            pan_anchor: None,
            cursor: None,
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn pan_anchor(self) -> Option<PixelPoint> {
        self.pan_anchor
    }

    #[must_use]
    pub fn cursor(self) -> Option<PixelPoint> {
        self.cursor
    }

    pub fn on_pointer_move(&mut self, location: PixelPoint) {
        self.cursor = Some(location);
    }

    pub fn on_pointer_leave(&mut self) {
        self.cursor = None;
    }

    pub fn on_pan_start(&mut self, anchor: PixelPoint) {
        self.mode = InteractionMode::Panning;
        self.pan_anchor = Some(anchor);
    }

    pub fn on_pan_end(&mut self) {
        self.mode = InteractionMode::Idle;
        self.pan_anchor = None;
    }
}
