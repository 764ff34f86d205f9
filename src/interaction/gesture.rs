use std::mem;

use serde::{Deserialize, Serialize};

use crate::core::{PixelPoint, distance_between_points};
use crate::error::{ZoomError, ZoomResult};

/// Thresholds used to classify a pointer-down/pointer-up pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureConfig {
    /// Release at or beyond this pixel distance from the press is a drag.
    pub distance_threshold_px: f64,
    /// Press duration after which a release may count as a drag.
    ///
    /// Only consulted when `long_press_is_drag` is set; classification is
    /// distance-only otherwise.
    pub click_delay_threshold_ms: f64,
    #[serde(default)]
    pub long_press_is_drag: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            distance_threshold_px: 50.0,
            click_delay_threshold_ms: 250.0,
            long_press_is_drag: false,
        }
    }
}

impl GestureConfig {
    pub fn validate(self) -> ZoomResult<Self> {
        if !self.distance_threshold_px.is_finite() || self.distance_threshold_px < 0.0 {
            return Err(ZoomError::InvalidData(
                "gesture distance threshold must be finite and >= 0".to_owned(),
            ));
        }
        if !self.click_delay_threshold_ms.is_finite() || self.click_delay_threshold_ms < 0.0 {
            return Err(ZoomError::InvalidData(
                "gesture click delay threshold must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureKind {
    Click,
    Drag,
}

/// Outcome of ending a gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureRelease<T> {
    pub target: T,
    pub kind: GestureKind,
    pub distance_px: f64,
    pub duration_ms: f64,
}

impl<T> GestureRelease<T> {
    #[must_use]
    pub fn is_drag(&self) -> bool {
        self.kind == GestureKind::Drag
    }
}

#[derive(Debug, Clone, PartialEq)]
enum GesturePhase<T> {
    Idle,
    Active {
        target: T,
        start_ms: f64,
        start_location: PixelPoint,
    },
}

impl<T> Default for GesturePhase<T> {
    fn default() -> Self {
        Self::Idle
    }
}

/// Single-slot click/drag state machine for a pressed data point.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureState<T> {
    config: GestureConfig,
    phase: GesturePhase<T>,
}

impl<T> Default for GestureState<T> {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl<T> GestureState<T> {
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            phase: GesturePhase::Idle,
        }
    }

    #[must_use]
    pub fn config(&self) -> GestureConfig {
        self.config
    }

    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }

    /// Records the pressed entity. Fails if a gesture is already active.
    pub fn start(&mut self, target: T, location: PixelPoint, now_ms: f64) -> ZoomResult<()> {
        if self.is_dragging() {
            return Err(ZoomError::InvalidGestureState(
                "cannot start a gesture while another is active".to_owned(),
            ));
        }
        if !location.is_finite() || !now_ms.is_finite() {
            return Err(ZoomError::InvalidData(
                "gesture start location and time must be finite".to_owned(),
            ));
        }

        self.phase = GesturePhase::Active {
            target,
            start_ms: now_ms,
            start_location: location,
        };
        Ok(())
    }

    /// Ends the active gesture and classifies it. Always returns to idle.
    pub fn stop(&mut self, location: PixelPoint, now_ms: f64) -> ZoomResult<GestureRelease<T>> {
        let GesturePhase::Active {
            target,
            start_ms,
            start_location,
        } = mem::take(&mut self.phase)
        else {
            return Err(ZoomError::InvalidGestureState(
                "cannot stop a gesture that has not started".to_owned(),
            ));
        };

        let distance_px = distance_between_points(start_location, location);
        let duration_ms = now_ms - start_ms;
        let is_distant = distance_px >= self.config.distance_threshold_px;
        let is_long_press =
            self.config.long_press_is_drag && duration_ms >= self.config.click_delay_threshold_ms;

        let kind = if is_distant || is_long_press {
            GestureKind::Drag
        } else {
            GestureKind::Click
        };

        Ok(GestureRelease {
            target,
            kind,
            distance_px,
            duration_ms,
        })
    }

    pub fn reset(&mut self) {
        self.phase = GesturePhase::Idle;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Active { .. })
    }

    #[must_use]
    pub fn target(&self) -> Option<&T> {
        match &self.phase {
            GesturePhase::Active { target, .. } => Some(target),
            GesturePhase::Idle => None,
        }
    }

    #[must_use]
    pub fn start_location(&self) -> Option<PixelPoint> {
        match self.phase {
            GesturePhase::Active { start_location, .. } => Some(start_location),
            GesturePhase::Idle => None,
        }
    }

    #[must_use]
    pub fn start_time_ms(&self) -> Option<f64> {
        match self.phase {
            GesturePhase::Active { start_ms, .. } => Some(start_ms),
            GesturePhase::Idle => None,
        }
    }

    /// Time since `start`, or `None` while idle.
    #[must_use]
    pub fn dragging_duration_ms(&self, now_ms: f64) -> Option<f64> {
        self.start_time_ms().map(|start| now_ms - start)
    }
}
