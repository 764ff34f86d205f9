use crate::error::{ZoomError, ZoomResult};

/// Drops pointer-move events arriving faster than a fixed rate.
///
/// Dropped events are not queued; the next admitted event carries the
/// latest pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerMoveThrottle {
    min_interval_ms: f64,
    last_fired_ms: Option<f64>,
}

impl PointerMoveThrottle {
    pub fn with_rate_hz(rate_hz: f64) -> ZoomResult<Self> {
        if !rate_hz.is_finite() || rate_hz <= 0.0 {
            return Err(ZoomError::InvalidData(
                "pointer move rate must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self {
            min_interval_ms: 1_000.0 / rate_hz,
            last_fired_ms: None,
        })
    }

    #[must_use]
    pub fn min_interval_ms(self) -> f64 {
        self.min_interval_ms
    }

    /// Returns `true` and records `now_ms` when the event should be handled.
    pub fn admit(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_fired_ms {
            if now_ms - last < self.min_interval_ms {
                return false;
            }
        }
        self.last_fired_ms = Some(now_ms);
        true
    }

    pub fn reset(&mut self) {
        self.last_fired_ms = None;
    }
}
