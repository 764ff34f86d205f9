use crate::error::{ZoomError, ZoomResult};

/// Identity of one armed frame loop; changes on every restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameLoopHandle {
    generation: u64,
}

impl FrameLoopHandle {
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTick {
    /// The loop is armed and wants further frames.
    Running,
    /// This tick reached `stop_at`; the loop is now stopped.
    Expired,
    /// No loop is armed.
    Idle,
}

/// Coalescing redraw driver.
///
/// `restart` never pulls `stop_at` earlier, so bursts of input keep one
/// loop alive instead of stacking loops, and the loop drains out on its own
/// once input stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefreshTimer {
    handle: Option<FrameLoopHandle>,
    stop_at_ms: f64,
    next_generation: u64,
}

impl Default for RefreshTimer {
    fn default() -> Self {
        Self {
            handle: None,
            stop_at_ms: f64::NEG_INFINITY,
            next_generation: 0,
        }
    }
}

impl RefreshTimer {
    /// Arms the loop for at least `min_duration_ms` from `now_ms`.
    ///
    /// A zero duration on an expired timer arms a single-frame loop:
    /// `stop_at` equals `now_ms`, so the first unforced tick returns
    /// `Expired`. The controller still redraws on that tick, which makes
    /// `restart(now, 0)` a "draw once" request.
    pub fn restart(&mut self, now_ms: f64, min_duration_ms: f64) -> ZoomResult<FrameLoopHandle> {
        if !now_ms.is_finite() || !min_duration_ms.is_finite() || min_duration_ms < 0.0 {
            return Err(ZoomError::InvalidData(
                "timer time and duration must be finite, duration >= 0".to_owned(),
            ));
        }

        self.stop_at_ms = self.stop_at_ms.max(now_ms + min_duration_ms);
        let handle = FrameLoopHandle {
            generation: self.next_generation,
        };
        self.next_generation += 1;
        self.handle = Some(handle);
        Ok(handle)
    }

    /// Called on every frame. Unless forced, stops the loop once `now_ms >= stop_at`.
    pub fn tick(&mut self, now_ms: f64, force: bool) -> TimerTick {
        if self.handle.is_none() {
            return TimerTick::Idle;
        }
        if !force && now_ms >= self.stop_at_ms {
            self.handle = None;
            return TimerTick::Expired;
        }
        TimerTick::Running
    }

    pub fn stop(&mut self) {
        self.handle = None;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    #[must_use]
    pub fn handle(&self) -> Option<FrameLoopHandle> {
        self.handle
    }

    /// Scheduled stop time while the loop is armed.
    #[must_use]
    pub fn stop_at_ms(&self) -> Option<f64> {
        self.handle.map(|_| self.stop_at_ms)
    }

    #[must_use]
    pub fn remaining_ms(&self, now_ms: f64) -> f64 {
        self.stop_at_ms().map_or(0.0, |stop_at| (stop_at - now_ms).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restart_never_shortens_stop_at() {
        let mut timer = RefreshTimer::default();
        timer.restart(0.0, 20_000.0).expect("restart");
        timer.restart(1_000.0, 5_000.0).expect("restart");
        assert_eq!(timer.stop_at_ms(), Some(20_000.0));
    }

    #[test]
    fn each_restart_rearms_with_new_handle() {
        let mut timer = RefreshTimer::default();
        let first = timer.restart(0.0, 10.0).expect("restart");
        let second = timer.restart(0.0, 10.0).expect("restart");
        assert_ne!(first, second);
        assert_eq!(timer.handle(), Some(second));
    }

    #[test]
    fn forced_tick_keeps_expired_loop_alive() {
        let mut timer = RefreshTimer::default();
        timer.restart(0.0, 100.0).expect("restart");
        assert_eq!(timer.tick(500.0, true), TimerTick::Running);
        assert_eq!(timer.tick(500.0, false), TimerTick::Expired);
        assert_eq!(timer.tick(600.0, false), TimerTick::Idle);
        assert_eq!(timer.remaining_ms(600.0), 0.0);
    }

    #[test]
    fn negative_duration_is_rejected() {
        let mut timer = RefreshTimer::default();
        assert!(timer.restart(0.0, -1.0).is_err());
        assert!(!timer.is_running());
    }
}
