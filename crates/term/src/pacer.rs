use std::thread;
use std::time::{Duration, Instant};

use crate::types::frame_ms;

/// Fixed-rate frame clock.
///
/// Each [`FixedRatePacer::tick`] blocks until the next tick boundary. The
/// wait is not cancellable. When a frame overruns by more than one interval
/// the schedule restarts from "now" instead of bursting to catch up.
#[derive(Debug, Clone)]
pub struct FixedRatePacer {
    interval: Duration,
    next: Option<Instant>,
}

impl FixedRatePacer {
    pub fn new(fps: u32) -> Self {
        Self {
            interval: Duration::from_millis(frame_ms(fps) as u64),
            next: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Advance the schedule as of `now` and return how long to wait.
    ///
    /// The first call never waits; it only anchors the schedule.
    pub fn advance(&mut self, now: Instant) -> Duration {
        let Some(target) = self.next else {
            self.next = Some(now + self.interval);
            return Duration::ZERO;
        };

        let wait = target.saturating_duration_since(now);
        let following = target + self.interval;
        self.next = Some(if now > following {
            now + self.interval
        } else {
            following
        });
        wait
    }

    /// Block until the next tick boundary.
    pub fn tick(&mut self) {
        let wait = self.advance(Instant::now());
        if !wait.is_zero() {
            thread::sleep(wait);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_does_not_wait() {
        let mut p = FixedRatePacer::new(60);
        assert_eq!(p.advance(Instant::now()), Duration::ZERO);
    }

    #[test]
    fn waits_until_boundary() {
        let mut p = FixedRatePacer::new(50);
        let t0 = Instant::now();
        p.advance(t0);
        assert_eq!(p.advance(t0 + Duration::from_millis(5)), Duration::from_millis(15));
        // Next boundary is t0 + 40ms.
        assert_eq!(p.advance(t0 + Duration::from_millis(30)), Duration::from_millis(10));
    }

    #[test]
    fn overrun_resyncs_instead_of_bursting() {
        let mut p = FixedRatePacer::new(50);
        let t0 = Instant::now();
        p.advance(t0);
        let late = t0 + Duration::from_millis(100);
        assert_eq!(p.advance(late), Duration::ZERO);
        assert_eq!(p.advance(late), Duration::from_millis(20));
    }

    #[test]
    fn interval_from_fps() {
        assert_eq!(FixedRatePacer::new(60).interval(), Duration::from_millis(16));
        assert_eq!(FixedRatePacer::new(0).interval(), Duration::from_millis(1));
    }
}
