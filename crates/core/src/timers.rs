//! Repeating interval timers for the fixed-timestep loop.
//!
//! The engine is driven by a single-threaded tick loop; instead of OS timers,
//! each periodic job is an [`IntervalTimer`] that accumulates elapsed
//! milliseconds and reports how many periods fired. Changing the period
//! tears the timer down and re-arms it from zero, which is the "cancel and
//! reschedule" semantics the difficulty speedup needs.

/// A repeating timer advanced by elapsed milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalTimer {
    period_ms: u32,
    elapsed_ms: u32,
}

impl IntervalTimer {
    /// Create a timer that fires every `period_ms` milliseconds.
    ///
    /// A zero period is clamped to 1ms so `advance` cannot spin forever.
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms: period_ms.max(1),
            elapsed_ms: 0,
        }
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Advance the timer and return how many periods elapsed.
    ///
    /// Returns more than one when the caller fell behind by several periods,
    /// so no fire is ever dropped.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        self.elapsed_ms += elapsed_ms;
        let fires = self.elapsed_ms / self.period_ms;
        self.elapsed_ms %= self.period_ms;
        fires
    }

    /// Change the period, restarting the timer from zero.
    ///
    /// No-op when the period is unchanged, so an unchanged schedule keeps
    /// its accumulated progress.
    pub fn set_period(&mut self, period_ms: u32) {
        let period_ms = period_ms.max(1);
        if self.period_ms == period_ms {
            return;
        }
        self.period_ms = period_ms;
        self.elapsed_ms = 0;
    }

    /// Restart the timer from zero without changing the period.
    pub fn reset(&mut self) {
        self.elapsed_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_period() {
        let mut t = IntervalTimer::new(100);
        assert_eq!(t.advance(99), 0);
        assert_eq!(t.advance(1), 1);
        assert_eq!(t.advance(100), 1);
    }

    #[test]
    fn test_catches_up_on_long_frames() {
        let mut t = IntervalTimer::new(50);
        assert_eq!(t.advance(175), 3);
        // 25ms of remainder carries over.
        assert_eq!(t.advance(25), 1);
    }

    #[test]
    fn test_set_period_rearms_from_zero() {
        let mut t = IntervalTimer::new(100);
        t.advance(90);

        t.set_period(50);
        assert_eq!(t.period_ms(), 50);
        // Accumulated progress was discarded by the reschedule.
        assert_eq!(t.advance(49), 0);
        assert_eq!(t.advance(1), 1);
    }

    #[test]
    fn test_set_same_period_keeps_progress() {
        let mut t = IntervalTimer::new(100);
        t.advance(90);
        t.set_period(100);
        assert_eq!(t.advance(10), 1);
    }

    #[test]
    fn test_reset_discards_progress() {
        let mut t = IntervalTimer::new(100);
        t.advance(90);
        t.reset();
        assert_eq!(t.advance(90), 0);
    }

    #[test]
    fn test_zero_period_clamped() {
        let mut t = IntervalTimer::new(0);
        assert_eq!(t.period_ms(), 1);
        assert_eq!(t.advance(3), 3);
    }
}
