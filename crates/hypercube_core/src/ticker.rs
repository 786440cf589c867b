//! Fixed-rate tick scheduling
//!
//! The event loop feeds wall-clock time into a [`FrameTicker`], which reports
//! how many fixed-length ticks are due. After a stall (window drag, debugger)
//! only `max_catch_up` ticks run and the rest of the backlog is dropped, so
//! the animation resumes instead of fast-forwarding.

use std::time::Duration;

/// Default tick interval (about 33 Hz)
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(30);

/// Default cap on ticks run per wake-up
pub const DEFAULT_MAX_CATCH_UP: u32 = 4;

/// Accumulates elapsed time into whole ticks
#[derive(Clone, Debug)]
pub struct FrameTicker {
    interval: Duration,
    accumulated: Duration,
    max_catch_up: u32,
}

impl Default for FrameTicker {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}

impl FrameTicker {
    /// Create a ticker firing every `interval`
    ///
    /// A zero interval is raised to one millisecond.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            accumulated: Duration::ZERO,
            max_catch_up: DEFAULT_MAX_CATCH_UP,
        }
    }

    /// Builder: cap ticks per wake-up (at least 1)
    pub fn with_max_catch_up(mut self, max_catch_up: u32) -> Self {
        self.max_catch_up = max_catch_up.max(1);
        self
    }

    /// Add elapsed time and return the number of ticks to run now
    pub fn accumulate(&mut self, elapsed: Duration) -> u32 {
        self.accumulated += elapsed;

        let mut due = 0;
        while self.accumulated >= self.interval && due < self.max_catch_up {
            self.accumulated -= self.interval;
            due += 1;
        }

        if self.accumulated >= self.interval {
            let interval_ns = self.interval.as_nanos();
            let dropped = self.accumulated.as_nanos() / interval_ns;
            let remainder = self.accumulated.as_nanos() % interval_ns;
            log::warn!("Frame ticker fell behind, dropping {} ticks", dropped);
            self.accumulated = Duration::from_nanos(remainder as u64);
        }

        due
    }

    /// Time left until the next tick is due
    pub fn time_until_next_tick(&self) -> Duration {
        self.interval.saturating_sub(self.accumulated)
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[inline]
    pub fn max_catch_up(&self) -> u32 {
        self.max_catch_up
    }

    /// Discard any partial tick
    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_default_interval() {
        let ticker = FrameTicker::default();
        assert_eq!(ticker.interval(), ms(30));
        assert_eq!(ticker.max_catch_up(), 4);
    }

    #[test]
    fn test_partial_interval_yields_nothing() {
        let mut ticker = FrameTicker::new(ms(30));
        assert_eq!(ticker.accumulate(ms(29)), 0);
        assert_eq!(ticker.time_until_next_tick(), ms(1));
        assert_eq!(ticker.accumulate(ms(1)), 1);
    }

    #[test]
    fn test_remainder_carries_over() {
        let mut ticker = FrameTicker::new(ms(30));
        assert_eq!(ticker.accumulate(ms(95)), 3);
        assert_eq!(ticker.time_until_next_tick(), ms(25));
    }

    #[test]
    fn test_catch_up_is_capped() {
        let mut ticker = FrameTicker::new(ms(30)).with_max_catch_up(4);
        assert_eq!(ticker.accumulate(ms(1000)), 4);
        // 1000 - 4*30 = 880 ms backlog, 880 % 30 = 10 ms kept
        assert_eq!(ticker.time_until_next_tick(), ms(20));
        assert_eq!(ticker.accumulate(ms(20)), 1);
    }

    #[test]
    fn test_zero_interval_is_raised() {
        let ticker = FrameTicker::new(Duration::ZERO);
        assert_eq!(ticker.interval(), ms(1));
    }

    #[test]
    fn test_reset() {
        let mut ticker = FrameTicker::new(ms(30));
        ticker.accumulate(ms(20));
        ticker.reset();
        assert_eq!(ticker.time_until_next_tick(), ms(30));
    }
}
