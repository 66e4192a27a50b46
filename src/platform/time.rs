//! Millisecond clocks

use std::time::Instant;

/// Monotonic millisecond clock
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall clock measured from construction
#[derive(Debug, Clone)]
pub struct SystemClock {
    start: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

/// Clock advanced by hand (tests and headless runs)
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: u64,
}

impl ManualClock {
    pub fn new(start: u64) -> Self {
        Self { now: start }
    }

    pub fn advance(&mut self, ms: u64) {
        self.now += ms;
    }

    /// Jump forward; earlier times are ignored to stay monotonic
    pub fn set(&mut self, now: u64) {
        self.now = self.now.max(now);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_is_monotonic() {
        let mut clock = ManualClock::new(100);
        clock.advance(50);
        assert_eq!(clock.now_ms(), 150);
        clock.set(120);
        assert_eq!(clock.now_ms(), 150);
        clock.set(400);
        assert_eq!(clock.now_ms(), 400);
    }

    #[test]
    fn test_system_clock_does_not_go_back() {
        let clock = SystemClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
