//! Fixed-rate tick scheduling

use std::time::{Duration, Instant};

/// Hands out tick deadlines at a fixed rate.
///
/// A late tick pushes the schedule back instead of queueing catch-up ticks.
#[derive(Debug, Clone, Copy)]
pub struct FramePacer {
    period: Duration,
    next: Instant,
}

impl FramePacer {
    pub fn new(ticks_per_second: u32, now: Instant) -> Self {
        Self {
            period: Duration::from_secs(1) / ticks_per_second.max(1),
            next: now,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn deadline(&self) -> Instant {
        self.next
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Schedule the tick after the one that just ran
    pub fn complete_tick(&mut self, now: Instant) {
        self.next = (self.next + self.period).max(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_first_tick_is_due_immediately() {
        let start = Instant::now();
        let pacer = FramePacer::new(60, start);
        assert!(pacer.is_due(start));
        assert_eq!(pacer.period(), Duration::from_nanos(16_666_666));
    }

    #[test]
    fn test_on_time_ticks_keep_cadence() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(50, start);

        pacer.complete_tick(start + ms(3));
        assert_eq!(pacer.deadline(), start + ms(20));
        assert!(!pacer.is_due(start + ms(19)));
        assert!(pacer.is_due(start + ms(20)));

        pacer.complete_tick(start + ms(21));
        assert_eq!(pacer.deadline(), start + ms(40), "No drift from a late wake-up");
    }

    #[test]
    fn test_slow_frame_delays_next_tick() {
        let start = Instant::now();
        let mut pacer = FramePacer::new(50, start);

        // Tick took 70ms, well past the next two deadlines
        pacer.complete_tick(start + ms(70));
        assert_eq!(pacer.deadline(), start + ms(70));
        assert!(pacer.is_due(start + ms(70)));

        // Only one immediate tick, then back to the normal period
        pacer.complete_tick(start + ms(71));
        assert_eq!(pacer.deadline(), start + ms(90));
    }
}
