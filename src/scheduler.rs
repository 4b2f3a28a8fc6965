use std::time::{Duration, Instant};

/// A task that repeats every `period`.
#[derive(Debug, Clone)]
pub struct FixedInterval {
    period: Duration,
    next_due: Instant,
}

impl FixedInterval {
    /// The first tick is due immediately at `start`.
    pub fn new(period: Duration, start: Instant) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            next_due: start,
        }
    }

    /// Number of ticks due at `now`, at most `max_ticks` (and at least one
    /// whenever a tick is due).
    ///
    /// Advances the schedule past every elapsed period; ticks beyond
    /// `max_ticks` are skipped rather than queued.
    pub fn due_ticks(&mut self, now: Instant, max_ticks: u32) -> u32 {
        if now < self.next_due {
            return 0;
        }

        let behind = now.duration_since(self.next_due);
        let elapsed = behind.as_nanos() / self.period.as_nanos() + 1;
        let elapsed = u32::try_from(elapsed).unwrap_or(u32::MAX);
        let cap = max_ticks.max(1);

        if elapsed > cap {
            log::debug!("skipping {} late ticks", elapsed - cap);
            // Resync so the next tick is one period from now
            self.next_due = now + self.period;
            cap
        } else {
            self.next_due += self.period * elapsed;
            elapsed
        }
    }

    /// Time left until the next tick is due.
    pub fn until_next(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}
