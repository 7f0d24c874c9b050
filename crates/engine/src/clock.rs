/// Fixed-interval tick clock driven by caller-supplied timestamps.
#[derive(Debug, Clone)]
pub struct TickClock {
    interval_ms: u64,
    last_tick_ms: u64,
}

impl TickClock {
    pub fn new(interval_ms: u32, now_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1) as u64,
            last_tick_ms: now_ms,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn due(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.last_tick_ms) >= self.interval_ms
    }

    /// Milliseconds until the next tick, zero if already due.
    pub fn time_until_due(&self, now_ms: u64) -> u64 {
        let elapsed = now_ms.saturating_sub(self.last_tick_ms);
        self.interval_ms.saturating_sub(elapsed)
    }

    /// Start a new interval at `now_ms`.
    pub fn rearm(&mut self, now_ms: u64) {
        self.last_tick_ms = now_ms;
    }

    /// Change the interval; takes effect from the last rearm.
    pub fn set_interval_ms(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms.max(1) as u64;
    }
}
