use std::time::Duration;

/// Fixed-cadence gravity clock fed with frame deltas.
#[derive(Clone, Debug)]
pub struct GravityTimer {
    interval: Duration,
    elapsed: Duration,
}

impl GravityTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            elapsed: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Adds `dt` and returns how many ticks fell due; the remainder carries over.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        self.elapsed += dt;
        let mut ticks = 0;
        while self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            ticks += 1;
        }
        ticks
    }
}
