use std::thread::sleep;
use std::time::{Duration, Instant};

/// Caps the loop at a fixed number of ticks per second.
pub struct Clock {
    period: Duration,
    next_tick: Instant,
}

impl Clock {
    pub fn new(ticks_per_second: u32) -> Self {
        let period = Duration::from_secs(1) / ticks_per_second.max(1);
        Clock { period, next_tick: Instant::now() }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Blocks until the next tick boundary. A loop that fell behind is not
    /// made to catch up; the schedule restarts from now.
    pub fn tick(&mut self) {
        let now = Instant::now();
        if now < self.next_tick {
            sleep(self.next_tick - now);
            self.next_tick += self.period;
        } else {
            self.next_tick = now + self.period;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_from_rate() {
        assert_eq!(Clock::new(20).period(), Duration::from_millis(50));
        assert_eq!(Clock::new(0).period(), Duration::from_secs(1));
    }

    #[test]
    fn test_ticks_are_paced() {
        let mut clock = Clock::new(100);
        let start = Instant::now();
        for _ in 0..4 {
            clock.tick();
        }
        // The first tick is immediate
        assert!(start.elapsed() >= Duration::from_millis(30));
    }
}
