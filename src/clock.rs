use std::time::{Duration, Instant};

/// Fixed-rate tick clock.
///
/// Hands out one tick per deadline. A late frame pushes the next deadline
/// out from `now` instead of queueing catch-up ticks. The first tick is due
/// one interval after creation so the starting state gets a frame of its own.
pub struct FrameClock {
    interval: Duration,
    next_tick: Instant,
}

impl FrameClock {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_tick: now + interval,
        }
    }

    pub fn next_deadline(&self) -> Instant {
        self.next_tick
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_tick
    }

    /// Take the pending tick if one is due.
    pub fn consume(&mut self, now: Instant) -> bool {
        if !self.is_due(now) {
            return false;
        }
        self.next_tick += self.interval;
        if self.next_tick <= now {
            self.next_tick = now + self.interval;
        }
        true
    }
}

/// Simple FPS counter
pub struct FpsCounter {
    last_update: Instant,
    frame_count: u32,
}

impl FpsCounter {
    pub fn new(now: Instant) -> Self {
        Self {
            last_update: now,
            frame_count: 0,
        }
    }

    /// Tick the counter, returns Some(fps) every second
    pub fn tick(&mut self, now: Instant) -> Option<f64> {
        self.frame_count += 1;
        let elapsed = now.duration_since(self.last_update);

        if elapsed.as_secs_f64() >= 1.0 {
            let fps = self.frame_count as f64 / elapsed.as_secs_f64();
            self.frame_count = 0;
            self.last_update = now;
            Some(fps)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(33);

    #[test]
    fn test_first_tick_waits_one_interval() {
        let start = Instant::now();
        let mut clock = FrameClock::new(INTERVAL, start);
        assert!(!clock.is_due(start));
        assert!(!clock.consume(start));
        assert_eq!(clock.next_deadline(), start + INTERVAL);
        assert!(clock.consume(start + INTERVAL));
    }

    #[test]
    fn test_one_tick_per_interval() {
        let start = Instant::now();
        let mut clock = FrameClock::new(INTERVAL, start);
        assert!(clock.consume(start + INTERVAL));
        assert!(!clock.consume(start + INTERVAL));
        assert!(!clock.consume(start + Duration::from_millis(50)));
        assert!(clock.consume(start + INTERVAL * 2));
        assert!(!clock.consume(start + INTERVAL * 2));
    }

    #[test]
    fn test_late_frame_does_not_build_backlog() {
        let start = Instant::now();
        let mut clock = FrameClock::new(INTERVAL, start);

        let late = start + INTERVAL * 10;
        assert!(clock.consume(late));
        assert!(!clock.consume(late));
        assert_eq!(clock.next_deadline(), late + INTERVAL);
    }

    #[test]
    fn test_fps_reported_once_per_second() {
        let start = Instant::now();
        let mut fps = FpsCounter::new(start);
        for i in 1..30 {
            assert_eq!(fps.tick(start + Duration::from_millis(i * 33)), None);
        }
        let reported = fps.tick(start + Duration::from_secs(1)).unwrap();
        assert!((reported - 30.0).abs() < 0.01, "fps = {}", reported);
        assert_eq!(fps.tick(start + Duration::from_millis(1010)), None);
    }
}
