//! Fixed-rate frame pacing

use std::time::{Duration, Instant};

/// Hands out frame deadlines at a fixed rate.
///
/// A frame that overruns by more than one period resyncs to "now" instead of
/// bursting to catch up.
#[derive(Debug, Clone)]
pub struct FrameClock {
    period: Duration,
    next: Instant,
    // FPS measurement window
    window_start: Instant,
    window_frames: u32,
    fps: f32,
}

impl FrameClock {
    pub fn new(fps: u32, now: Instant) -> Self {
        let period = Duration::from_secs_f64(1.0 / fps.max(1) as f64);
        Self {
            period,
            next: now,
            window_start: now,
            window_frames: 0,
            fps: 0.0,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// When the next frame should run
    pub fn deadline(&self) -> Instant {
        self.next
    }

    /// Is a frame due at `now`?
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Mark a frame as run at `now` and schedule the next one
    pub fn frame_done(&mut self, now: Instant) {
        self.next += self.period;
        if now > self.next + self.period {
            self.next = now + self.period;
        }

        self.window_frames += 1;
        let elapsed = now.duration_since(self.window_start);
        if elapsed >= Duration::from_secs(1) {
            self.fps = self.window_frames as f32 / elapsed.as_secs_f32();
            self.window_frames = 0;
            self.window_start = now;
        }
    }

    /// Frames per second measured over the last full second
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadlines_advance_by_period() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(60, t0);
        assert!(clock.is_due(t0));
        clock.frame_done(t0);
        assert_eq!(clock.deadline(), t0 + clock.period());
        assert!(!clock.is_due(t0));
        clock.frame_done(t0 + clock.period());
        assert_eq!(clock.deadline(), t0 + clock.period() * 2);
    }

    #[test]
    fn test_resync_after_stall() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(60, t0);
        let late = t0 + Duration::from_secs(2);
        clock.frame_done(late);
        assert_eq!(clock.deadline(), late + clock.period());
    }

    #[test]
    fn test_fps_measured() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(60, t0);
        let mut now = t0;
        for _ in 0..61 {
            now += clock.period();
            clock.frame_done(now);
        }
        assert!((clock.fps() - 60.0).abs() < 1.5);
    }
}
