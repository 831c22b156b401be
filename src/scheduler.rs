use std::thread;
use std::time::{Duration, Instant};

/// Sleeps out the remainder of a fixed frame budget.
///
/// Overrunning frames are not compensated: no sleep happens and nothing is
/// skipped.
pub struct FramePacer {
    budget: Duration,
    frame_start: Instant,
}

impl FramePacer {
    pub fn new(budget: Duration) -> Self {
        Self {
            budget,
            frame_start: Instant::now(),
        }
    }

    /// Mark the start of a frame's work
    pub fn begin_frame(&mut self) {
        self.frame_start = Instant::now();
    }

    /// How long to sleep after a frame that took `elapsed`
    pub fn sleep_time(&self, elapsed: Duration) -> Option<Duration> {
        self.budget.checked_sub(elapsed).filter(|d| !d.is_zero())
    }

    /// Sleep until the budget measured from `begin_frame` is used up
    pub fn end_frame(&self) {
        if let Some(remaining) = self.sleep_time(self.frame_start.elapsed()) {
            thread::sleep(remaining);
        }
    }
}

/// Simple FPS counter
pub struct FpsCounter {
    last_update: Instant,
    frame_count: u32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self {
            last_update: Instant::now(),
            frame_count: 0,
        }
    }

    /// Tick the counter, returns Some(fps) every second
    pub fn tick(&mut self) -> Option<f64> {
        self.frame_count += 1;
        let elapsed = self.last_update.elapsed();

        if elapsed.as_secs_f64() >= 1.0 {
            let fps = self.frame_count as f64 / elapsed.as_secs_f64();
            self.frame_count = 0;
            self.last_update = Instant::now();
            Some(fps)
        } else {
            None
        }
    }
}
