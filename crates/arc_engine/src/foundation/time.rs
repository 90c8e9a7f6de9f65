//! Frame timing

use std::time::{Duration, Instant};

/// Counts presented frames and the wall time they took
pub struct FrameTimer {
    started: Instant,
    last_frame: Instant,
    delta_time: f32,
    frame_count: u64,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTimer {
    /// Create a timer starting now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last_frame: now,
            delta_time: 0.0,
            frame_count: 0,
        }
    }

    /// Record one completed frame (call once per loop iteration)
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.delta_time = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frame_count += 1;
    }

    /// Time taken by the most recent frame in seconds
    pub const fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Number of frames recorded so far
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Wall time since the timer was created
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Snapshot of the counters
    pub fn stats(&self) -> FrameStats {
        FrameStats {
            frame_count: self.frame_count,
            elapsed: self.elapsed(),
        }
    }
}

/// Frame totals for one run of the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// Number of frames presented
    pub frame_count: u64,
    /// Wall time spent in the loop
    pub elapsed: Duration,
}

impl FrameStats {
    /// Average frames per second over the whole run
    #[allow(clippy::cast_precision_loss)]
    pub fn average_fps(&self) -> f32 {
        let secs = self.elapsed.as_secs_f32();
        if secs > 0.0 {
            self.frame_count as f32 / secs
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tick_counts_frames() {
        let mut timer = FrameTimer::new();
        assert_eq!(timer.frame_count(), 0);

        timer.tick();
        timer.tick();
        timer.tick();

        assert_eq!(timer.frame_count(), 3);
        assert!(timer.delta_time() >= 0.0);
        assert_eq!(timer.stats().frame_count, 3);
    }

    #[test]
    fn test_average_fps() {
        let stats = FrameStats {
            frame_count: 120,
            elapsed: Duration::from_secs(2),
        };
        assert_relative_eq!(stats.average_fps(), 60.0);
    }

    #[test]
    fn test_average_fps_without_elapsed_time() {
        let stats = FrameStats {
            frame_count: 5,
            elapsed: Duration::ZERO,
        };
        assert_relative_eq!(stats.average_fps(), 0.0);
    }
}
