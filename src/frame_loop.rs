//! Fixed-cadence redraw scheduling.
//!
//! There is no blocking loop. The host arms a one-shot timer for the
//! interval returned by each tick and calls back in; once the loop is
//! stopped, [`FrameLoop::tick`] returns `None` and the host stops re-arming.

use crate::constants::{DEFAULT_FPS, MAX_FPS, MIN_FPS};
use std::time::{Duration, Instant};

/// Timing for one frame pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTick {
    /// Seconds since the previous pass; zero on the first one
    pub delta: f32,
    /// Delay until the next pass should run
    pub next_in: Duration,
}

#[derive(Debug)]
pub struct FrameLoop {
    running: bool,
    fps: u32,
    last_frame: Option<Instant>,
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new(DEFAULT_FPS)
    }
}

impl FrameLoop {
    pub fn new(fps: u32) -> Self {
        Self {
            running: false,
            fps: fps.clamp(MIN_FPS, MAX_FPS),
            last_frame: None,
        }
    }

    pub fn start(&mut self) {
        if !self.running {
            tracing::info!(fps = self.fps, "Frame loop started");
        }
        self.running = true;
    }

    /// Stop re-arming. The next tick returns `None`.
    pub fn stop(&mut self) {
        if self.running {
            tracing::info!("Frame loop stopped");
        }
        self.running = false;
        self.last_frame = None;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn set_fps(&mut self, fps: u32) {
        self.fps = fps.clamp(MIN_FPS, MAX_FPS);
    }

    /// Interval between passes, truncated to whole milliseconds.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(u64::from(1000 / self.fps))
    }

    /// Exact time one pass may take at the target rate.
    pub fn frame_budget(&self) -> Duration {
        Duration::from_secs(1) / self.fps
    }

    /// Advance to `now`.
    pub fn tick(&mut self, now: Instant) -> Option<FrameTick> {
        if !self.running {
            return None;
        }

        let delta = self
            .last_frame
            .map(|last| now.saturating_duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_frame = Some(now);

        Some(FrameTick {
            delta,
            next_in: self.frame_interval(),
        })
    }
}
