//! Frame timing and profiling instrumentation.
//!
//! [`PerfMonitor`] keeps the last second or so of frame-pass durations and
//! warns when a pass runs well over the frame budget. [`profile_scope!`]
//! times a block and compiles down to nothing unless the `profiling` feature
//! is enabled:
//!
//! ```ignore
//! fn hit_test(&self, x: f32, y: f32) -> Option<SpriteId> {
//!     profile_scope!("hit_test");
//!     // ...
//! }
//! ```

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

/// Frame passes kept for averages
const WINDOW: usize = 60;

/// A pass slower than this many budgets is logged
const SLOW_FACTOR: u32 = 2;

/// Time a scope. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold);
    };
}

pub use crate::profile_scope;

// ============================================================================
// Frame Monitor
// ============================================================================

/// Timing totals for one named operation, e.g. `"render"`.
#[derive(Debug, Clone, Default)]
pub struct OperationStats {
    pub count: u64,
    pub total: Duration,
    pub max: Duration,
}

impl OperationStats {
    fn record(&mut self, elapsed: Duration) {
        self.count += 1;
        self.total += elapsed;
        self.max = self.max.max(elapsed);
    }

    pub fn average(&self) -> Duration {
        match u32::try_from(self.count) {
            Ok(0) => Duration::ZERO,
            Ok(n) => self.total / n,
            Err(_) => self.total.div_f64(self.count as f64),
        }
    }
}

/// Frame-pass statistics for the redraw loop.
#[derive(Debug)]
pub struct PerfMonitor {
    recent: VecDeque<Duration>,
    pass_started: Option<Instant>,
    budget: Duration,
    frames: u64,
    slow_frames: u64,
    operations: HashMap<&'static str, OperationStats>,
}

impl PerfMonitor {
    /// Monitor for passes that should each fit in `budget`.
    pub fn with_budget(budget: Duration) -> Self {
        Self {
            recent: VecDeque::with_capacity(WINDOW),
            pass_started: None,
            budget,
            frames: 0,
            slow_frames: 0,
            operations: HashMap::new(),
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn set_budget(&mut self, budget: Duration) {
        self.budget = budget;
    }

    pub fn begin_frame(&mut self) {
        self.pass_started = Some(Instant::now());
    }

    /// Close the open pass and return how long it took.
    pub fn end_frame(&mut self) -> Option<Duration> {
        let elapsed = self.pass_started.take()?.elapsed();
        self.record_frame(elapsed);
        Some(elapsed)
    }

    /// Record a pass measured elsewhere.
    pub fn record_frame(&mut self, elapsed: Duration) {
        if self.recent.len() == WINDOW {
            self.recent.pop_front();
        }
        self.recent.push_back(elapsed);
        self.frames += 1;

        if elapsed > self.budget * SLOW_FACTOR {
            self.slow_frames += 1;
            warn!(
                elapsed_ms = elapsed.as_millis() as u64,
                budget_ms = self.budget.as_millis() as u64,
                "Slow frame pass"
            );
        }
    }

    pub fn record_operation(&mut self, name: &'static str, elapsed: Duration) {
        self.operations.entry(name).or_default().record(elapsed);
    }

    pub fn operation_stats(&self, name: &str) -> Option<&OperationStats> {
        self.operations.get(name)
    }

    pub fn total_frames(&self) -> u64 {
        self.frames
    }

    /// Mean over the recent window
    pub fn average_frame_time(&self) -> Duration {
        if self.recent.is_empty() {
            return Duration::ZERO;
        }
        self.recent.iter().sum::<Duration>() / self.recent.len() as u32
    }

    /// Slowest pass in the recent window
    pub fn max_frame_time(&self) -> Duration {
        self.recent.iter().copied().max().unwrap_or_default()
    }

    /// Share of all passes that ran over twice the budget, in percent.
    pub fn slow_frame_percentage(&self) -> f64 {
        if self.frames == 0 {
            return 0.0;
        }
        self.slow_frames as f64 * 100.0 / self.frames as f64
    }

    pub fn reset(&mut self) {
        self.recent.clear();
        self.pass_started = None;
        self.frames = 0;
        self.slow_frames = 0;
        self.operations.clear();
    }
}

// ============================================================================
// Scoped Timer
// ============================================================================

/// Logs its own lifetime on drop if it ran past `threshold`.
pub struct ScopedTimer {
    name: &'static str,
    started: Instant,
    threshold: Duration,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold: Duration) -> Self {
        Self {
            name,
            started: Instant::now(),
            threshold,
        }
    }

    /// One-millisecond threshold, used by `profile_scope!`.
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, Duration::from_millis(1))
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed = self.elapsed();
        if elapsed <= self.threshold {
            return;
        }

        #[cfg(feature = "profiling")]
        trace!(operation = self.name, elapsed_us = elapsed.as_micros() as u64, "[PERF]");

        #[cfg(not(feature = "profiling"))]
        warn!(
            operation = self.name,
            elapsed_us = elapsed.as_micros() as u64,
            threshold_us = self.threshold.as_micros() as u64,
            "Slow operation"
        );
    }
}
