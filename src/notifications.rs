//! Toast notifications - short user-visible messages.
//!
//! Recovered errors and settings reloads end up here; the host decides how
//! (and whether) to show them.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Maximum number of toasts kept at once; the oldest is dropped first.
const MAX_TOASTS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Info,
    Warning,
    Error,
}

impl ToastVariant {
    pub fn default_duration(&self) -> Duration {
        match self {
            ToastVariant::Success => Duration::from_secs(3),
            ToastVariant::Info => Duration::from_secs(4),
            ToastVariant::Warning => Duration::from_secs(5),
            ToastVariant::Error => Duration::from_secs(6),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Toast {
    pub message: String,
    pub variant: ToastVariant,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, variant: ToastVariant) -> Self {
        Self {
            message: message.into(),
            variant,
            created_at: Instant::now(),
            duration: variant.default_duration(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Info)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastVariant::Error)
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Fraction of the display time left, from 1.0 down to 0.0
    pub fn remaining_percent(&self) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }
        let elapsed = self.created_at.elapsed().as_secs_f32();
        (1.0 - elapsed / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Default)]
pub struct ToastManager {
    toasts: VecDeque<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, toast: Toast) {
        if self.toasts.len() >= MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(toast);
    }

    /// Drop expired toasts. Returns true if any were removed.
    pub fn tick(&mut self) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| !toast.is_expired());
        self.toasts.len() != before
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn count(&self) -> usize {
        self.toasts.len()
    }

    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}
