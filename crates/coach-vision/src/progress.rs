//! Per-job progress reporting.
//!
//! Each analysis run owns one `ProgressHandle`, injected by the caller
//! and shared with external pollers. Reads are eventually consistent;
//! the percent is clamped to [0, 100], reset to 0 at job start, and left
//! at 100 on completion until the next reset.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct Inner {
    percent: AtomicU8,
    stage: Mutex<String>,
}

/// Cheap-to-clone shared progress cell for one analysis job.
#[derive(Debug, Clone, Default)]
pub struct ProgressHandle {
    inner: Arc<Inner>,
}

impl ProgressHandle {
    /// Create a fresh handle at 0%.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current percent in [0, 100]. 0 before any job has started.
    pub fn get(&self) -> u8 {
        self.inner.percent.load(Ordering::Relaxed)
    }

    /// Current stage label; empty before any stage is set.
    pub fn stage(&self) -> String {
        self.inner
            .stage
            .lock()
            .map(|s| s.clone())
            .unwrap_or_default()
    }

    /// Reset to 0% and clear the stage. Called at job start.
    pub fn reset(&self) {
        self.inner.percent.store(0, Ordering::Relaxed);
        if let Ok(mut stage) = self.inner.stage.lock() {
            stage.clear();
        }
    }

    /// Set the percent directly, clamped to [0, 100].
    pub fn set(&self, percent: u8) {
        self.inner.percent.store(percent.min(100), Ordering::Relaxed);
    }

    /// Tick to round(100 * done / total). Total of zero leaves the
    /// percent untouched.
    pub fn tick(&self, done: u64, total: u64) {
        if total == 0 {
            return;
        }
        let percent = ((100.0 * done as f64 / total as f64).round() as u64).min(100) as u8;
        self.set(percent);
    }

    /// Set the human-readable stage label.
    pub fn set_stage(&self, stage: impl Into<String>) {
        if let Ok(mut slot) = self.inner.stage.lock() {
            *slot = stage.into();
        }
    }
}
