/*!
 * Progress reporting and run control shared by both pipelines
 */

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Progress notification emitted by a pipeline.
///
/// Units are seeds in automatic mode and lengths in manual mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressEvent {
    Started { total: u64 },
    Advanced { completed: u64, total: u64 },
    Finished { completed: u64 },
}

/// Receiver of progress events. Must tolerate calls from worker threads.
pub trait ProgressReporter: Sync {
    fn report(&self, event: ProgressEvent);
}

/// Reporter that discards all events
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn report(&self, _event: ProgressEvent) {}
}

impl<F> ProgressReporter for F
where
    F: Fn(ProgressEvent) + Sync,
{
    fn report(&self, event: ProgressEvent) {
        self(event)
    }
}

/// Shared stop flag for a running generation
#[derive(Debug, Clone)]
pub struct RunState {
    running: Arc<AtomicBool>,
}

impl RunState {
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed)
    }
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}
