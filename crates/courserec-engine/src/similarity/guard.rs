//! Startup budget for the matrix build: timeout and cooperative cancellation.

use std::time::{Duration, Instant};

use courserec_core::errors::BuildError;
use courserec_core::traits::{Cancellable, CancellationToken};

/// Checked once per matrix row.
#[derive(Debug, Clone)]
pub struct BuildGuard {
    started: Instant,
    timeout: Option<Duration>,
    cancel: Option<CancellationToken>,
}

impl BuildGuard {
    /// A guard that never trips.
    pub fn unlimited() -> Self {
        Self {
            started: Instant::now(),
            timeout: None,
            cancel: None,
        }
    }

    pub fn new(timeout: Option<Duration>, cancel: Option<CancellationToken>) -> Self {
        Self {
            started: Instant::now(),
            timeout,
            cancel,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Fails with `Cancelled` or `Timeout` once the budget is spent.
    pub fn check(&self, rows_done: usize, rows: usize) -> Result<(), BuildError> {
        if self.cancel.as_ref().is_some_and(|c| c.is_cancelled()) {
            return Err(BuildError::Cancelled);
        }
        if let Some(limit) = self.timeout {
            if self.started.elapsed() > limit {
                return Err(BuildError::Timeout {
                    limit_ms: limit.as_millis() as u64,
                    rows_done,
                    rows,
                });
            }
        }
        Ok(())
    }
}

impl Default for BuildGuard {
    fn default() -> Self {
        Self::unlimited()
    }
}
