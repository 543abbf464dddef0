//! Write-once holder for the telemetry sink.
//!
//! The registry is owned by the application's composition root and shared with
//! appenders through an `Arc`. It starts empty, accepts exactly one `bind`, and
//! is never cleared.

use std::fmt;
use std::sync::OnceLock;

use crate::error::AlreadyBoundError;
use tracing::{debug, error};

/// Single-assignment cell holding the bound sink.
pub struct SinkRegistry<P> {
    cell: OnceLock<P>,
}

impl<P> SinkRegistry<P> {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self { cell: OnceLock::new() }
    }

    /// Bind `sink` if nothing is bound yet.
    ///
    /// Under concurrent callers exactly one succeeds; every other call, and any
    /// later call, returns [`AlreadyBoundError`] and drops its sink.
    pub fn bind(&self, sink: P) -> Result<(), AlreadyBoundError> {
        match self.cell.set(sink) {
            Ok(()) => {
                debug!(target: "logbridge::registry", "log sink bound");
                Ok(())
            }
            Err(_rejected) => {
                error!(
                    target: "logbridge::registry",
                    "log sink already bound; ignoring second bind"
                );
                Err(AlreadyBoundError)
            }
        }
    }

    /// Currently bound sink, if any. Never blocks.
    pub fn current(&self) -> Option<&P> {
        self.cell.get()
    }

    pub fn is_bound(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<P> Default for SinkRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> fmt::Debug for SinkRegistry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkRegistry").field("bound", &self.is_bound()).finish()
    }
}
