//! Appender configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Optional attributes the appender may add on top of `throwable.message`.
///
/// Both flags default to off, in which case the only attribute ever emitted is
/// `throwable.message`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AppenderConfig {
    /// Add `code.filepath`, `code.lineno` and `code.namespace` from the event location.
    pub capture_code_attributes: bool,
    /// Add `thread.name` for the emitting thread.
    pub capture_thread_name: bool,
}

impl AppenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_code_attributes(mut self, enabled: bool) -> Self {
        self.capture_code_attributes = enabled;
        self
    }

    pub fn with_thread_name(mut self, enabled: bool) -> Self {
        self.capture_thread_name = enabled;
        self
    }
}
