//! Read-only view of a host logging event.

use crate::level::Level;
use std::error::Error;

/// Failure attached to a log event.
pub trait ThrowableProxy {
    /// Human-readable message, if the failure reports one.
    fn message(&self) -> Option<&str>;
}

/// Source location of the call site that produced an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CodeLocation<'a> {
    pub file: Option<&'a str>,
    pub line: Option<u32>,
    pub module_path: Option<&'a str>,
}

/// An event handed to the appender by the host logging framework.
///
/// Implementations expose borrowed data only; the appender never mutates or
/// retains the event.
pub trait LoggingEvent {
    /// Logical logger name; becomes the instrumentation scope name.
    fn logger_name(&self) -> &str;
    /// Milliseconds since the Unix epoch.
    fn timestamp_millis(&self) -> i64;
    /// Final, already formatted message text.
    fn formatted_message(&self) -> &str;
    fn level(&self) -> Level;
    fn throwable(&self) -> Option<&dyn ThrowableProxy> {
        None
    }
    fn location(&self) -> Option<CodeLocation<'_>> {
        None
    }
}

/// Owned failure description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Throwable {
    message: Option<String>,
}

impl Throwable {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: Some(message.into()) }
    }

    /// A failure that reports no message at all.
    pub fn without_message() -> Self {
        Self { message: None }
    }

    /// Capture the `Display` text of an error.
    pub fn from_error(err: &(dyn Error + '_)) -> Self {
        Self::new(err.to_string())
    }
}

impl ThrowableProxy for Throwable {
    fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Owned event for hosts without an event type of their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    logger_name: String,
    timestamp_millis: i64,
    level: Level,
    message: String,
    throwable: Option<Throwable>,
}

impl Event {
    pub fn new(
        logger_name: impl Into<String>,
        timestamp_millis: i64,
        level: Level,
        message: impl Into<String>,
    ) -> Self {
        Self {
            logger_name: logger_name.into(),
            timestamp_millis,
            level,
            message: message.into(),
            throwable: None,
        }
    }

    /// Attach a failure to the event.
    pub fn with_throwable(mut self, throwable: Throwable) -> Self {
        self.throwable = Some(throwable);
        self
    }
}

impl LoggingEvent for Event {
    fn logger_name(&self) -> &str {
        &self.logger_name
    }

    fn timestamp_millis(&self) -> i64 {
        self.timestamp_millis
    }

    fn formatted_message(&self) -> &str {
        &self.message
    }

    fn level(&self) -> Level {
        self.level
    }

    fn throwable(&self) -> Option<&dyn ThrowableProxy> {
        self.throwable.as_ref().map(|t| t as &dyn ThrowableProxy)
    }
}
