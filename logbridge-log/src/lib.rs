//! `log` facade adapter for `logbridge`.
//! Each `log::Record` is forwarded to an [`OtlpAppender`] on the calling thread.

use logbridge::{CodeLocation, Level, LoggingEvent, OtlpAppender};
use opentelemetry::logs::LoggerProvider;
use std::borrow::Cow;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// A `log::Log` implementation backed by an [`OtlpAppender`].
#[derive(Clone, Debug)]
pub struct LogBridge<P> {
    appender: OtlpAppender<P>,
}

impl<P> LogBridge<P> {
    pub fn new(appender: OtlpAppender<P>) -> Self {
        Self { appender }
    }

    pub fn appender(&self) -> &OtlpAppender<P> {
        &self.appender
    }
}

/// Errors from [`install`].
#[derive(Debug, Error)]
pub enum InstallError {
    /// Another global logger was set first.
    #[error("a global logger is already installed")]
    AlreadyInstalled(#[from] log::SetLoggerError),
}

/// Register `bridge` as the process-wide `log` logger and set the max level.
pub fn install<P>(bridge: LogBridge<P>, max_level: log::LevelFilter) -> Result<(), InstallError>
where
    P: LoggerProvider + Send + Sync + 'static,
{
    log::set_boxed_logger(Box::new(bridge))?;
    log::set_max_level(max_level);
    tracing::debug!(target: "logbridge_log", %max_level, "log bridge installed");
    Ok(())
}

/// Level of a `log` record on the bridge's threshold scale.
pub fn level_of(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::ERROR,
        log::Level::Warn => Level::WARN,
        log::Level::Info => Level::INFO,
        log::Level::Debug => Level::DEBUG,
        log::Level::Trace => Level::TRACE,
    }
}

impl<P> log::Log for LogBridge<P>
where
    P: LoggerProvider + Send + Sync,
{
    // Filtering is left to the host's max level.
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        let event = RecordEvent::new(record);
        self.appender.on_event(&event);
    }

    fn flush(&self) {}
}

struct RecordEvent<'a> {
    record: &'a log::Record<'a>,
    message: Cow<'static, str>,
    timestamp_millis: i64,
}

impl<'a> RecordEvent<'a> {
    fn new(record: &'a log::Record<'a>) -> Self {
        let message = match record.args().as_str() {
            Some(literal) => Cow::Borrowed(literal),
            None => Cow::Owned(record.args().to_string()),
        };
        Self { record, message, timestamp_millis: now_millis() }
    }
}

impl LoggingEvent for RecordEvent<'_> {
    fn logger_name(&self) -> &str {
        self.record.target()
    }

    fn timestamp_millis(&self) -> i64 {
        self.timestamp_millis
    }

    fn formatted_message(&self) -> &str {
        &self.message
    }

    fn level(&self) -> Level {
        level_of(self.record.level())
    }

    fn location(&self) -> Option<CodeLocation<'_>> {
        Some(CodeLocation {
            file: self.record.file(),
            line: self.record.line(),
            module_path: self.record.module_path(),
        })
    }
}

fn now_millis() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(since) => i64::try_from(since.as_millis()).unwrap_or(i64::MAX),
        Err(before) => i64::try_from(before.duration().as_millis()).map_or(i64::MIN, |ms| -ms),
    }
}
