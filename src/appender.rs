//! Translate host log events into OpenTelemetry log records.
//!
//! [`OtlpAppender::on_event`] runs on the caller's thread. It reads the sink
//! from the shared [`SinkRegistry`], builds one record per event and hands it
//! to the sink's `emit`. Nothing is buffered and nothing is reported back to
//! the host: an unbound registry drops the event, and emission failures are
//! the sink's business.

use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;
use std::task::{Context as TaskContext, Poll};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use futures::future::{ready, Ready};
use opentelemetry::logs::{AnyValue, LogRecord, Logger, LoggerProvider};
use opentelemetry::trace::TraceContextExt;
use opentelemetry::Context;
use tower_service::Service;

use crate::config::AppenderConfig;
use crate::event::LoggingEvent;
use crate::level::map_severity;
use crate::registry::SinkRegistry;

/// Attribute key for the message of the failure attached to an event.
pub const THROWABLE_MESSAGE: &str = "throwable.message";
const CODE_FILEPATH: &str = "code.filepath";
const CODE_LINENO: &str = "code.lineno";
const CODE_NAMESPACE: &str = "code.namespace";
const THREAD_NAME: &str = "thread.name";

/// Forwards host log events to the sink bound in a [`SinkRegistry`].
pub struct OtlpAppender<P> {
    registry: Arc<SinkRegistry<P>>,
    config: AppenderConfig,
}

impl<P> OtlpAppender<P> {
    pub fn new(registry: Arc<SinkRegistry<P>>) -> Self {
        Self::with_config(registry, AppenderConfig::default())
    }

    pub fn with_config(registry: Arc<SinkRegistry<P>>, config: AppenderConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &Arc<SinkRegistry<P>> {
        &self.registry
    }

    pub fn config(&self) -> &AppenderConfig {
        &self.config
    }
}

impl<P: LoggerProvider> OtlpAppender<P> {
    /// Emit one record for `event`, or do nothing if no sink is bound yet.
    pub fn on_event<E: LoggingEvent + ?Sized>(&self, event: &E) {
        let Some(provider) = self.registry.current() else {
            return;
        };
        let logger = provider.logger(event.logger_name().to_owned());
        let mut record = logger.create_log_record();
        fill_record(&mut record, event, &self.config);
        logger.emit(record);
    }
}

fn fill_record<R, E>(record: &mut R, event: &E, config: &AppenderConfig)
where
    R: LogRecord,
    E: LoggingEvent + ?Sized,
{
    if let Some(timestamp) = epoch_time(event.timestamp_millis()) {
        record.set_timestamp(timestamp);
    }
    record.set_body(AnyValue::from(event.formatted_message().to_owned()));

    let level = event.level();
    if let Some(severity) = map_severity(level) {
        record.set_severity_number(severity);
    }
    record.set_severity_text(level.label());

    // Read here, not when the event was created: the span active at dispatch wins.
    let span_context = Context::map_current(|cx| cx.span().span_context().clone());
    if span_context.is_valid() {
        record.set_trace_context(
            span_context.trace_id(),
            span_context.span_id(),
            Some(span_context.trace_flags()),
        );
    }

    if let Some(message) = event.throwable().and_then(|t| t.message()) {
        record.add_attribute(THROWABLE_MESSAGE, message.to_owned());
    }

    if config.capture_code_attributes {
        if let Some(location) = event.location() {
            if let Some(file) = location.file {
                record.add_attribute(CODE_FILEPATH, file.to_owned());
            }
            if let Some(line) = location.line {
                record.add_attribute(CODE_LINENO, i64::from(line));
            }
            if let Some(module_path) = location.module_path {
                record.add_attribute(CODE_NAMESPACE, module_path.to_owned());
            }
        }
    }

    if config.capture_thread_name {
        if let Some(name) = std::thread::current().name() {
            record.add_attribute(THREAD_NAME, name.to_owned());
        }
    }
}

/// Wall-clock time `millis` milliseconds from the Unix epoch, if representable.
fn epoch_time(millis: i64) -> Option<SystemTime> {
    let offset = Duration::from_millis(millis.unsigned_abs());
    if millis >= 0 {
        UNIX_EPOCH.checked_add(offset)
    } else {
        UNIX_EPOCH.checked_sub(offset)
    }
}

impl<P> Clone for OtlpAppender<P> {
    fn clone(&self) -> Self {
        Self { registry: self.registry.clone(), config: self.config }
    }
}

impl<P> fmt::Debug for OtlpAppender<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OtlpAppender")
            .field("registry", &self.registry)
            .field("config", &self.config)
            .finish()
    }
}

/// Fire-and-forget service view of the appender. The event is emitted inside
/// `call`, so the returned future is already complete.
impl<P, E> Service<E> for OtlpAppender<P>
where
    P: LoggerProvider,
    E: LoggingEvent,
{
    type Response = ();
    type Error = Infallible;
    type Future = Ready<Result<(), Infallible>>;

    fn poll_ready(&mut self, _cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, event: E) -> Self::Future {
        self.on_event(&event);
        ready(Ok(()))
    }
}
