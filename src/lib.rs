#![forbid(unsafe_code)]
#![deny(warnings)]
#![cfg_attr(not(test), deny(clippy::all))]

//! # logbridge
//!
//! Forward application log events into an OpenTelemetry logs pipeline.
//!
//! ## Features
//!
//! - **Write-once sink binding** shared by every appender through an injectable registry
//! - **Exact severity mapping** from ordered host levels to OpenTelemetry severities
//! - **Ambient trace context** copied from the span active at dispatch time
//! - **Failure metadata** recorded as a `throwable.message` attribute
//! - **No buffering**: events that arrive before a sink is bound are dropped
//!
//! ## Quick Start
//!
//! ```rust
//! use logbridge::{Event, Level, OtlpAppender, SinkRegistry};
//! use opentelemetry::logs::NoopLoggerProvider;
//! use std::sync::Arc;
//!
//! let registry = Arc::new(SinkRegistry::new());
//! let appender = OtlpAppender::new(registry.clone());
//!
//! // Dropped: nothing bound yet.
//! appender.on_event(&Event::new("svc.worker", 1_700_000_000_000, Level::INFO, "booting"));
//!
//! registry.bind(NoopLoggerProvider::new()).expect("bind once at startup");
//! appender.on_event(&Event::new("svc.worker", 1_700_000_000_000, Level::INFO, "started"));
//! ```

pub mod appender;
pub mod config;
pub mod error;
pub mod event;
pub mod level;
pub mod registry;

// Re-exports
pub use appender::{OtlpAppender, THROWABLE_MESSAGE};
pub use config::AppenderConfig;
pub use error::AlreadyBoundError;
pub use event::{CodeLocation, Event, LoggingEvent, Throwable, ThrowableProxy};
pub use level::{map_severity, Level};
pub use registry::SinkRegistry;
