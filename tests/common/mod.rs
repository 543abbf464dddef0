#![allow(dead_code)]

use logbridge::{OtlpAppender, SinkRegistry};
use opentelemetry_sdk::logs::{InMemoryLogExporter, SdkLogRecord, SdkLoggerProvider};
use std::sync::Arc;

/// A bound appender whose records land in an in-memory exporter.
pub struct Capture {
    pub exporter: InMemoryLogExporter,
    pub registry: Arc<SinkRegistry<SdkLoggerProvider>>,
    pub appender: OtlpAppender<SdkLoggerProvider>,
}

impl Capture {
    pub fn bound() -> Self {
        let capture = Self::unbound();
        capture.registry.bind(capture.provider()).expect("fresh registry accepts a sink");
        capture
    }

    pub fn unbound() -> Self {
        let exporter = InMemoryLogExporter::default();
        let registry = Arc::new(SinkRegistry::new());
        let appender = OtlpAppender::new(registry.clone());
        Self { exporter, registry, appender }
    }

    pub fn provider(&self) -> SdkLoggerProvider {
        SdkLoggerProvider::builder().with_simple_exporter(self.exporter.clone()).build()
    }

    pub fn records(&self) -> Vec<SdkLogRecord> {
        self.exporter
            .get_emitted_logs()
            .expect("in-memory exporter readable")
            .into_iter()
            .map(|log| log.record)
            .collect()
    }

    pub fn scopes(&self) -> Vec<String> {
        self.exporter
            .get_emitted_logs()
            .expect("in-memory exporter readable")
            .iter()
            .map(|log| log.instrumentation.name().to_string())
            .collect()
    }
}
