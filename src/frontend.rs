//! Caller-facing logger handle.

use serde_json::Value;

use crate::sink::LogSink;

/// A logger value pairing a sink with a verbosity offset.
///
/// `Logger` is what application code passes around; the sink does the
/// actual filtering and emission.
#[derive(Debug, Clone, PartialEq)]
pub struct Logger<S> {
    sink: S,
    level: i32,
}

impl<S: LogSink> Logger<S> {
    pub fn new(sink: S) -> Self {
        Self { sink, level: 0 }
    }

    /// Returns a logger whose messages are `level` steps more verbose.
    ///
    /// Negative levels are treated as 0.
    pub fn v(&self, level: i32) -> Self
    where
        S: Clone,
    {
        Self {
            sink: self.sink.clone(),
            level: self.level.saturating_add(level.max(0)),
        }
    }

    /// Verbosity this logger's `info` calls are made at.
    pub fn verbosity(&self) -> i32 {
        self.level
    }

    pub fn enabled(&self) -> bool {
        self.sink.enabled(self.level)
    }

    pub fn info(&self, message: &str, kvs: &[Value]) {
        if self.enabled() {
            self.sink.info(self.level, message, kvs);
        }
    }

    pub fn error(&self, err: &dyn std::error::Error, message: &str, kvs: &[Value]) {
        self.sink.error(err, message, kvs);
    }

    pub fn with_values(&self, kvs: &[Value]) -> Self {
        Self {
            sink: self.sink.with_values(kvs),
            level: self.level,
        }
    }

    pub fn with_name(&self, name: &str) -> Self {
        Self {
            sink: self.sink.with_name(name),
            level: self.level,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
