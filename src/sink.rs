//! The logger sink: an immutable adapter from the leveled front-end
//! contract onto a [`Backend`].
//!
//! Every chaining call returns a fresh [`Sink`]. Only the backend handle is
//! shared between a sink and the sinks derived from it; names and
//! accumulated values are copied, so a derived sink can never change what
//! its parent or siblings log.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::backend::Backend;
use crate::fields::{self, Fields};
use crate::severity::Severity;
use crate::verbosity;

/// Name given to root sinks.
pub const DEFAULT_NAME: &str = "default";

/// Separator placed between name segments by [`LogSink::with_name`].
pub const NAME_SEPARATOR: &str = ".";

/// Field key under which [`LogSink::error`] attaches the error.
pub const ERROR_KEY: &str = "error";

/// The generic leveled, structured logging contract.
pub trait LogSink: Send + Sync {
    /// Returns true if a message at `verbosity` would be emitted.
    fn enabled(&self, verbosity: i32) -> bool;

    /// Logs a non-error message at `verbosity`.
    fn info(&self, verbosity: i32, message: &str, kvs: &[Value]);

    /// Logs an error. Errors are emitted whatever the verbosity.
    fn error(&self, err: &dyn std::error::Error, message: &str, kvs: &[Value]);

    /// Returns a sink that attaches `kvs` to every record.
    fn with_values(&self, kvs: &[Value]) -> Self
    where
        Self: Sized;

    /// Returns a sink whose name has `name` appended as a new segment.
    fn with_name(&self, name: &str) -> Self
    where
        Self: Sized;
}

/// A [`LogSink`] writing to a shared [`Backend`].
#[derive(Clone)]
pub struct Sink {
    backend: Arc<dyn Backend>,
    default_level: Severity,
    name: String,
    values: Vec<(String, Value)>,
}

impl Sink {
    /// Creates a root sink.
    ///
    /// The backend's baseline severity is read once here and becomes the
    /// sink's default level; later backend changes only affect filtering.
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        let default_level = backend.baseline_severity();
        Self {
            backend,
            default_level,
            name: DEFAULT_NAME.to_string(),
            values: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_level(&self) -> Severity {
        self.default_level
    }

    /// Values accumulated through [`LogSink::with_values`], oldest first.
    pub fn values(&self) -> &[(String, Value)] {
        &self.values
    }

    /// Accumulated values overlaid with the call-site arguments.
    fn merged_fields(&self, kvs: &[Value]) -> Fields {
        let mut merged: Fields = self.values.iter().cloned().collect();
        merged.extend(fields::parse_fields(self.backend.as_ref(), &self.name, kvs));
        merged
    }
}

impl LogSink for Sink {
    fn enabled(&self, verbosity: i32) -> bool {
        verbosity::enabled(self.default_level, self.backend.min_severity(), verbosity)
    }

    fn info(&self, verbosity: i32, message: &str, kvs: &[Value]) {
        if !self.enabled(verbosity) {
            return;
        }

        let severity = verbosity::effective_severity(self.default_level, verbosity);
        let fields = self.merged_fields(kvs);
        self.backend.emit(severity, &self.name, message, &fields);
    }

    fn error(&self, err: &dyn std::error::Error, message: &str, kvs: &[Value]) {
        let mut fields = self.merged_fields(kvs);
        fields.insert(ERROR_KEY.to_string(), Value::String(err.to_string()));
        self.backend.emit(Severity::Error, &self.name, message, &fields);
    }

    fn with_values(&self, kvs: &[Value]) -> Self {
        let parsed = fields::parse_fields(self.backend.as_ref(), &self.name, kvs);
        let mut child = self.clone();
        child.values.extend(parsed);
        child
    }

    fn with_name(&self, name: &str) -> Self {
        let mut child = self.clone();
        child.name = format!("{}{}{}", self.name, NAME_SEPARATOR, name);
        child
    }
}

impl PartialEq for Sink {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.backend), Arc::as_ptr(&other.backend))
            && self.default_level == other.default_level
            && self.name == other.name
            && self.values == other.values
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("default_level", &self.default_level)
            .field("name", &self.name)
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}
