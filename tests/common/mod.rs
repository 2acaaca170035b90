//! Shared test utilities for integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex};

use logr_adapter::{Backend, Fields, Severity, Sink};

/// A record captured by [`RecordingBackend`].
#[derive(Debug, Clone, PartialEq)]
pub struct Emitted {
    pub severity: Severity,
    pub name: String,
    pub message: String,
    pub fields: Fields,
}

/// Backend that stores every record and has an adjustable minimum severity.
#[derive(Debug)]
pub struct RecordingBackend {
    min: AtomicU8,
    records: Mutex<Vec<Emitted>>,
}

impl RecordingBackend {
    pub fn new(min: Severity) -> Arc<Self> {
        Arc::new(Self {
            min: AtomicU8::new(min.rank()),
            records: Mutex::new(Vec::new()),
        })
    }

    pub fn set_min(&self, min: Severity) {
        self.min.store(min.rank(), Ordering::SeqCst);
    }

    pub fn records(&self) -> Vec<Emitted> {
        self.records.lock().unwrap().clone()
    }

    pub fn last(&self) -> Emitted {
        self.records()
            .pop()
            .expect("Backend should have received a record")
    }
}

impl Backend for RecordingBackend {
    fn emit(&self, severity: Severity, name: &str, message: &str, fields: &Fields) {
        self.records.lock().unwrap().push(Emitted {
            severity,
            name: name.to_string(),
            message: message.to_string(),
            fields: fields.clone(),
        });
    }

    fn min_severity(&self) -> Severity {
        Severity::from_rank(i64::from(self.min.load(Ordering::SeqCst)))
    }
}

/// Creates a root sink over a fresh recording backend.
pub fn recording_sink(min: Severity) -> (Arc<RecordingBackend>, Sink) {
    let backend = RecordingBackend::new(min);
    let sink = Sink::new(backend.clone());
    (backend, sink)
}

/// Error type for exercising `LogSink::error`.
#[derive(Debug)]
pub struct TestError(pub &'static str);

impl std::fmt::Display for TestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

impl std::error::Error for TestError {}
