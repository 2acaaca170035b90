//! Leveled, structured logger adapter.
//!
//! This library maps caller verbosity onto backend severities and builds
//! derived loggers by copying, never mutating, their parent.

pub mod backend;
pub mod error;
pub mod fields;
pub mod frontend;
pub mod global;
pub mod logger;
pub mod severity;
pub mod sink;
pub mod verbosity;

pub use backend::{Backend, LogBackend};
pub use error::{Error, Result};
pub use fields::{Fields, parse_fields};
pub use frontend::Logger;
pub use serde_json::Value;
pub use severity::Severity;
pub use sink::{LogSink, Sink};
