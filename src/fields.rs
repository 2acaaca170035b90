//! Key/value argument parsing.
//!
//! Logging calls take a flat, alternating list of keys and values. Parsing
//! is best effort and never fails:
//!
//! - non-string keys are stringified and reported through the backend
//! - a trailing key without a value is dropped
//! - when a key repeats, the last value wins

use std::collections::BTreeMap;

use serde_json::Value;

use crate::backend::Backend;
use crate::severity::Severity;

/// Structured fields attached to a log record.
pub type Fields = BTreeMap<String, Value>;

/// Builds a key/value argument array from `Into<Value>` expressions.
///
/// ```
/// use logr_adapter::kvs;
///
/// let args = kvs!["user", "alice", "attempt", 3];
/// assert_eq!(args.len(), 4);
/// ```
#[macro_export]
macro_rules! kvs {
    () => {
        [] as [$crate::Value; 0]
    };
    ($($arg:expr),+ $(,)?) => {
        [$($crate::Value::from($arg)),+]
    };
}

/// Parses alternating keys and values into a field map.
///
/// `name` tags the diagnostic emitted for each non-string key.
pub fn parse_fields(backend: &dyn Backend, name: &str, args: &[Value]) -> Fields {
    let mut fields = Fields::new();

    for pair in args.chunks_exact(2) {
        let key = match &pair[0] {
            Value::String(key) => key.clone(),
            other => {
                let key = other.to_string();
                backend.emit(
                    Severity::Warn,
                    name,
                    &format!("non-string logging key {} stringified", key),
                    &Fields::new(),
                );
                key
            }
        };
        fields.insert(key, pair[1].clone());
    }

    fields
}
