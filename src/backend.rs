//! Backend capability and the `log` facade implementation.

use log::kv::{self, Key, Source, VisitSource};

use crate::fields::Fields;
use crate::severity::Severity;

/// The capabilities a sink needs from its logging backend.
///
/// Implementations must tolerate concurrent callers; `min_severity` may
/// change at any time and is re-read on every check.
pub trait Backend: Send + Sync {
    /// Emits `message` at `severity`, tagged with `name`, carrying `fields`.
    fn emit(&self, severity: Severity, name: &str, message: &str, fields: &Fields);

    /// Returns the currently configured minimum severity.
    fn min_severity(&self) -> Severity;

    /// Severity new sinks adopt as their default level.
    fn baseline_severity(&self) -> Severity {
        self.min_severity()
    }
}

/// Backend writing through the global `log` facade.
///
/// The logger name becomes the record target and fields are attached as
/// structured key/values.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogBackend;

impl Backend for LogBackend {
    fn emit(&self, severity: Severity, name: &str, message: &str, fields: &Fields) {
        let level = severity.as_level();
        if level > log::max_level() {
            return;
        }

        let source = FieldSource(fields);
        log::logger().log(
            &log::Record::builder()
                .args(format_args!("{}", message))
                .level(level)
                .target(name)
                .key_values(&source)
                .build(),
        );
    }

    fn min_severity(&self) -> Severity {
        Severity::from_filter(log::max_level())
    }

    // `Off` is also the facade's state before any logger is installed.
    fn baseline_severity(&self) -> Severity {
        match log::max_level() {
            log::LevelFilter::Off => Severity::Info,
            filter => Severity::from_filter(filter),
        }
    }
}

/// Exposes [`Fields`] to `log` as key/value pairs.
struct FieldSource<'a>(&'a Fields);

impl Source for FieldSource<'_> {
    fn visit<'kvs>(&'kvs self, visitor: &mut dyn VisitSource<'kvs>) -> Result<(), kv::Error> {
        for (key, value) in self.0 {
            let value = match value {
                serde_json::Value::String(s) => kv::Value::from(s.as_str()),
                other => kv::Value::from_display(other),
            };
            visitor.visit_pair(Key::from_str(key), value)?;
        }
        Ok(())
    }

    fn count(&self) -> usize {
        self.0.len()
    }
}
