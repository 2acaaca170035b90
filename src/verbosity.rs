//! Verbosity to severity mapping.
//!
//! Callers log with a verbosity integer where 0 is the most important. The
//! first [`INFO_VERBOSITY`] steps stay on the sink's default severity; each
//! step beyond that drops one severity rank, bottoming out at `Trace`.

use crate::severity::Severity;

/// Highest verbosity still emitted at the sink's default severity.
pub const INFO_VERBOSITY: i32 = 4;

/// Computes the severity a message at `verbosity` is emitted at.
///
/// The result never exceeds `default_level` and never drops below
/// [`Severity::Trace`], whatever the verbosity.
pub fn effective_severity(default_level: Severity, verbosity: i32) -> Severity {
    let steps = (i64::from(verbosity) - i64::from(INFO_VERBOSITY)).max(0);
    Severity::from_rank(i64::from(default_level.rank()) - steps)
}

/// Returns true if a message at `verbosity` passes `current_min`.
///
/// `current_min` must be the backend's live minimum, read per call.
pub fn enabled(default_level: Severity, current_min: Severity, verbosity: i32) -> bool {
    effective_severity(default_level, verbosity) >= current_min
}
