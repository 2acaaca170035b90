//! Process-wide default sink.
//!
//! Nothing is installed implicitly. The expected ordering is:
//!
//! 1. install a `log` logger (for example with [`crate::logger::init`])
//! 2. [`set_default`] with the root sink
//! 3. [`clear_default`] during shutdown, before the backend goes away
//!
//! Until a sink is installed, [`default_sink`] hands out a fallback bound
//! to [`LogBackend`], so early callers can still log.

use std::sync::{Arc, PoisonError, RwLock};

use crate::backend::LogBackend;
use crate::sink::Sink;

static DEFAULT: RwLock<Option<Sink>> = RwLock::new(None);

/// Installs `sink` as the process default, returning the one it replaces.
pub fn set_default(sink: Sink) -> Option<Sink> {
    DEFAULT
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .replace(sink)
}

/// Removes the process default, returning it.
pub fn clear_default() -> Option<Sink> {
    DEFAULT.write().unwrap_or_else(PoisonError::into_inner).take()
}

/// Returns true if a default sink has been installed.
pub fn is_set() -> bool {
    DEFAULT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .is_some()
}

/// Returns the installed default sink, or a fallback over [`LogBackend`].
pub fn default_sink() -> Sink {
    let installed = DEFAULT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();
    installed.unwrap_or_else(|| Sink::new(Arc::new(LogBackend)))
}
