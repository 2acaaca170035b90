//! Tests for the `log` facade backend and bootstrap.
//!
//! The facade's logger and max level are process-wide, so everything runs
//! inside a single test.

use std::sync::Arc;

use logr_adapter::logger::{self, LoggerConfig};
use logr_adapter::{Backend, Error, LogBackend, LogSink, Severity, Sink, kvs};

#[test]
fn test_log_backend_and_init() {
    let config: LoggerConfig =
        serde_json::from_value(serde_json::json!({ "level": "info", "name": "app" })).unwrap();
    assert_eq!(config.level_filter(), log::LevelFilter::Info);

    let root = logger::init(&config).expect("First init should succeed");
    assert_eq!(root.name(), "default.app");
    assert_eq!(root.default_level(), Severity::Info);
    assert!(root.enabled(1));
    assert!(root.enabled(3));
    assert!(!root.enabled(6));

    let second = logger::init(&LoggerConfig::default());
    assert!(matches!(second, Err(Error::SetLogger(_))));

    // Emission goes through env_logger without panicking.
    root.with_values(&kvs!["k", "v"]).info(0, "hello", &kvs!["n", 1]);
    LogBackend.emit(Severity::Panic, "app", "mapped to error", &Default::default());

    // Live re-read of the facade's max level.
    log::set_max_level(log::LevelFilter::Warn);
    assert_eq!(LogBackend.min_severity(), Severity::Warn);
    assert!(!root.enabled(0));

    log::set_max_level(log::LevelFilter::Trace);
    let fresh = Sink::new(Arc::new(LogBackend));
    assert_eq!(fresh.default_level(), Severity::Trace);
    assert!(fresh.enabled(6));

    log::set_max_level(log::LevelFilter::Off);
    assert_eq!(LogBackend.min_severity(), Severity::Panic);
    assert_eq!(LogBackend.baseline_severity(), Severity::Info);
    fresh.info(1000, "", &[]);
}

#[test]
fn test_config_level_filter() {
    let quiet = LoggerConfig {
        quiet: true,
        verbose: 2,
        ..Default::default()
    };
    assert_eq!(quiet.level_filter(), log::LevelFilter::Error);

    let verbose = |verbose| LoggerConfig {
        verbose,
        ..Default::default()
    };
    assert_eq!(verbose(0).level_filter(), log::LevelFilter::Warn);
    assert_eq!(verbose(1).level_filter(), log::LevelFilter::Info);
    assert_eq!(verbose(5).level_filter(), log::LevelFilter::Debug);

    let explicit = LoggerConfig {
        quiet: true,
        level: Some(Severity::Trace),
        ..Default::default()
    };
    assert_eq!(explicit.level_filter(), log::LevelFilter::Trace);
}
