// textropy/src/logger.rs
//! Logger bootstrap for the CLI.
//!
//! Logging is a presentation concern: the core library emits no log records,
//! so the filter configured here only governs the CLI's own diagnostics.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger exactly once.
///
/// An explicit `level` overrides the environment; `None` defers to
/// `RUST_LOG` with a default of `warn`. Safe to call repeatedly (tests and
/// the binary entry point both go through here).
pub fn init_logger(level: Option<log::LevelFilter>) {
    INIT.call_once(|| {
        let mut builder =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
        if let Some(level) = level {
            builder.filter_level(level);
        }
        builder.format_timestamp(None);
        let _ = builder.try_init();
    });
}
