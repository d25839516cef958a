#![deny(missing_docs)]
//! Logging macros shared by the downloader crates.
//!
//! The `engine_*` macros forward to the `log` facade, so whichever backend the
//! binary installs receives them. Tests install a terminal logger through
//! [`initialize_for_tests`].

/// Logs a trace-level message.
#[macro_export]
macro_rules! engine_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs a debug-level message, e.g. a single fetch starting or finishing.
#[macro_export]
macro_rules! engine_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message, e.g. a batch starting or finishing.
#[macro_export]
macro_rules! engine_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a warn-level message.
#[macro_export]
macro_rules! engine_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message, e.g. a batch aborted by a failed fetch.
#[macro_export]
macro_rules! engine_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Level used by [`initialize_for_tests`]: debug in debug builds, info otherwise.
pub fn test_level() -> log::LevelFilter {
    if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

/// Installs a terminal logger for tests.
///
/// Safe to call from several test binaries or threads; only the first call
/// installs a logger.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let _ = CombinedLogger::init(vec![TermLogger::new(
        test_level(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_initialization_is_harmless() {
        initialize_for_tests();
        initialize_for_tests();
        engine_info!("logger installed at {:?}", test_level());
        assert!(log::max_level() >= log::LevelFilter::Info);
    }
}
