//! Logging infrastructure for the targetree library.
//!
//! Library code logs through the `log` facade. This module provides the
//! stderr backend used by the command-line tool, with three verbosity
//! levels.

use std::env;
use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicU8, Ordering};

use log::{LevelFilter, Log, Metadata, Record};

/// Environment variable selecting the log level when no flag is given.
pub const LOG_MODE_VAR: &str = "TARGETREE_LOG_MODE";

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use targetree::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all log output.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Errors, warnings, info and debug messages.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use targetree::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The `log` filter matching this level.
    #[must_use]
    pub const fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Off,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Debug,
        }
    }

    const fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Quiet,
            1 => Self::Normal,
            _ => Self::Verbose,
        }
    }
}

/// A stderr backend for the `log` facade.
///
/// The level can be changed after the logger is installed.
///
/// # Examples
///
/// ```
/// use log::Log;
/// use targetree::{LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Normal);
/// assert!(logger.enabled(&log::Metadata::builder().level(log::Level::Warn).build()));
/// assert!(!logger.enabled(&log::Metadata::builder().level(log::Level::Info).build()));
/// ```
pub struct Logger {
    level: AtomicU8,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self {
            level: AtomicU8::new(level as u8),
        }
    }

    /// Returns the current log level.
    #[must_use]
    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::Relaxed))
    }

    /// Changes the log level.
    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::Relaxed);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level().filter()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            let level = record.level().to_string().to_uppercase();
            // stderr going away is not worth a panic
            let _ = writeln!(std::io::stderr(), "{level}: {}", record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Resolve the log level from CLI flags and the environment.
///
/// The priority order is:
/// 1. CLI flags (verbose/quiet)
/// 2. `TARGETREE_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// If both `verbose` and `quiet` are true, `verbose` takes precedence.
#[must_use]
pub fn resolve_level(verbose: bool, quiet: bool) -> LogLevel {
    if verbose {
        return LogLevel::Verbose;
    }
    if quiet {
        return LogLevel::Quiet;
    }

    if let Ok(env_value) = env::var(LOG_MODE_VAR) {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return level;
        }
    }

    LogLevel::Normal
}

static LOGGER: Logger = Logger::new(LogLevel::Normal);

/// Install the stderr logger as the global `log` backend.
///
/// The level is chosen by [`resolve_level`]. Only the first call installs the
/// logger; later calls change the installed logger's level and the `log`
/// maximum level together.
///
/// # Examples
///
/// ```
/// use targetree::{init_logger, LogLevel};
///
/// let level = init_logger(true, false);
/// assert_eq!(level, LogLevel::Verbose);
/// ```
pub fn init_logger(verbose: bool, quiet: bool) -> LogLevel {
    let level = resolve_level(verbose, quiet);
    LOGGER.set_level(level);
    if log::set_logger(&LOGGER).is_err() {
        log::trace!("logger already installed");
    }
    log::set_max_level(level.filter());
    level
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn with_log_mode<F: FnOnce()>(value: Option<&str>, f: F) {
        let saved = env::var(LOG_MODE_VAR).ok();
        match value {
            Some(v) => env::set_var(LOG_MODE_VAR, v),
            None => env::remove_var(LOG_MODE_VAR),
        }
        f();
        match saved {
            Some(v) => env::set_var(LOG_MODE_VAR, v),
            None => env::remove_var(LOG_MODE_VAR),
        }
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Quiet < LogLevel::Normal);
        assert!(LogLevel::Normal < LogLevel::Verbose);
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Quiet), "quiet");
        assert_eq!(format!("{}", LogLevel::Normal), "normal");
        assert_eq!(format!("{}", LogLevel::Verbose), "verbose");
    }

    #[test]
    fn test_log_level_parse() {
        assert_eq!(LogLevel::parse("Normal").unwrap(), LogLevel::Normal);
        assert!(LogLevel::parse("").is_err());
        assert!(LogLevel::parse("trace").is_err());
    }

    #[test]
    fn test_log_level_filter() {
        assert_eq!(LogLevel::Quiet.filter(), LevelFilter::Off);
        assert_eq!(LogLevel::Normal.filter(), LevelFilter::Warn);
        assert_eq!(LogLevel::Verbose.filter(), LevelFilter::Debug);
    }

    #[test]
    fn test_logger_enabled() {
        let quiet = Logger::new(LogLevel::Quiet);
        let error = Metadata::builder().level(log::Level::Error).build();
        assert!(!quiet.enabled(&error));

        let verbose = Logger::new(LogLevel::Verbose);
        let debug = Metadata::builder().level(log::Level::Debug).build();
        let trace = Metadata::builder().level(log::Level::Trace).build();
        assert!(verbose.enabled(&debug));
        assert!(!verbose.enabled(&trace));
        assert_eq!(Logger::default().level(), LogLevel::Normal);
    }

    #[test]
    fn test_logger_set_level() {
        let logger = Logger::new(LogLevel::Quiet);
        let debug = Metadata::builder().level(log::Level::Debug).build();
        assert!(!logger.enabled(&debug));

        logger.set_level(LogLevel::Verbose);
        assert_eq!(logger.level(), LogLevel::Verbose);
        assert!(logger.enabled(&debug));
    }

    #[test]
    #[serial]
    fn test_resolve_level_defaults() {
        with_log_mode(None, || {
            assert_eq!(resolve_level(false, false), LogLevel::Normal);
        });
    }

    #[test]
    #[serial]
    fn test_resolve_level_flags() {
        with_log_mode(None, || {
            assert_eq!(resolve_level(true, false), LogLevel::Verbose);
            assert_eq!(resolve_level(false, true), LogLevel::Quiet);
            assert_eq!(resolve_level(true, true), LogLevel::Verbose);
        });
    }

    #[test]
    #[serial]
    fn test_resolve_level_from_env() {
        with_log_mode(Some("verbose"), || {
            assert_eq!(resolve_level(false, false), LogLevel::Verbose);
        });
        with_log_mode(Some("quiet"), || {
            assert_eq!(resolve_level(false, false), LogLevel::Quiet);
        });
    }

    #[test]
    #[serial]
    fn test_resolve_level_env_invalid_fallback() {
        with_log_mode(Some("invalid"), || {
            assert_eq!(resolve_level(false, false), LogLevel::Normal);
        });
    }

    #[test]
    #[serial]
    fn test_cli_overrides_env() {
        with_log_mode(Some("quiet"), || {
            assert_eq!(resolve_level(true, false), LogLevel::Verbose);
        });
    }

    #[test]
    #[serial]
    fn test_init_logger_twice() {
        with_log_mode(None, || {
            assert_eq!(init_logger(false, true), LogLevel::Quiet);
            assert_eq!(init_logger(false, false), LogLevel::Normal);
            assert_eq!(log::max_level(), LevelFilter::Warn);
        });
    }

    #[test]
    #[serial]
    fn test_init_logger_raises_installed_level() {
        with_log_mode(None, || {
            init_logger(false, true);
            let debug = Metadata::builder().level(log::Level::Debug).build();
            assert!(!log::logger().enabled(&debug));

            assert_eq!(init_logger(true, false), LogLevel::Verbose);
            assert!(log::logger().enabled(&debug));
            assert_eq!(log::max_level(), LevelFilter::Debug);
        });
    }
}
