//! Logger setup
//!
//! The level comes from `RUST_LOG`, falling back to `warn`.

use flexi_logger::{
    Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming, opt_format,
};
use std::path::PathBuf;

const DEFAULT_LEVEL: &str = "warn";

/// Where log records are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Rotating files in the given directory
    Directory(PathBuf),
    /// Standard error
    Stderr,
    /// Discard everything (the TUI owns the terminal)
    Off,
}

/// Start the global logger
///
/// Keep the returned handle alive for the life of the program; dropping it
/// flushes and stops file logging.
///
/// # Errors
///
/// Returns an error if `RUST_LOG` cannot be parsed, the log directory cannot be
/// created, or a logger is already installed.
pub fn init(target: &LogTarget) -> Result<LoggerHandle, FlexiLoggerError> {
    let logger = Logger::try_with_env_or_str(DEFAULT_LEVEL)?.format(opt_format);

    let logger = match target {
        LogTarget::Directory(dir) => logger
            .log_to_file(FileSpec::default().directory(dir).basename("word_scramble"))
            .rotate(
                Criterion::Size(5 * 1024 * 1024),
                Naming::Numbers,
                Cleanup::KeepLogFiles(3),
            ),
        LogTarget::Stderr => logger.log_to_stderr(),
        LogTarget::Off => logger.do_not_log(),
    };

    logger.start()
}
