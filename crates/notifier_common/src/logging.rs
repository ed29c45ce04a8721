//! Logging utilities for the notifier client.
//!
//! Every crate logs through the `tracing` macros. The host binary calls one of the
//! init functions here once at start-up. Because the terminal client draws its
//! screens on stdout, [`init_file`] is the normal choice there; [`init_with_level`]
//! writes to stderr and is used when no log directory is configured.

use std::path::Path;
use tracing::{info, warn, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber with a specific log level, writing to stderr.
pub fn init_with_level(level: Level) {
    let filter = build_filter(level);

    // try_init: a global subscriber may already be installed (tests, embedding)
    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Initialize the tracing subscriber writing to a daily rolling file.
///
/// The returned guard must be kept alive for as long as logs should be flushed;
/// dropping it stops the background writer.
///
/// # Arguments
///
/// * `directory` - Directory the log files are created in.
/// * `file_prefix` - File name prefix; the date is appended by the appender.
/// * `level` - The minimum log level to record.
pub fn init_file(directory: &Path, file_prefix: &str, level: Level) -> WorkerGuard {
    let appender = tracing_appender::rolling::daily(directory, file_prefix);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let result = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true),
        )
        .with(build_filter(level))
        .try_init();

    if result.is_ok() {
        info!(
            "Logging to {}/{} at level: {}",
            directory.display(),
            file_prefix,
            level
        );
    }
    guard
}

/// Parses a configured level name, falling back to INFO on anything unknown.
pub fn parse_level(name: &str) -> Level {
    name.trim().parse().unwrap_or_else(|_| {
        warn!("Unknown log level '{}', using info", name);
        Level::INFO
    })
}

fn build_filter(level: Level) -> EnvFilter {
    // RUST_LOG wins when set; otherwise everything at `level`
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level(" WARN "), Level::WARN);
        assert_eq!(parse_level("chatty"), Level::INFO);
    }
}
