//! Logging and tracing initialization.
//!
//! Log output goes to stderr by default; when a log directory is
//! configured, JSONL logs are written there through a non-blocking
//! appender instead, so the watch loop never stalls on log IO.

use camino::Utf8Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Resolve the effective env filter from flags and config.
///
/// `RUST_LOG` wins when set; otherwise `--quiet` forces `error`,
/// `-v`/`-vv` raise to `debug`/`trace`, and the configured level is the
/// fallback.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Initialize the global subscriber.
///
/// Returns the appender guard when file logging is active; dropping it
/// flushes buffered log lines, so hold it for the process lifetime.
pub fn init(log_dir: Option<&Utf8Path>, filter: EnvFilter) -> anyhow::Result<Option<WorkerGuard>> {
    match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir.as_std_path())?;
            let appender = tracing_appender::rolling::daily(dir.as_std_path(), "wordwatch.jsonl");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(writer)
                        .with_ansi(false),
                )
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(false),
                )
                .init();
            Ok(None)
        }
    }
}
