//! Logging setup
//!
//! Installs a `tracing` subscriber with an optional stderr layer and an
//! optional file layer. `RUST_LOG` overrides the configured levels.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::error::{Error, Result};

static LOG_GUARD: Mutex<Option<tracing_appender::non_blocking::WorkerGuard>> =
    Mutex::new(None);

/// Where and how much to log
#[derive(Debug, Clone)]
pub struct LogOptions {
    /// Level name, e.g. `warn` or `debug`
    pub level: String,
    /// Also write to this file, without colours
    pub file: Option<PathBuf>,
    /// Write to stderr; off while the terminal form owns the screen
    pub stderr: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
            stderr: true,
        }
    }
}

/// Install the global subscriber
pub fn init(options: &LogOptions) -> Result<()> {
    let level = parse_level(&options.level).unwrap_or(LevelFilter::WARN);

    let stderr_layer = options.stderr.then(|| {
        let filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();

        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false)
            .with_filter(filter)
    });

    let file_layer = match &options.file {
        Some(path) => {
            let file = File::create(path).map_err(|source| Error::LogFile {
                path: path.clone(),
                source,
            })?;

            let (non_blocking, guard) = tracing_appender::non_blocking(file);

            // Keep the writer thread alive until exit
            if let Ok(mut g) = LOG_GUARD.lock() {
                *g = Some(guard);
            }

            let filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();

            Some(
                fmt::layer()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_file(true)
                    .with_line_number(true)
                    .with_filter(filter),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| Error::General(format!("Failed to install logger: {e}")))
}

/// Flush the file writer; later events are dropped
pub fn shutdown() {
    if let Ok(mut g) = LOG_GUARD.lock() {
        g.take();
    }
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.to_lowercase().as_str() {
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("error"), Some(LevelFilter::ERROR));
        assert_eq!(parse_level("WARN"), Some(LevelFilter::WARN));
        assert_eq!(parse_level("Info"), Some(LevelFilter::INFO));
        assert_eq!(parse_level("debug"), Some(LevelFilter::DEBUG));
        assert_eq!(parse_level("trace"), Some(LevelFilter::TRACE));
        assert_eq!(parse_level("invalid"), None);
        assert_eq!(parse_level(""), None);
    }

    #[test]
    fn test_default_options() {
        let options = LogOptions::default();
        assert_eq!(options.level, "warn");
        assert!(options.file.is_none());
        assert!(options.stderr);
    }

    #[test]
    fn test_unwritable_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let options = LogOptions {
            level: "debug".to_string(),
            file: Some(dir.path().join("missing").join("app.log")),
            stderr: false,
        };

        match init(&options) {
            Err(Error::LogFile { path, .. }) => assert!(path.ends_with("app.log")),
            other => panic!("Expected LogFile error, got {:?}", other),
        }
    }
}
