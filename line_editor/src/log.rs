// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logging setup.
//!
//! The editor owns the terminal while it runs (raw mode, cursor movement on every key),
//! so log output can not go to stdout or stderr without corrupting the edit row. Logs go
//! to a file instead, through a non-blocking writer so that a slow disk never stalls a
//! keystroke.
//!
//! ```no_run
//! use r3bl_line_editor::{TracingConfig, try_initialize_logging};
//! use tracing_core::LevelFilter;
//!
//! # fn sample() -> miette::Result<()> {
//! // Hold on to the guard; dropping it flushes and stops the writer.
//! let _guard = try_initialize_logging(TracingConfig {
//!     level_filter: LevelFilter::DEBUG,
//!     log_file: Some("line_editor.log".into()),
//! })?;
//! # Ok(())
//! # }
//! ```

use miette::{IntoDiagnostic, miette};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    /// [None] turns logging off.
    pub log_file: Option<PathBuf>,
}

impl Default for TracingConfig {
    fn default() -> Self { Self { level_filter: LevelFilter::OFF, log_file: None } }
}

/// Install a global subscriber that writes to [`TracingConfig::log_file`].
///
/// Returns [None] when logging is off. Otherwise returns the guard of the background
/// writer; keep it alive for as long as logs should be written.
///
/// # Errors
///
/// Returns an error if the log file can not be opened, or a global subscriber is
/// already installed.
pub fn try_initialize_logging(
    tracing_config: TracingConfig,
) -> miette::Result<Option<WorkerGuard>> {
    let Some(log_file) = tracing_config.log_file.as_deref() else {
        return Ok(None);
    };
    if tracing_config.level_filter == LevelFilter::OFF {
        return Ok(None);
    }

    let (layer, guard) = try_create_file_layer(log_file, tracing_config.level_filter)?;
    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .into_diagnostic()?;

    // % is Display, ? is Debug.
    tracing::info!(
        message = "try_initialize_logging -> ready",
        log_file = %log_file.display(),
        level = %tracing_config.level_filter
    );

    Ok(Some(guard))
}

/// A plain text fmt layer writing to `log_file` (appending; the file is created if
/// needed) through a non-blocking writer.
///
/// # Errors
///
/// Returns an error if `log_file` has no file name, or can not be opened.
pub fn try_create_file_layer<S>(
    log_file: &Path,
    level_filter: LevelFilter,
) -> miette::Result<(Box<DynLayer<S>>, WorkerGuard)>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let file_name = log_file
        .file_name()
        .ok_or_else(|| miette!("log file path has no file name: {}", log_file.display()))?;
    let folder = match log_file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let file_appender = tracing_appender::rolling::RollingFileAppender::builder()
        .rotation(tracing_appender::rolling::Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(folder)
        .into_diagnostic()?;
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(writer)
        .with_filter(level_filter);

    Ok((Box::new(layer), guard))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_logging_off_installs_nothing() {
        assert!(try_initialize_logging(TracingConfig::default()).unwrap().is_none());

        let no_level = TracingConfig {
            level_filter: LevelFilter::OFF,
            log_file: Some("unused.log".into()),
        };
        assert!(try_initialize_logging(no_level).unwrap().is_none());
    }

    #[test]
    fn test_file_layer_writes_and_filters() {
        let dir = tempdir().unwrap();
        let log_file = dir.path().join("editor.log");

        let (layer, guard) = try_create_file_layer(&log_file, LevelFilter::INFO).unwrap();
        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(message = "kept", answer = 42);
            tracing::debug!(message = "dropped");
        });
        // Flushes the background writer.
        drop(guard);

        let content = fs::read_to_string(&log_file).unwrap();
        assert!(content.contains("kept"));
        assert!(content.contains("answer=42"));
        assert!(!content.contains("dropped"));
    }

    #[test]
    fn test_path_without_file_name() {
        let result = try_create_file_layer::<tracing_subscriber::Registry>(
            Path::new("/"),
            LevelFilter::INFO,
        );
        assert!(result.is_err());
    }
}
