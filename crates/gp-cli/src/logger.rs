use crate::error::{CliError, Result as CliResult};

use std::fmt::{self, Display};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use gp_config::LogLevel;
use log::{Record, debug};

/// Destination for log lines. Stdout is never a sink; it carries the JSON
/// result of the command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    File(PathBuf),
    Stderr { colored: bool },
}

impl LogSink {
    /// A configured file takes precedence. Colour only applies to stderr.
    pub fn select(file: Option<PathBuf>, colored: bool) -> Self {
        match file {
            Some(path) => Self::File(path),
            None => Self::Stderr { colored },
        }
    }
}

/// `[date - LEVEL] message [file:line]`
pub fn format_line(
    at: SystemTime,
    level: impl Display,
    message: impl Display,
    file: Option<&str>,
    line: Option<u32>,
) -> String {
    format!(
        "[{} - {level}] {message} [{}:{}]",
        humantime::format_rfc3339(at),
        file.unwrap_or("unknown"),
        line.unwrap_or(0),
    )
}

fn plain(out: FormatCallback<'_>, message: &fmt::Arguments<'_>, record: &Record<'_>) {
    out.finish(format_args!(
        "{}",
        format_line(
            SystemTime::now(),
            record.level(),
            message,
            record.file(),
            record.line()
        )
    ))
}

/// Installs the global logger. Can only succeed once per process.
pub fn initialize(level: LogLevel, sink: LogSink) -> CliResult<()> {
    let base = Dispatch::new().level(level.0);

    let dispatch = match &sink {
        LogSink::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    CliError::logger(format!("Failed to open log file {}: {e}", path.display()))
                })?;
            base.format(plain).chain(file)
        }
        LogSink::Stderr { colored: true } => {
            let colors = ColoredLevelConfig::new()
                .info(Color::Green)
                .debug(Color::Cyan);
            base.format(move |out, message, record| {
                out.finish(format_args!(
                    "{}",
                    format_line(
                        SystemTime::now(),
                        colors.color(record.level()),
                        message,
                        record.file(),
                        record.line()
                    )
                ))
            })
            .chain(std::io::stderr())
        }
        LogSink::Stderr { colored: false } => base.format(plain).chain(std::io::stderr()),
    };

    dispatch
        .apply()
        .map_err(|e| CliError::logger(format!("Failed to initialize logger: {e}")))?;

    debug!("Logging at {} to {sink:?}", level.0);
    Ok(())
}
