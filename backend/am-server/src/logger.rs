use crate::error::{Result as ServerErrorResult, ServerError};

use am_config::LogLevel;

use std::fmt::Display;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{LevelFilter, Record, info};

/// Where log lines go
enum Sink {
    File(std::fs::File),
    ColoredStdout(ColoredLevelConfig),
    Stdout,
}

/// Install the global fern logger.
///
/// `log_file` set means file output (colors are never written to files);
/// otherwise stdout, colored when `colored` is set.
pub fn initialize(
    log_level: LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = log_level.0;

    let sink = match log_file {
        Some(ref path) => Sink::File(
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| ServerError::Logger {
                    message: format!("Failed to open log file {}: {}", path.display(), e),
                })?,
        ),
        None if colored => Sink::ColoredStdout(
            ColoredLevelConfig::new()
                .trace(Color::Magenta)
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red),
        ),
        None => Sink::Stdout,
    };

    let dispatch = Dispatch::new()
        .level(level_filter)
        // sqlx logs every statement at info
        .level_for("sqlx", LevelFilter::Warn);

    let dispatch = match sink {
        Sink::File(file) => dispatch
            .format(|out, message, record| write_line(out, record.level(), message, record))
            .chain(file),
        Sink::ColoredStdout(colors) => dispatch
            .format(move |out, message, record| {
                write_line(out, colors.color(record.level()), message, record)
            })
            .chain(std::io::stdout()),
        Sink::Stdout => dispatch
            .format(|out, message, record| write_line(out, record.level(), message, record))
            .chain(std::io::stdout()),
    };

    dispatch.apply().map_err(|e| ServerError::Logger {
        message: format!("Failed to initialize logger: {e}"),
    })?;

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={}, stdout", level_filter),
    }

    Ok(())
}

/// `[rfc3339 - LEVEL] message [file:line]`
fn write_line(
    out: FormatCallback<'_>,
    level: impl Display,
    message: &std::fmt::Arguments<'_>,
    record: &Record<'_>,
) {
    out.finish(format_args!(
        "[{} - {}] {} [{}:{}]",
        humantime::format_rfc3339(SystemTime::now()),
        level,
        message,
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0),
    ))
}
