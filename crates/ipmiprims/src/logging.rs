use std::io::IsTerminal;

use clap::ValueEnum;
use tracing::level_filters::LevelFilter;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Stderr logging settings resolved from the command line.
#[derive(Copy, Clone, Debug)]
pub struct LogSettings {
    pub format: LogFormat,
    pub level: LogLevel,
    /// Colorize text output. JSON output is never colorized.
    pub ansi: bool,
}

impl LogSettings {
    pub fn new(format: LogFormat, level: LogLevel) -> Self {
        Self {
            format,
            level,
            ansi: format == LogFormat::Text && std::io::stderr().is_terminal(),
        }
    }
}

/// Install the stderr subscriber. Library crates only emit events.
///
/// A second call is a no-op.
pub fn init_logging(settings: LogSettings) {
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(LevelFilter::from(settings.level))
        .with_target(false);

    let _ = match settings.format {
        LogFormat::Text => builder.with_ansi(settings.ansi).try_init(),
        LogFormat::Json => builder.with_ansi(false).json().try_init(),
    };
}
