//! Diagnostic logging for the staging binaries.
//!
//! The default filter is `warn`, so a successful invocation prints nothing.

use fern::{Dispatch, FormatCallback};
use log::{Level, LevelFilter, Record};
use std::fmt;
use std::io::stderr;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

/// Provides helpful logging args for clap clis
#[derive(Debug, clap::Args)]
#[clap(next_help_heading = "LOGGING")]
pub struct LoggingArgs {
    /// Only display error level log messages
    #[clap(short, long)]
    #[clap(conflicts_with_all(&["warn", "info", "debug", "trace"]))]
    #[clap(display_order = 1)]
    error: bool,

    /// Display warning and above level log messages (the default)
    #[clap(short, long)]
    #[clap(conflicts_with_all(&["error", "info", "debug", "trace"]))]
    #[clap(display_order = 2)]
    warn: bool,

    /// Display info and above level log messages
    #[clap(short, long)]
    #[clap(conflicts_with_all(&["error", "warn", "debug", "trace"]))]
    #[clap(display_order = 3)]
    info: bool,

    /// Display debug and above level log messages
    #[clap(long)]
    #[clap(conflicts_with_all(&["error", "warn", "info", "trace"]))]
    #[clap(display_order = 4)]
    debug: bool,

    /// Display trace and above level log messages
    #[clap(long)]
    #[clap(conflicts_with_all(&["error", "warn", "info", "debug"]))]
    #[clap(display_order = 5)]
    trace: bool,
}

pub enum OutputType {
    Basic,
    TimeOnly,
}

impl LoggingArgs {
    /// Get the level filter from this args
    fn config_from_settings(&self) -> (LevelFilter, OutputType) {
        if self.error {
            (LevelFilter::Error, OutputType::Basic)
        } else if self.warn {
            (LevelFilter::Warn, OutputType::Basic)
        } else if self.info {
            (LevelFilter::Info, OutputType::Basic)
        } else if self.debug {
            (LevelFilter::Debug, OutputType::TimeOnly)
        } else if self.trace {
            (LevelFilter::Trace, OutputType::TimeOnly)
        } else {
            (LevelFilter::Warn, OutputType::Basic)
        }
    }

    pub fn init_logger(&self) {
        let (filter, output_mode) = self.config_from_settings();

        Dispatch::new()
            .format(Self::message_format(output_mode))
            .level(filter)
            .chain(stderr())
            .apply()
            .expect("couldn't set as global logger")
    }

    fn message_format(
        output_mode: OutputType,
    ) -> impl Fn(FormatCallback, &fmt::Arguments, &log::Record) + Sync + Send + 'static {
        move |out, message, record| {
            out.finish(format_args!(
                "{} {}",
                Self::format_prefix(&output_mode, record),
                message
            ))
        }
    }

    fn format_prefix(output_mode: &OutputType, record: &Record) -> String {
        use colored::Colorize;
        let mut level_string = record.level().to_string().to_lowercase();
        static TIME_FORMAT: &[FormatItem] =
            format_description!("[hour]:[minute]:[second].[subsecond digits:4]");

        level_string = match record.level() {
            Level::Error => level_string.red().to_string(),
            Level::Warn => level_string.yellow().to_string(),
            Level::Info => level_string.green().to_string(),
            Level::Debug => level_string.blue().to_string(),
            Level::Trace => level_string.bright_black().to_string(),
        };
        match output_mode {
            OutputType::Basic => {
                format!("{}:", level_string)
            }
            OutputType::TimeOnly => {
                let time = OffsetDateTime::now_local().unwrap_or(OffsetDateTime::now_utc());
                let stamp = time
                    .format(TIME_FORMAT)
                    .unwrap_or_else(|_| String::from("??:??:??"));
                format!("[{}] {}:", stamp, level_string)
            }
        }
    }
}
