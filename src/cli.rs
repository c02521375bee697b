//! Contains the Cli implementation of touchcal.
use std::{ffi::OsString, fmt::Display};

use clap::{crate_name, Arg, ArgAction, CommandFactory, FromArgMatches, Parser, ValueEnum};
use tracing::level_filters::LevelFilter;

const TOUCHSCREEN: &str = "touchscreen";

#[derive(Parser, Debug)]
#[command(author, version, about, after_help = concat!(
    "Example:\n",
    "  ", crate_name!(), " --screen 1 \\\n",
    "      --touchscreen 0x1234 0xabcd 0 0 960 1080 \\\n",
    "      --touchscreen 0x5678 0xef01 960 0 960 1080 90",
))]
pub struct Cli {
    /// Total screen resolution (e.g. 1920x1080) or a preset: 1 = 1920x1080 (default), 2 = 1280x800
    #[arg(short, long, value_name = "WxH|1|2", action = ArgAction::Append)]
    screen: Vec<String>,

    /// Filled from the `--touchscreen` occurrences by [`Cli::try_from_args`].
    #[arg(skip)]
    touchscreen: Vec<Vec<String>>,

    #[arg(
        short,
        long,
        default_value_t = LogLevel::Warn,
        help = "The verbosity of the diagnostics on stderr",
        long_help = concat!(
        "*Note*: You can also set the log level through the `RUST_LOG` environment variable and filter the logs.\n",
        "See https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html#directives\n",
        "\n",
        "Example: `RUST_LOG=debug ", crate_name!(), " -s 1 -t 1234 abcd 0 0 1920 1080` - This prints the computed matrices as well."
    ))]
    pub log_level: LogLevel,
}

impl Cli {
    /// The whole command line interface, including `--touchscreen`.
    pub fn full_command() -> clap::Command {
        Self::command().arg(touchscreen_arg())
    }

    pub fn try_from_env() -> Result<Self, clap::Error> {
        Self::try_from_args(std::env::args_os())
    }

    /// Like [`Parser::try_parse_from`] but keeps the values of each `--touchscreen` occurrence
    /// together.
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::full_command().try_get_matches_from(args)?;
        let mut cli = Self::from_arg_matches(&matches)?;

        cli.touchscreen = matches
            .get_occurrences::<String>(TOUCHSCREEN)
            .map(|occurrences| {
                occurrences
                    .map(|values| values.cloned().collect())
                    .collect()
            })
            .unwrap_or_default();

        Ok(cli)
    }

    /// Every value of `--screen` in the order of the command line.
    pub fn screens(&self) -> &[String] {
        &self.screen
    }

    /// The values of each `--touchscreen` occurrence in the order of the command line.
    pub fn touchscreens(&self) -> &[Vec<String>] {
        &self.touchscreen
    }
}

/// Takes up to 7 values per occurrence. The amount is validated later on so a short descriptor
/// gets a proper touchscreen error instead of a generic one.
fn touchscreen_arg() -> Arg {
    Arg::new(TOUCHSCREEN)
        .short('t')
        .long(TOUCHSCREEN)
        .num_args(0..=7)
        .value_names([
            "VENDOR", "PRODUCT", "X_OFFSET", "Y_OFFSET", "WIDTH", "HEIGHT", "ROTATION",
        ])
        .allow_negative_numbers(true)
        .action(ArgAction::Append)
        .help("A touchscreen covering a part of the screen. Can be given multiple times.")
        .long_help(concat!(
            "A touchscreen covering a part of the screen. Can be given multiple times.\n",
            "\n",
            "The vendor and product id are hexadecimal, the offset and size are given in pixels.\n",
            "The rotation is optional and must be 0, 90, 180 or 270."
        ))
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl From<&LogLevel> for LevelFilter {
    fn from(level: &LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::ERROR,
            LogLevel::Warn => Self::WARN,
            LogLevel::Info => Self::INFO,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Trace => Self::TRACE,
            LogLevel::Off => Self::OFF,
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", LevelFilter::from(self))
    }
}
