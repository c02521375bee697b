//! Welcome to the code-documentation of touchcal!
//!
//! touchcal generates udev rules which set the `LIBINPUT_CALIBRATION_MATRIX` of touchscreens
//! which only cover a part of the (whole) screen, for example a touchscreen monitor placed next
//! to another monitor.
//!
//! The command line is parsed into a [`layout::Layout`] first. Only if every value is valid, a
//! [`rule::Rule`] is printed for each touchscreen.

use std::io::IsTerminal;

use anyhow::Context;
use cli::{Cli, LogLevel};
use layout::Layout;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod layout;
pub mod matrix;
pub mod rule;
pub mod screen;
pub mod touchscreen;

/// An enum error which contains all possible error sources while validating the command line.
///
/// # Convention
/// Just click on the `Error` value of each error-enum-value to get more information about them.
///
/// ## Example
/// If you want to understand what [`Error::Touchscreen`] catches, then just click
/// on its `Error` type and you should get to [`touchscreen::Error`] where a more detailed
/// description waits for you!
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Screen(#[from] screen::Error),

    #[error(transparent)]
    Touchscreen(#[from] touchscreen::Error),
}

/// Logs everything to stderr since stdout is reserved for the rules.
pub fn init_logging(level: &LogLevel) {
    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(LevelFilter::from(level))
        .without_time()
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false);

    if std::env::var_os("RUST_LOG").is_some() {
        subscriber_builder
            .with_env_filter(EnvFilter::from_default_env())
            .init();
    } else {
        subscriber_builder.init();
    }

    tracing::debug!("Logger initialised");
}

#[tracing::instrument(skip_all)]
pub fn start(cli: &Cli) -> anyhow::Result<()> {
    let layout = Layout::try_from(cli)?;

    let mut stdout = std::io::stdout().lock();
    rule::write_rules(&mut stdout, &layout).context("Couldn't write the udev rules to stdout")?;

    Ok(())
}
