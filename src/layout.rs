//! Turns the raw command line values into a validated [`Layout`].
use tracing::{debug, warn};

use crate::{cli::Cli, screen::Screen, touchscreen::Touchscreen, Error};

/// The screen and every touchscreen which is placed on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub screen: Screen,
    /// In the order of the command line.
    pub touchscreens: Vec<Touchscreen>,
}

impl Layout {
    /// Validates every given screen and touchscreen descriptor.
    ///
    /// If `--screen` has been given multiple times, the last one wins. Each of them has to be valid
    /// though. If it hasn't been given at all, [`Screen::default`] is used.
    pub fn parse<S, T>(screens: &[S], touchscreens: &[T]) -> Result<Self, Error>
    where
        S: AsRef<str>,
        T: AsRef<[String]>,
    {
        let mut screen = None;
        for value in screens {
            screen = Some(value.as_ref().parse::<Screen>()?);
        }

        let touchscreens = touchscreens
            .iter()
            .enumerate()
            .map(|(index, args)| {
                let args: &[String] = args.as_ref();
                Touchscreen::from_args(index, args)
            })
            .collect::<Result<Vec<_>, _>>()?;

        // only fall back once everything else is known to be valid
        let screen = screen.unwrap_or_else(|| {
            let screen = Screen::default();
            warn!("No screen size provided, defaulting to {}", screen);
            screen
        });
        debug!("Using a screen of {}", screen);

        Ok(Self {
            screen,
            touchscreens,
        })
    }
}

impl TryFrom<&Cli> for Layout {
    type Error = Error;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        Self::parse(cli.screens(), cli.touchscreens())
    }
}
