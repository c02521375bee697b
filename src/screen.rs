//! The total screen area the touchscreens are mapped onto.
use std::{fmt::Display, str::FromStr};

/// An alias type for better code readability.
pub type Pixel = u32;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid screen format or preset: {0}")]
    InvalidFormat(String),
}

/// The resolution of the whole screen, so all monitors together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screen {
    pub width: Pixel,
    pub height: Pixel,
}

impl Screen {
    /// Preset `1`.
    pub const FULL_HD: Self = Self {
        width: 1920,
        height: 1080,
    };

    /// Preset `2`.
    pub const WXGA: Self = Self {
        width: 1280,
        height: 800,
    };

    pub fn from_preset(preset: &str) -> Option<Self> {
        match preset {
            "1" => Some(Self::FULL_HD),
            "2" => Some(Self::WXGA),
            _ => None,
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::FULL_HD
    }
}

impl FromStr for Screen {
    type Err = Error;

    /// Accepts either a preset or `<width>x<height>` with both sides being greater than zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(screen) = Self::from_preset(s) {
            return Ok(screen);
        }

        let invalid = || Error::InvalidFormat(s.to_string());

        let (width, height) = s.split_once('x').ok_or_else(invalid)?;
        let width: Pixel = width.parse().map_err(|_| invalid())?;
        let height: Pixel = height.parse().map_err(|_| invalid())?;

        // a screen without an area would divide by zero later on
        if width == 0 || height == 0 {
            return Err(invalid());
        }

        Ok(Self { width, height })
    }
}

impl Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
