//! Parsing of the touchscreen descriptors given through `--touchscreen`.
use std::{fmt::Display, str::FromStr};

use tracing::debug;

use crate::screen::Pixel;

/// A general enum with possible errors as values which can occur while parsing a touchscreen
/// descriptor.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Not enough touchscreen arguments for {name}: expected at least 6 but got {got}")]
    NotEnoughArgs { name: String, got: usize },

    #[error("Too many touchscreen arguments for {name}: expected at most 7 but got {got}")]
    TooManyArgs { name: String, got: usize },

    #[error("Invalid rotation value: {0} (must be 0, 90, 180, or 270)")]
    InvalidRotation(String),

    #[error("Unexpected argument after the height of {name}: '{value}'")]
    UnexpectedArg { name: String, value: String },

    #[error("Invalid {field} for {name}: '{value}'")]
    InvalidParameter {
        name: String,
        field: &'static str,
        value: String,
    },
}

/// The clockwise orientation of the input space of a touchscreen relative to the screen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    pub fn degrees(&self) -> u16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }
}

impl TryFrom<u16> for Rotation {
    type Error = Error;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Self::Deg0),
            90 => Ok(Self::Deg90),
            180 => Ok(Self::Deg180),
            270 => Ok(Self::Deg270),
            _ => Err(Error::InvalidRotation(degrees.to_string())),
        }
    }
}

impl FromStr for Rotation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let degrees: u16 = s
            .parse()
            .map_err(|_| Error::InvalidRotation(s.to_string()))?;

        Self::try_from(degrees)
    }
}

impl Display for Rotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// A touchscreen which covers the sub-area of the screen starting at (`x_offset`, `y_offset`)
/// with the size `width`x`height`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Touchscreen {
    /// Only used for diagnostics, it doesn't appear in the rules.
    pub name: String,
    pub vendor_id: u16,
    pub product_id: u16,
    pub x_offset: i32,
    pub y_offset: i32,
    pub width: Pixel,
    pub height: Pixel,
    pub rotation: Rotation,
}

impl Touchscreen {
    /// Parses the arguments of a single `--touchscreen` occurrence:
    ///
    /// ```text
    /// <vendor> <product> <x_offset> <y_offset> <width> <height> [rotation]
    /// ```
    ///
    /// `index` is the position of the touchscreen on the command line and is used to name it.
    pub fn from_args<S: AsRef<str>>(index: usize, args: &[S]) -> Result<Self, Error> {
        let name = format!("touchscreen{}", index);

        let [vendor, product, x_offset, y_offset, width, height, rest @ ..] = args else {
            return Err(Error::NotEnoughArgs {
                name,
                got: args.len(),
            });
        };

        let rotation: Rotation = match rest {
            [] => Rotation::default(),
            // only a number is taken as the rotation
            [rotation] if !rotation.as_ref().starts_with(|c: char| c.is_ascii_digit()) => {
                return Err(Error::UnexpectedArg {
                    name,
                    value: rotation.as_ref().to_string(),
                })
            }
            [rotation] => rotation.as_ref().parse()?,
            _ => {
                return Err(Error::TooManyArgs {
                    name,
                    got: args.len(),
                })
            }
        };

        let vendor_id = parse_hex_id(vendor.as_ref())
            .ok_or_else(|| invalid_parameter(&name, "vendor id", vendor.as_ref()))?;
        let product_id = parse_hex_id(product.as_ref())
            .ok_or_else(|| invalid_parameter(&name, "product id", product.as_ref()))?;

        let touchscreen = Self {
            vendor_id,
            product_id,
            x_offset: parse_field(&name, "x offset", x_offset.as_ref())?,
            y_offset: parse_field(&name, "y offset", y_offset.as_ref())?,
            width: parse_field(&name, "width", width.as_ref())?,
            height: parse_field(&name, "height", height.as_ref())?,
            rotation,
            name,
        };

        debug!("Parsed {:?}", touchscreen);
        Ok(touchscreen)
    }
}

fn invalid_parameter(name: &str, field: &'static str, value: &str) -> Error {
    Error::InvalidParameter {
        name: name.to_string(),
        field,
        value: value.to_string(),
    }
}

fn parse_field<T: FromStr>(name: &str, field: &'static str, value: &str) -> Result<T, Error> {
    value
        .parse()
        .map_err(|_| invalid_parameter(name, field, value))
}

/// Parses a 16-bit hardware id in hexadecimal notation with an optional `0x` prefix.
fn parse_hex_id(value: &str) -> Option<u16> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);

    // `from_str_radix` would accept a sign as well
    if digits.starts_with(['+', '-']) {
        return None;
    }

    u16::from_str_radix(digits, 16).ok()
}
