//! Formatting of the udev rules.
use std::{fmt::Display, io::Write};

use tracing::debug;

use crate::{layout::Layout, matrix::CalibrationMatrix, screen::Screen, touchscreen::Touchscreen};

pub const HEADER: &str = "# udev rules for touchscreen calibration";

/// The udev rule which sets the calibration matrix of a single touchscreen.
#[derive(Debug)]
pub struct Rule<'a> {
    touchscreen: &'a Touchscreen,
    matrix: CalibrationMatrix,
}

impl<'a> Rule<'a> {
    pub fn new(screen: &Screen, touchscreen: &'a Touchscreen) -> Self {
        Self {
            touchscreen,
            matrix: CalibrationMatrix::new(screen, touchscreen),
        }
    }
}

impl Display for Rule<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            concat!(
                "SUBSYSTEM==\"input\", KERNEL==\"event*\", ",
                "ATTRS{{idVendor}}==\"{:04x}\", ATTRS{{idProduct}}==\"{:04x}\", ",
                "ENV{{LIBINPUT_CALIBRATION_MATRIX}}=\"{}\""
            ),
            self.touchscreen.vendor_id, self.touchscreen.product_id, self.matrix
        )
    }
}

/// Writes the header followed by one rule per touchscreen of `layout`, in the order in which the
/// touchscreens were given.
pub fn write_rules<W: Write>(writer: &mut W, layout: &Layout) -> std::io::Result<()> {
    writeln!(writer, "{}", HEADER)?;

    for touchscreen in &layout.touchscreens {
        let rule = Rule::new(&layout.screen, touchscreen);
        debug!(
            "Matrix of {} ({}): {}",
            touchscreen.name, touchscreen.rotation, rule.matrix
        );

        writeln!(writer, "{}", rule)?;
    }

    writer.flush()
}
