//! The libinput calibration matrix of a touchscreen.
//!
//! libinput applies the matrix
//!
//! ```text
//! [ c0 c1 c2 ]
//! [ c3 c4 c5 ]
//! [ 0  0  1  ]
//! ```
//!
//! to the normalized (`0.0..=1.0`) coordinates of a touch event, so only the first six
//! coefficients depend on the touchscreen.
use std::fmt::Display;

use crate::{
    screen::Screen,
    touchscreen::{Rotation, Touchscreen},
};

/// A point in normalized coordinates.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The coefficients are kept in single precision, which determines the last printed digit of
/// every rule.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CalibrationMatrix {
    coefficients: [f32; 6],
}

impl CalibrationMatrix {
    /// Computes the matrix which maps the touch input of `touchscreen` onto its part of `screen`.
    pub fn new(screen: &Screen, touchscreen: &Touchscreen) -> Self {
        let screen_width = screen.width as f32;
        let screen_height = screen.height as f32;

        // the fraction of the screen which is covered by the touchscreen...
        let sx = touchscreen.width as f32 / screen_width;
        let sy = touchscreen.height as f32 / screen_height;
        // ... and where it starts
        let ox = touchscreen.x_offset as f32 / screen_width;
        let oy = touchscreen.y_offset as f32 / screen_height;

        let coefficients = match touchscreen.rotation {
            Rotation::Deg0 => [sx, 0.0, ox, 0.0, sy, oy],
            Rotation::Deg90 => [0.0, sy, oy, -sx, 0.0, remainder(ox, sx)],
            Rotation::Deg180 => [-sx, 0.0, remainder(ox, sx), 0.0, -sy, remainder(oy, sy)],
            Rotation::Deg270 => [0.0, -sy, remainder(oy, sy), sx, 0.0, ox],
        };

        Self { coefficients }
    }

    pub fn coefficients(&self) -> &[f32; 6] {
        &self.coefficients
    }

    /// Maps `point` the same way libinput would.
    pub fn apply(&self, point: Point) -> Point {
        let [c0, c1, c2, c3, c4, c5] = self.coefficients.map(f64::from);

        Point {
            x: c0 * point.x + c1 * point.y + c2,
            y: c3 * point.x + c4 * point.y + c5,
        }
    }
}

/// `1 - offset - scale`, evaluated in double precision and rounded back to single precision.
fn remainder(offset: f32, scale: f32) -> f32 {
    (1.0 - f64::from(offset) - f64::from(scale)) as f32
}

/// The whole 3x3 matrix in row-major order, as `LIBINPUT_CALIBRATION_MATRIX` expects it.
impl Display for CalibrationMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for coefficient in self.coefficients {
            write!(f, "{:.6} ", coefficient)?;
        }

        write!(f, "0 0 1")
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    const EPSILON: f64 = 1e-6;

    fn touchscreen(
        x_offset: i32,
        y_offset: i32,
        width: u32,
        height: u32,
        rotation: Rotation,
    ) -> Touchscreen {
        Touchscreen {
            name: "touchscreen0".into(),
            vendor_id: 0x1234,
            product_id: 0xabcd,
            x_offset,
            y_offset,
            width,
            height,
            rotation,
        }
    }

    fn matrix(
        screen: Screen,
        (x_offset, y_offset): (i32, i32),
        (width, height): (u32, u32),
        rotation: Rotation,
    ) -> CalibrationMatrix {
        CalibrationMatrix::new(
            &screen,
            &touchscreen(x_offset, y_offset, width, height, rotation),
        )
    }

    fn assert_point_eq(actual: Point, expected: Point) {
        assert!(
            (actual.x - expected.x).abs() < EPSILON && (actual.y - expected.y).abs() < EPSILON,
            "{:?} != {:?}",
            actual,
            expected
        );
    }

    #[test]
    fn test_identity() {
        let matrix = matrix(Screen::FULL_HD, (0, 0), (1920, 1080), Rotation::Deg0);

        assert_eq!(
            matrix.to_string(),
            "1.000000 0.000000 0.000000 0.000000 1.000000 0.000000 0 0 1"
        );
    }

    #[test]
    fn test_left_half_rotated_by_90() {
        let matrix = matrix(Screen::FULL_HD, (0, 0), (960, 1080), Rotation::Deg90);

        assert_eq!(
            matrix.to_string(),
            "0.000000 1.000000 0.000000 -0.500000 0.000000 0.500000 0 0 1"
        );
    }

    #[test]
    fn test_right_half_rotated_by_90() {
        let matrix = matrix(Screen::FULL_HD, (960, 0), (960, 1080), Rotation::Deg90);

        assert_eq!(matrix.coefficients(), &[0.0, 1.0, 0.0, -0.5, 0.0, 0.0]);
    }

    #[test]
    fn test_rotated_by_180() {
        let matrix = matrix(Screen::FULL_HD, (0, 0), (1920, 1080), Rotation::Deg180);

        assert_eq!(
            matrix.to_string(),
            "-1.000000 0.000000 0.000000 0.000000 -1.000000 0.000000 0 0 1"
        );
    }

    #[test]
    fn test_bottom_right_quarter_rotated_by_270() {
        let matrix = matrix(Screen::FULL_HD, (960, 540), (960, 540), Rotation::Deg270);

        assert_eq!(matrix.coefficients(), &[0.0, -0.5, 0.0, 0.5, 0.0, 0.5]);
    }

    #[test]
    fn test_rounding() {
        let matrix = matrix(Screen::WXGA, (0, 0), (427, 800), Rotation::Deg0);

        // 427 / 1280 = 0.33359375
        assert!(matrix.to_string().starts_with("0.333594 "));
    }

    /// `1 - ox - sx` is 0.5953125 in f64 but 0.59531248... after the single precision rounding
    #[test]
    fn test_single_precision_digits() {
        let matrix = matrix(Screen::FULL_HD, (776, 0), (1, 1080), Rotation::Deg180);

        assert_eq!(
            matrix.to_string(),
            "-0.000521 0.000000 0.595312 0.000000 -1.000000 0.000000 0 0 1"
        );
    }

    #[test]
    fn test_apply_without_rotation() {
        let matrix = matrix(Screen::FULL_HD, (960, 0), (960, 540), Rotation::Deg0);

        assert_point_eq(matrix.apply(Point::new(0.0, 0.0)), Point::new(0.5, 0.0));
        assert_point_eq(matrix.apply(Point::new(1.0, 1.0)), Point::new(1.0, 0.5));
    }

    fn any_rotation() -> impl Strategy<Value = Rotation> {
        prop_oneof![
            Just(Rotation::Deg0),
            Just(Rotation::Deg90),
            Just(Rotation::Deg180),
            Just(Rotation::Deg270),
        ]
    }

    prop_compose! {
        fn layout()(width in 1u32..8192, height in 1u32..8192)
            (
                screen in Just(Screen { width, height }),
                offset in (0..width as i32, 0..height as i32),
                size in (0..=width, 0..=height),
            ) -> (Screen, (i32, i32), (u32, u32)) {
            (screen, offset, size)
        }
    }

    proptest! {
        #[test]
        fn test_origin_maps_onto_translation(
            (screen, offset, size) in layout(),
            rotation in any_rotation(),
        ) {
            let matrix = matrix(screen, offset, size, rotation);
            let [_, _, c2, _, _, c5] = *matrix.coefficients();

            prop_assert_eq!(
                matrix.apply(Point::default()),
                Point::new(f64::from(c2), f64::from(c5))
            );
        }

        #[test]
        fn test_unrotated_corners((screen, offset, size) in layout()) {
            let matrix = matrix(screen, offset, size, Rotation::Deg0);

            let ox = f64::from(offset.0) / f64::from(screen.width);
            let oy = f64::from(offset.1) / f64::from(screen.height);
            let sx = f64::from(size.0) / f64::from(screen.width);
            let sy = f64::from(size.1) / f64::from(screen.height);

            assert_point_eq(matrix.apply(Point::new(0.0, 0.0)), Point::new(ox, oy));
            assert_point_eq(matrix.apply(Point::new(1.0, 1.0)), Point::new(ox + sx, oy + sy));
        }

        #[test]
        fn test_half_turn_negates_scale((screen, offset, size) in layout()) {
            let upright = matrix(screen, offset, size, Rotation::Deg0);
            let upside_down = matrix(screen, offset, size, Rotation::Deg180);

            let [a0, a1, _, a3, a4, _] = *upright.coefficients();
            let [b0, b1, _, b3, b4, _] = *upside_down.coefficients();

            prop_assert_eq!([b0, b1, b3, b4], [-a0, a1, a3, -a4]);
        }

        #[test]
        fn test_quarter_turns_mirror_each_other((screen, offset, size) in layout()) {
            let quarter = matrix(screen, offset, size, Rotation::Deg90);
            let three_quarters = matrix(screen, offset, size, Rotation::Deg270);

            let [a0, a1, _, a3, a4, _] = *quarter.coefficients();
            let [b0, b1, _, b3, b4, _] = *three_quarters.coefficients();

            prop_assert_eq!([b0, b1, b3, b4], [a0, -a1, -a3, a4]);
        }

        #[test]
        fn test_display_format(
            (screen, offset, size) in layout(),
            rotation in any_rotation(),
        ) {
            let formatted = matrix(screen, offset, size, rotation).to_string();
            let values: Vec<&str> = formatted.split(' ').collect();

            prop_assert_eq!(values.len(), 9);
            prop_assert_eq!(&values[6..], &["0", "0", "1"]);
            for value in &values[..6] {
                let (_, decimals) = value.split_once('.').unwrap();
                prop_assert_eq!(decimals.len(), 6);
            }
        }
    }
}
