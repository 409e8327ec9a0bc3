//! Static registry of band colors and the roles each can play.
//!
//! The attribute table is fixed at compile time and shared by everything
//! else in the crate: the decoder reads single attributes, the layout and
//! availability modules enumerate colors by role, and the CLI renders the
//! table for presentation callers. Derived role sets are built once on
//! first access and never mutated afterwards.

use crate::models::{BandRole, Color, ColorAttributes, RgbColor};
use std::sync::LazyLock;

/// Looks up the attribute triple for a color.
///
/// Total over the closed color set; every color has a defined (possibly
/// absent-per-field) triple, so there is no error path.
#[must_use]
pub const fn attributes_of(color: Color) -> ColorAttributes {
    // digit, multiplier, tolerance-% per the standard IEC 60062 code
    match color {
        Color::Black => attrs(Some(0), 1.0, None),
        Color::Brown => attrs(Some(1), 10.0, Some(1.0)),
        Color::Red => attrs(Some(2), 100.0, Some(2.0)),
        Color::Orange => attrs(Some(3), 1e3, None),
        Color::Yellow => attrs(Some(4), 1e4, None),
        Color::Green => attrs(Some(5), 1e5, Some(0.5)),
        Color::Blue => attrs(Some(6), 1e6, Some(0.25)),
        Color::Violet => attrs(Some(7), 1e7, Some(0.1)),
        Color::Grey => attrs(Some(8), 1e8, Some(0.05)),
        Color::White => attrs(Some(9), 1e9, None),
        Color::Gold => attrs(None, 0.1, Some(5.0)),
        Color::Silver => attrs(None, 0.01, Some(10.0)),
    }
}

const fn attrs(digit: Option<u8>, multiplier: f64, tolerance: Option<f64>) -> ColorAttributes {
    ColorAttributes {
        digit,
        multiplier,
        tolerance,
    }
}

/// Display swatch for a color (background; text color derives from
/// [`RgbColor::is_dark`]).
#[must_use]
pub const fn swatch_of(color: Color) -> RgbColor {
    match color {
        Color::Black => RgbColor::new(0x00, 0x00, 0x00),
        Color::Brown => RgbColor::new(0x52, 0x45, 0x26),
        Color::Red => RgbColor::new(0xBA, 0x06, 0x2D),
        Color::Orange => RgbColor::new(0xE7, 0x49, 0x16),
        Color::Yellow => RgbColor::new(0xF6, 0xC1, 0x0A),
        Color::Green => RgbColor::new(0x17, 0x64, 0x40),
        Color::Blue => RgbColor::new(0x49, 0x3F, 0x9F),
        Color::Violet => RgbColor::new(0xA5, 0x55, 0x8F),
        Color::Grey => RgbColor::new(0x77, 0x77, 0x77),
        Color::White => RgbColor::new(0xFF, 0xFF, 0xFF),
        Color::Gold => RgbColor::new(0xD3, 0xAC, 0x84),
        Color::Silver => RgbColor::new(0xA3, 0x9D, 0x92),
    }
}

/// All colors satisfying a role, in registry order.
///
/// Built once from the attribute table and immutable for the process
/// lifetime. Digit has 10 colors, Multiplier all 12, Tolerance 8.
#[must_use]
pub fn colors_with_role(role: BandRole) -> &'static [Color] {
    static ROLE_SETS: LazyLock<[Vec<Color>; 3]> = LazyLock::new(|| {
        let with = |pred: fn(ColorAttributes) -> bool| -> Vec<Color> {
            Color::ALL
                .into_iter()
                .filter(|c| pred(attributes_of(*c)))
                .collect()
        };
        let sets = [
            with(|a| a.digit.is_some()),
            with(|_| true), // every color has a multiplier
            with(|a| a.tolerance.is_some()),
        ];
        log::trace!(
            "built role sets: {} digit, {} multiplier, {} tolerance colors",
            sets[0].len(),
            sets[1].len(),
            sets[2].len()
        );
        sets
    });

    match role {
        BandRole::Digit => &ROLE_SETS[0],
        BandRole::Multiplier => &ROLE_SETS[1],
        BandRole::Tolerance => &ROLE_SETS[2],
    }
}
