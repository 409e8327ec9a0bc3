//! Band colors and the facts each color can encode.
//!
//! The twelve colors form a closed vocabulary: every function in the core
//! takes and returns values of this enum, so an invalid color cannot reach
//! the decoding logic. Parsing from text (the CLI boundary) is the only
//! place a bad name can appear, and it fails there with `ParseColorError`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the twelve recognized band colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Digit 0, multiplier ×1
    Black,
    /// Digit 1, multiplier ×10, tolerance 1%
    Brown,
    /// Digit 2, multiplier ×100, tolerance 2%
    Red,
    /// Digit 3, multiplier ×1k
    Orange,
    /// Digit 4, multiplier ×10k
    Yellow,
    /// Digit 5, multiplier ×100k, tolerance 0.5%
    Green,
    /// Digit 6, multiplier ×1M, tolerance 0.25%
    Blue,
    /// Digit 7, multiplier ×10M, tolerance 0.1%
    Violet,
    /// Digit 8, multiplier ×100M, tolerance 0.05%
    Grey,
    /// Digit 9, multiplier ×1G
    White,
    /// Multiplier ×0.1, tolerance 5%
    Gold,
    /// Multiplier ×0.01, tolerance 10%
    Silver,
}

impl Color {
    /// All colors in registry order (digit colors first, then gold/silver).
    pub const ALL: [Self; 12] = [
        Self::Black,
        Self::Brown,
        Self::Red,
        Self::Orange,
        Self::Yellow,
        Self::Green,
        Self::Blue,
        Self::Violet,
        Self::Grey,
        Self::White,
        Self::Gold,
        Self::Silver,
    ];

    /// Canonical lowercase name of the color.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Brown => "brown",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Yellow => "yellow",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Violet => "violet",
            Self::Grey => "grey",
            Self::White => "white",
            Self::Gold => "gold",
            Self::Silver => "silver",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a band color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{0}' is not a resistor band color")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parses a color name, case-insensitively. Accepts the spelling
    /// "gray" as an alias for grey.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        if lower == "gray" {
            return Ok(Self::Grey);
        }
        Self::ALL
            .into_iter()
            .find(|c| c.name() == lower)
            .ok_or_else(|| ParseColorError(s.to_string()))
    }
}

/// The facts a single color can encode, one field per band role.
///
/// Each field being present means the color satisfies the corresponding
/// role. Every color has a multiplier; only the ten digit colors have a
/// digit; eight colors mark a tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorAttributes {
    /// Significant digit value (0-9), absent for gold/silver.
    pub digit: Option<u8>,
    /// Decimal scale factor, present for every color.
    pub multiplier: f64,
    /// Tolerance percentage, absent for black/orange/yellow/white.
    pub tolerance: Option<f64>,
}

/// The kind of information a band position carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BandRole {
    /// One significant digit of the resistance value.
    Digit,
    /// The power-of-ten (or fractional) scale factor.
    Multiplier,
    /// The manufacturing precision percentage.
    Tolerance,
}

impl fmt::Display for BandRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit => write!(f, "digit"),
            Self::Multiplier => write!(f, "multiplier"),
            Self::Tolerance => write!(f, "tolerance"),
        }
    }
}
