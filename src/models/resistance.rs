//! Decoded resistance values and their human-readable formatting.

use serde::Serialize;
use std::fmt;

/// Result of decoding a complete band sequence.
///
/// Carries the raw encoded facts (significant digits, scale factor,
/// tolerance percentage). The numeric value in ohms is derived, not stored;
/// a `Resistance` has no identity beyond the call that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resistance {
    /// The 2 or 3 significant digits, most significant first (0-9 each).
    pub digits: Vec<u8>,
    /// Decimal scale factor applied to the significant digits.
    pub multiplier: f64,
    /// Tolerance percentage, read from a band or defaulted to 20%.
    pub tolerance: f64,
}

impl Resistance {
    /// The resistance value in ohms: significant digits times multiplier.
    #[must_use]
    pub fn ohms(&self) -> f64 {
        let significand = self
            .digits
            .iter()
            .fold(0_u32, |acc, d| acc * 10 + u32::from(*d));
        f64::from(significand) * self.multiplier
    }

    /// Formats the value with a metric prefix and the tolerance, e.g.
    /// `278 MΩ ±0.5%`.
    ///
    /// With `unicode` false the ohm and plus-minus symbols are replaced by
    /// ASCII (`278 Mohm +/-0.5%`) for terminals without them.
    #[must_use]
    pub fn format(&self, unicode: bool) -> String {
        let ohm = if unicode { "Ω" } else { "ohm" };
        let plus_minus = if unicode { "±" } else { "+/-" };
        format!(
            "{} {}{} {}{}%",
            format_scaled(self.ohms()),
            metric_prefix(self.ohms()),
            ohm,
            plus_minus,
            format_number(self.tolerance)
        )
    }
}

impl fmt::Display for Resistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(true))
    }
}

/// Metric prefix for an ohm value: G, M, k or nothing.
///
/// Sub-ohm values stay unprefixed with decimals (the color code has no
/// milliohm multipliers, gold/silver bottom out at 0.01).
fn metric_prefix(ohms: f64) -> &'static str {
    if ohms >= 1e9 {
        "G"
    } else if ohms >= 1e6 {
        "M"
    } else if ohms >= 1e3 {
        "k"
    } else {
        ""
    }
}

/// The ohm value scaled down by its metric prefix.
fn format_scaled(ohms: f64) -> String {
    let scaled = if ohms >= 1e9 {
        ohms / 1e9
    } else if ohms >= 1e6 {
        ohms / 1e6
    } else if ohms >= 1e3 {
        ohms / 1e3
    } else {
        ohms
    };
    format_number(scaled)
}

/// Formats a number with up to three decimals, trailing zeros trimmed.
fn format_number(value: f64) -> String {
    let mut s = format!("{value:.3}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}
