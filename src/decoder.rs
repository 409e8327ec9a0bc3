//! Decoding a complete band sequence into a resistance value.

use crate::error::BandError;
use crate::layout::layout_for;
use crate::models::{BandRole, Color, Resistance};
use crate::registry::attributes_of;

/// Tolerance applied when a 3-band resistor carries no tolerance band.
pub const DEFAULT_TOLERANCE: f64 = 20.0;

/// Decodes a complete, gap-free color sequence.
///
/// The decoder is the single authority on role validity: callers may place
/// any color at any position, and a color that cannot satisfy its
/// position's role is rejected here with [`BandError::RoleMismatch`].
///
/// # Examples
///
/// ```
/// use bandcode::decoder::decode;
/// use bandcode::models::Color;
///
/// let r = decode(&[Color::Brown, Color::Black, Color::Red, Color::Gold]).unwrap();
/// assert_eq!(r.digits, vec![1, 0]);
/// assert_eq!(r.multiplier, 100.0);
/// assert_eq!(r.tolerance, 5.0);
/// ```
///
/// # Errors
///
/// - [`BandError::InvalidBandCount`] for lengths outside 3-6.
/// - [`BandError::UnsupportedBandCount`] for length 6 (temperature
///   coefficient and failure rate bands are not modeled).
/// - [`BandError::RoleMismatch`] for a color lacking its position's role.
pub fn decode(colors: &[Color]) -> Result<Resistance, BandError> {
    let count = colors.len();
    if !(3..=6).contains(&count) {
        return Err(BandError::InvalidBandCount(count));
    }
    if count == 6 {
        return Err(BandError::UnsupportedBandCount(count));
    }

    let layout = layout_for(count)?;

    let digit_count = if count >= 5 { 3 } else { 2 };
    let mut digits = Vec::with_capacity(digit_count);
    for (position, color) in colors.iter().take(digit_count).enumerate() {
        let digit = attributes_of(*color)
            .digit
            .ok_or(BandError::RoleMismatch {
                color: *color,
                role: layout[position],
                position,
            })?;
        digits.push(digit);
    }

    // Multiplier sits right after the digits. Every color in the closed set
    // has a multiplier, so this read cannot fail.
    let multiplier = attributes_of(colors[digit_count]).multiplier;

    let tolerance = if count > 3 {
        let position = digit_count + 1;
        let color = colors[position];
        attributes_of(color)
            .tolerance
            .ok_or(BandError::RoleMismatch {
                color,
                role: BandRole::Tolerance,
                position,
            })?
    } else {
        // Unmarked tolerance band implies 20% by convention, not a lookup.
        DEFAULT_TOLERANCE
    };

    log::debug!(
        "decoded {count}-band sequence: digits {digits:?}, x{multiplier}, {tolerance}%"
    );

    Ok(Resistance {
        digits,
        multiplier,
        tolerance,
    })
}
