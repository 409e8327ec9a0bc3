//! Resolving an in-progress, possibly reversed band sequence.
//!
//! A user enters bands left to right, but a physical resistor reads the
//! same in either direction, and the sequence may still have unset
//! positions. This module trims the unset edges and tries a decode both
//! ways, treating per-direction failure as an ordinary absent result.

use crate::decoder::decode;
use crate::models::{Color, Resistance};

/// Both possible readings of a band sequence.
///
/// Either, neither or both directions may decode. Two structurally
/// different readings can land on the same numeric value; detecting that
/// coincidence is a presentation concern, not collapsed here.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Reading {
    /// Decode result in the entered order, if that direction is valid.
    pub normal: Option<Resistance>,
    /// Decode result of the reversed sequence, if that direction is valid.
    pub reversed: Option<Resistance>,
}

/// Resolves a partial sequence into its possible readings.
///
/// Leading and trailing unset entries are trimmed: gaps at the ends mean
/// "not typed this far yet". Interior gaps are not filled in or skipped
/// over; a sequence with one never decodes. Fewer than 3 set bands, or any
/// interior gap, yields an empty reading, which is the expected
/// still-typing state rather than an error. Decode failures in either
/// direction are likewise absorbed into an absent result.
///
/// # Examples
///
/// ```
/// use bandcode::models::Color;
/// use bandcode::resolver::resolve;
///
/// let bands = [
///     None,
///     Some(Color::Red),
///     Some(Color::Violet),
///     Some(Color::Brown),
///     None,
/// ];
/// let reading = resolve(&bands);
/// assert_eq!(reading.normal.unwrap().ohms(), 270.0);
/// // brown/violet/red reads fine the other way too: 17 x100
/// assert_eq!(reading.reversed.unwrap().ohms(), 1700.0);
/// ```
#[must_use]
pub fn resolve(bands: &[Option<Color>]) -> Reading {
    let trimmed = trim_unset(bands);

    if trimmed.len() < 3 || trimmed.iter().any(Option::is_none) {
        return Reading::default();
    }

    let forward: Vec<Color> = trimmed.iter().map(|band| band.unwrap()).collect();
    let backward: Vec<Color> = forward.iter().rev().copied().collect();

    let normal = match decode(&forward) {
        Ok(resistance) => Some(resistance),
        Err(err) => {
            log::debug!("no forward reading: {err}");
            None
        }
    };
    let reversed = match decode(&backward) {
        Ok(resistance) => Some(resistance),
        Err(err) => {
            log::debug!("no reversed reading: {err}");
            None
        }
    };

    Reading { normal, reversed }
}

/// Strips unset entries from both ends, preserving interior ones.
fn trim_unset(bands: &[Option<Color>]) -> &[Option<Color>] {
    let start = bands
        .iter()
        .position(Option::is_some)
        .unwrap_or(bands.len());
    let end = bands.iter().rposition(Option::is_some).map_or(0, |i| i + 1);
    if start < end {
        &bands[start..end]
    } else {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Color::{Black, Brown, Gold, Green, Orange, Red, Violet, Yellow};

    fn set(colors: &[Color]) -> Vec<Option<Color>> {
        colors.iter().map(|c| Some(*c)).collect()
    }

    #[test]
    fn test_trim_both_edges() {
        let bands = [None, None, Some(Red), Some(Violet), Some(Brown), None, None];
        let reading = resolve(&bands);
        // Identical to decoding the trimmed sequence directly.
        assert_eq!(reading.normal, decode(&[Red, Violet, Brown]).ok());
        assert_eq!(reading.reversed, decode(&[Brown, Violet, Red]).ok());
        assert!(reading.normal.is_some());
    }

    #[test]
    fn test_interior_gap_yields_nothing() {
        let bands = [Some(Red), None, Some(Brown)];
        assert_eq!(resolve(&bands), Reading::default());
        // Still nothing when the trimmed run is long enough but gapped.
        let bands = [Some(Red), Some(Red), None, Some(Brown)];
        assert_eq!(resolve(&bands), Reading::default());
    }

    #[test]
    fn test_too_short_yields_nothing() {
        assert_eq!(resolve(&[]), Reading::default());
        assert_eq!(resolve(&[None, None, None]), Reading::default());
        assert_eq!(resolve(&set(&[Red, Brown])), Reading::default());
        assert_eq!(resolve(&[None, Some(Red), Some(Brown), None]), Reading::default());
    }

    #[test]
    fn test_one_direction_can_fail_alone() {
        // gold/red/red decodes reversed only: gold is no digit, but a fine
        // trailing multiplier when read from the other end.
        let reading = resolve(&set(&[Gold, Red, Red]));
        assert_eq!(reading.normal, None);
        let reversed = reading.reversed.unwrap();
        assert_eq!(reversed.digits, vec![2, 2]);
        assert_eq!(reversed.multiplier, 0.1);
    }

    #[test]
    fn test_both_directions_decode() {
        let reading = resolve(&set(&[Orange, Orange, Brown]));
        let normal = reading.normal.unwrap();
        let reversed = reading.reversed.unwrap();
        assert_eq!(normal.ohms(), 330.0);
        // brown/orange/orange: 1,3 x1k
        assert_eq!(reversed.ohms(), 13_000.0);
        // The 20% default applies to both directions at 3 bands; it is a
        // property of the band count, not the reading direction.
        assert_eq!(normal.tolerance, 20.0);
        assert_eq!(reversed.tolerance, 20.0);
    }

    #[test]
    fn test_reversed_matches_manual_reverse() {
        let colors = [Brown, Black, Red, Gold];
        let manual: Vec<Color> = colors.iter().rev().copied().collect();
        let reading = resolve(&set(&colors));
        assert_eq!(reading.reversed, decode(&manual).ok());
    }

    #[test]
    fn test_neither_direction_decodes() {
        // Digit-less colors at both ends kill both readings.
        let reading = resolve(&set(&[Gold, Red, Gold]));
        assert_eq!(reading, Reading::default());
    }

    #[test]
    fn test_five_band_window() {
        let bands = [None, Some(Red), Some(Violet), Some(Black), Some(Yellow), Some(Green), None];
        let reading = resolve(&bands);
        let normal = reading.normal.unwrap();
        assert_eq!(normal.digits, vec![2, 7, 0]);
        assert_eq!(normal.multiplier, 1e4);
        assert_eq!(normal.tolerance, 0.5);
        // green/yellow... green digit 5, yellow digit 4, black digit 0,
        // violet multiplier x10M, red tolerance 2%.
        let reversed = reading.reversed.unwrap();
        assert_eq!(reversed.digits, vec![5, 4, 0]);
        assert_eq!(reversed.multiplier, 1e7);
        assert_eq!(reversed.tolerance, 2.0);
    }
}
