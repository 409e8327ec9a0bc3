//! Fixed band layouts: which role each position plays per band count.

use crate::error::BandError;
use crate::models::BandRole;

/// Band counts a layout exists for.
///
/// This is the whole exploration range of the availability resolver; it is
/// not parameterized further. 6-band resistors (temperature coefficient,
/// failure rate) are recognized but unsupported.
pub const SUPPORTED_BAND_COUNTS: [usize; 3] = [3, 4, 5];

// Each table is written out in full rather than computed from the band
// count. A 3-band resistor has no tolerance band; its tolerance is fixed
// at 20% by convention and handled in the decoder.
const THREE_BAND: [BandRole; 3] = [BandRole::Digit, BandRole::Digit, BandRole::Multiplier];
const FOUR_BAND: [BandRole; 4] = [
    BandRole::Digit,
    BandRole::Digit,
    BandRole::Multiplier,
    BandRole::Tolerance,
];
const FIVE_BAND: [BandRole; 5] = [
    BandRole::Digit,
    BandRole::Digit,
    BandRole::Digit,
    BandRole::Multiplier,
    BandRole::Tolerance,
];

/// The ordered role list for a band count.
///
/// Defined only for counts in [`SUPPORTED_BAND_COUNTS`]; every other count
/// fails with [`BandError::UnsupportedBandCount`]. The decoder separately
/// reports counts outside 3-6 as [`BandError::InvalidBandCount`] before
/// consulting the table.
pub fn layout_for(band_count: usize) -> Result<&'static [BandRole], BandError> {
    match band_count {
        3 => Ok(&THREE_BAND),
        4 => Ok(&FOUR_BAND),
        5 => Ok(&FIVE_BAND),
        other => Err(BandError::UnsupportedBandCount(other)),
    }
}
