//! Which colors are legal at a band position before the total count is known.

use crate::layout::{layout_for, SUPPORTED_BAND_COUNTS};
use crate::models::Color;
use crate::registry::colors_with_role;
use std::sync::LazyLock;

/// Highest band index any supported layout reaches.
const MAX_INDEX: usize = 5;

// The union per index is fixed once the supported band counts are, so the
// whole table is computed up front instead of re-deriving it per call.
static AVAILABLE: LazyLock<[Vec<Color>; MAX_INDEX]> = LazyLock::new(|| {
    let table = std::array::from_fn(|index| {
        let roles: Vec<_> = SUPPORTED_BAND_COUNTS
            .into_iter()
            .filter(|count| index < *count)
            .map(|count| {
                layout_for(count).expect("supported band counts all have layouts")[index]
            })
            .collect();
        // Union in registry order: each color once, however many layouts
        // offer it.
        Color::ALL
            .into_iter()
            .filter(|color| {
                roles
                    .iter()
                    .any(|role| colors_with_role(*role).contains(color))
            })
            .collect()
    });
    log::trace!("built availability table for indices 0..{MAX_INDEX}");
    table
});

/// The set of colors legal at `index` across every supported band count.
///
/// A band count contributes its layout's role at `index` only when that
/// position exists at that count; the result is the deduplicated union.
/// Total over all indices: positions no supported layout reaches yield an
/// empty set, which means "this band cannot exist", not an error.
///
/// # Examples
///
/// ```
/// use bandcode::availability::available_at;
/// use bandcode::models::BandRole;
/// use bandcode::registry::colors_with_role;
///
/// // Only the 5-band layout has an index 4, and its role is Tolerance.
/// assert_eq!(available_at(4), colors_with_role(BandRole::Tolerance));
/// // No supported layout has 6 positions.
/// assert!(available_at(5).is_empty());
/// ```
#[must_use]
pub fn available_at(index: usize) -> &'static [Color] {
    if index < MAX_INDEX {
        &AVAILABLE[index]
    } else {
        &[]
    }
}
