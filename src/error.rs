//! Error kinds shared by the decoding core.

use crate::models::{BandRole, Color};
use thiserror::Error;

/// Failure modes of the decoding core.
///
/// All variants are local, non-retryable and deterministic for a given
/// input; there is no transient-failure class anywhere in the core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BandError {
    /// The sequence length is outside the 3-6 band range a resistor can have.
    #[error("invalid band count {0}: a resistor has 3 to 6 bands")]
    InvalidBandCount(usize),

    /// The band count is recognized but has no supported layout.
    ///
    /// Covers 6-band resistors (temperature coefficient / failure rate are
    /// deliberately not modeled) as well as counts no layout exists for.
    #[error("{0}-band resistors are not supported")]
    UnsupportedBandCount(usize),

    /// A color was placed in a position whose role it cannot satisfy.
    #[error("{color} cannot be read as a {role} band (position {position})")]
    RoleMismatch {
        /// The offending color.
        color: Color,
        /// The role the position requires.
        role: BandRole,
        /// Zero-based band position.
        position: usize,
    },
}
