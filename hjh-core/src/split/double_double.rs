//! Three-segment split around a fixed middle insert

use crate::error::{HelixError, HelixResult};
use crate::types::SeparationPoint;

/// Separation lengths tried at the effective length
pub const STANDARD_SEPARATIONS: [usize; 5] = [3, 4, 5, 6, 7];

/// Separation lengths tried at the effective length plus [`EXTENSION`]
pub const EXTENDED_SEPARATIONS: [usize; 6] = [3, 4, 5, 6, 7, 8];

/// Extra helix length for the second batch
pub const EXTENSION: usize = 2;

/// Smallest effective length that fits every separation
pub const MIN_EFFECTIVE_LENGTH: usize = 7;

/// Ordered separation points: the standard batch at the effective length,
/// then the extended batch two bases longer.
pub fn separation_points(effective_length: usize) -> HelixResult<Vec<SeparationPoint>> {
    if effective_length < MIN_EFFECTIVE_LENGTH {
        return Err(HelixError::EffectiveLengthTooShort {
            strategy: "double_double",
            minimum: MIN_EFFECTIVE_LENGTH,
            actual: effective_length,
        });
    }

    let extended_length = effective_length
        .checked_add(EXTENSION)
        .ok_or(HelixError::EffectiveLengthTooLong {
            strategy: "double_double",
            actual: effective_length,
        })?;

    let standard = STANDARD_SEPARATIONS
        .iter()
        .map(|&separation| SeparationPoint::new(effective_length, separation));
    let extended = EXTENDED_SEPARATIONS
        .iter()
        .map(|&separation| SeparationPoint::new(extended_length, separation));

    Ok(standard.chain(extended).collect())
}
