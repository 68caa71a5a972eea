//! Junction perturbed around the center
//!
//! Totals run from two bases shorter to two bases longer than the effective
//! length. Even totals get the centered split plus one base either way, odd
//! totals get the two off-center splits.

use crate::error::{HelixError, HelixResult};
use crate::types::SplitPoint;
use super::SplitStrategy;

/// How far the total length is perturbed either way
pub const LENGTH_PERTURBATION: usize = 2;

/// Smallest effective length whose perturbed splits are all non-negative
pub const MIN_EFFECTIVE_LENGTH: usize = 3;

pub struct CentralRegion;

impl SplitStrategy for CentralRegion {
    fn split_points(&self, effective_length: usize) -> HelixResult<Vec<SplitPoint>> {
        if effective_length < MIN_EFFECTIVE_LENGTH {
            return Err(HelixError::EffectiveLengthTooShort {
                strategy: self.name(),
                minimum: MIN_EFFECTIVE_LENGTH,
                actual: effective_length,
            });
        }

        let first = effective_length - LENGTH_PERTURBATION;
        let last = effective_length
            .checked_add(LENGTH_PERTURBATION)
            .ok_or(HelixError::EffectiveLengthTooLong {
                strategy: self.name(),
                actual: effective_length,
            })?;
        // At most three split points per total
        let mut points = Vec::with_capacity(3 * (2 * LENGTH_PERTURBATION + 1));

        for total in first..=last {
            let half = total / 2;
            if total % 2 == 0 {
                points.extend([half - 1, half, half + 1].map(|one| SplitPoint::new(total, one)));
            } else {
                points.extend([half, half + 1].map(|one| SplitPoint::new(total, one)));
            }
        }

        log::trace!("central_region: {} split points around {}", points.len(), effective_length);
        Ok(points)
    }

    fn name(&self) -> &'static str {
        "central_region"
    }
}
