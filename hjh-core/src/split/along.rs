//! Junction swept along the helix

use crate::error::HelixResult;
use crate::types::SplitPoint;
use super::SplitStrategy;

/// Every junction position from one end of the helix to the other
pub struct AlongHelix;

impl SplitStrategy for AlongHelix {
    fn split_points(&self, effective_length: usize) -> HelixResult<Vec<SplitPoint>> {
        Ok((0..=effective_length)
            .map(|helix_one| SplitPoint::new(effective_length, helix_one))
            .collect())
    }

    fn name(&self) -> &'static str {
        "along_helix"
    }
}
