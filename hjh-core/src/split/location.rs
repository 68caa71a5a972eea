//! Junction placed in the middle of the helix

use crate::error::HelixResult;
use crate::types::SplitPoint;
use super::SplitStrategy;

/// Junction in the middle; an odd helix yields both off-center splits,
/// shorter helix one first.
pub struct DefaultLocation;

impl SplitStrategy for DefaultLocation {
    fn split_points(&self, effective_length: usize) -> HelixResult<Vec<SplitPoint>> {
        let half = effective_length / 2;
        let points = if effective_length % 2 == 0 {
            vec![SplitPoint::new(effective_length, half)]
        } else {
            vec![
                SplitPoint::new(effective_length, half),
                SplitPoint::new(effective_length, half + 1),
            ]
        };
        Ok(points)
    }

    fn name(&self) -> &'static str {
        "default_location"
    }
}

/// Junction in the middle, always one split. Helix one takes the extra
/// base when the helix is odd.
pub struct CenterLocation;

impl SplitStrategy for CenterLocation {
    fn split_points(&self, effective_length: usize) -> HelixResult<Vec<SplitPoint>> {
        Ok(vec![SplitPoint::new(effective_length, effective_length.div_ceil(2))])
    }

    fn name(&self) -> &'static str {
        "center_location"
    }
}
