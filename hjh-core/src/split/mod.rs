//! Split-length strategies
//!
//! Each strategy turns an effective helix length into the ordered list of
//! split points to materialize. Order matters: downstream naming consumes
//! the records positionally.

use crate::error::HelixResult;
use crate::placement::Placement;
use crate::types::SplitPoint;

pub mod location;
pub mod region;
pub mod along;
pub mod double_double;


pub use along::AlongHelix;
pub use location::{CenterLocation, DefaultLocation};
pub use region::CentralRegion;

/// Trait for four-part placement policies
pub trait SplitStrategy: Send + Sync {
    /// Ordered split points for a helix of the given effective length
    fn split_points(&self, effective_length: usize) -> HelixResult<Vec<SplitPoint>>;

    /// Get the name/identifier of this strategy
    fn name(&self) -> &'static str;
}

/// Factory for creating split strategies
pub struct StrategyFactory;

impl StrategyFactory {
    /// Create the four-part strategy for a placement.
    ///
    /// `DoubleDouble` splits into three segments and has no four-part
    /// strategy; see [`double_double::separation_points`].
    pub fn create(placement: Placement) -> Option<Box<dyn SplitStrategy>> {
        match placement {
            Placement::DefaultLocation => Some(Box::new(DefaultLocation)),
            Placement::CenterLocation => Some(Box::new(CenterLocation)),
            Placement::CentralRegion => Some(Box::new(CentralRegion)),
            Placement::AlongHelix => Some(Box::new(AlongHelix)),
            Placement::DoubleDouble => None,
        }
    }
}
