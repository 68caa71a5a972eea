//! HJH Core Library
//!
//! Helix splitting engine for helix-junction-helix DNA libraries: validated
//! helix strands, split-length strategies, and the formatter that carves
//! strands into fragment records around a junction.

pub mod error;
pub mod types;
pub mod helix;
pub mod split;
pub mod format;
pub mod placement;

// Re-export commonly used types and functions
pub use error::{HelixError, HelixResult};
pub use types::{FragmentRecord, HelixPair, SeparationPoint, SixPartRecord, SplitPoint};
pub use helix::Helix;
pub use split::{SplitStrategy, StrategyFactory};
pub use format::{format_double_double, format_helices};
pub use placement::{place, place_all, Placement, PlacementSet};

/// Version information for the HJH core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
