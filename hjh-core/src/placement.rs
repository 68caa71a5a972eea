//! Placement dispatch
//!
//! Names the five placement policies and runs them against a helix, either
//! one at a time or several in parallel.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{HelixError, HelixResult};
use crate::helix::Helix;
use crate::split::StrategyFactory;
use crate::types::{FragmentRecord, HelixPair, SixPartRecord};

/// Placement policies for the junction within a helix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Centered; both off-center splits for odd lengths
    DefaultLocation,
    /// Centered; exactly one split
    CenterLocation,
    /// Total length and split perturbed around the center
    CentralRegion,
    /// Junction at every position of the helix
    AlongHelix,
    /// Three segments around a fixed middle insert
    DoubleDouble,
}

impl Placement {
    /// List all placement policies
    pub fn all() -> [Placement; 5] {
        [
            Placement::DefaultLocation,
            Placement::CenterLocation,
            Placement::CentralRegion,
            Placement::AlongHelix,
            Placement::DoubleDouble,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Placement::DefaultLocation => "default_location",
            Placement::CenterLocation => "center_location",
            Placement::CentralRegion => "central_region",
            Placement::AlongHelix => "along_helix",
            Placement::DoubleDouble => "double_double",
        }
    }

    pub fn needs_middle_helix(&self) -> bool {
        matches!(self, Placement::DoubleDouble)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Placement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Placement::all()
            .into_iter()
            .find(|placement| placement.name() == normalized)
            .ok_or_else(|| {
                let names: Vec<&str> = Placement::all().iter().map(|p| p.name()).collect();
                format!("Unknown placement: {}. Available: {}", s, names.join(", "))
            })
    }
}

/// Ordered records produced by one placement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PlacementSet {
    FourPart(Vec<FragmentRecord>),
    SixPart(Vec<SixPartRecord>),
}

impl PlacementSet {
    pub fn len(&self) -> usize {
        match self {
            PlacementSet::FourPart(records) => records.len(),
            PlacementSet::SixPart(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Run one placement against a helix. `middle` is only read by
/// [`Placement::DoubleDouble`], which fails without it.
pub fn place(helix: &Helix, placement: Placement, middle: Option<&HelixPair>) -> HelixResult<PlacementSet> {
    let set = match StrategyFactory::create(placement) {
        Some(strategy) => PlacementSet::FourPart(helix.split_with(strategy.as_ref())?),
        None => {
            let middle = middle.ok_or(HelixError::MissingMiddleHelix)?;
            PlacementSet::SixPart(helix.double_double(middle)?)
        }
    };

    log::info!(
        "{}: {} records at effective length {}",
        placement,
        set.len(),
        helix.effective_length()
    );
    Ok(set)
}

/// Run several placements in parallel. Results come back in the order the
/// placements were given; a failure in one does not affect the others.
pub fn place_all(
    helix: &Helix,
    placements: &[Placement],
    middle: Option<&HelixPair>,
) -> Vec<HelixResult<PlacementSet>> {
    placements
        .par_iter()
        .map(|&placement| place(helix, placement, middle))
        .collect()
}
