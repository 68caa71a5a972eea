use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{HelixError, HelixResult};

/// Two antiparallel strands of a double helix, both read 5'->3'.
///
/// Complementarity is not checked, only that both strands have the same
/// number of bases.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawHelixPair")]
pub struct HelixPair {
    side1: String,
    side2: String,
}

#[derive(Deserialize)]
struct RawHelixPair {
    side1: String,
    side2: String,
}

impl TryFrom<RawHelixPair> for HelixPair {
    type Error = HelixError;

    fn try_from(raw: RawHelixPair) -> HelixResult<Self> {
        HelixPair::new(raw.side1, raw.side2)
    }
}

impl HelixPair {
    pub fn new(side1: impl Into<String>, side2: impl Into<String>) -> HelixResult<Self> {
        let side1 = side1.into();
        let side2 = side2.into();

        // Offsets below are byte offsets, so every base has to be one byte
        for (name, side) in [("side1", &side1), ("side2", &side2)] {
            if !side.is_ascii() {
                return Err(HelixError::InvalidSequence(format!(
                    "{} contains non-ASCII characters",
                    name
                )));
            }
        }

        if side1.len() != side2.len() {
            return Err(HelixError::StrandLengthMismatch {
                side1: side1.len(),
                side2: side2.len(),
            });
        }

        Ok(Self { side1, side2 })
    }

    pub fn side1(&self) -> &str {
        &self.side1
    }

    pub fn side2(&self) -> &str {
        &self.side2
    }

    /// Number of base pairs in the helix
    pub fn len(&self) -> usize {
        self.side1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.side1.is_empty()
    }
}

/// How a helix region of `total_length` bases is divided around a junction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SplitPoint {
    pub total_length: usize,
    /// Bases on the junction-adjacent (receptor side) helix
    pub helix_one_length: usize,
}

impl SplitPoint {
    pub fn new(total_length: usize, helix_one_length: usize) -> Self {
        Self { total_length, helix_one_length }
    }

    pub fn helix_two_length(&self) -> HelixResult<usize> {
        self.total_length
            .checked_sub(self.helix_one_length)
            .ok_or(HelixError::InvalidSplit {
                total_length: self.total_length,
                helix_one_length: self.helix_one_length,
            })
    }
}

/// Three-segment split: a fixed-length middle insert centered in the helix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeparationPoint {
    pub total_length: usize,
    pub separation_length: usize,
}

impl SeparationPoint {
    pub fn new(total_length: usize, separation_length: usize) -> Self {
        Self { total_length, separation_length }
    }

    /// End of the first segment, `floor((total - separation) / 2)`
    pub fn break1(&self) -> HelixResult<usize> {
        self.total_length
            .checked_sub(self.separation_length)
            .map(|outer| outer / 2)
            .ok_or(HelixError::SeparationTooLong {
                separation_length: self.separation_length,
                available: self.total_length,
            })
    }

    /// Start of the third segment
    pub fn break2(&self) -> HelixResult<usize> {
        Ok(self.break1()? + self.separation_length)
    }

    pub fn helix_three_length(&self) -> HelixResult<usize> {
        Ok(self.total_length - self.break2()?)
    }
}

/// Four strand fragments for one split, all read 5'->3'.
///
/// Field order follows the physical layout around the junction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FragmentRecord {
    pub h1_side1: String,
    pub h2_side1: String,
    pub h2_side2: String,
    pub h1_side2: String,
}

impl FragmentRecord {
    pub fn helix_one_length(&self) -> usize {
        self.h1_side1.len()
    }

    pub fn helix_two_length(&self) -> usize {
        self.h2_side1.len()
    }

    pub fn total_length(&self) -> usize {
        self.h1_side1.len() + self.h2_side1.len()
    }
}

impl fmt::Display for FragmentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}\t{} {}",
            self.h1_side1, self.h2_side1, self.h2_side2, self.h1_side2
        )
    }
}

/// Six strand fragments for a three-segment split, all read 5'->3'.
///
/// The `h2` pair is carved from the middle helix, not from the split helix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SixPartRecord {
    pub h1_side1: String,
    pub h2_side1: String,
    pub h3_side1: String,
    pub h3_side2: String,
    pub h2_side2: String,
    pub h1_side2: String,
}

impl SixPartRecord {
    pub fn separation_length(&self) -> usize {
        self.h2_side1.len()
    }

    pub fn total_length(&self) -> usize {
        self.h1_side1.len() + self.h2_side1.len() + self.h3_side1.len()
    }
}

impl fmt::Display for SixPartRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}\t{} {} {}",
            self.h1_side1, self.h2_side1, self.h3_side1, self.h3_side2, self.h2_side2, self.h1_side2
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helix_pair_rejects_unequal_sides() {
        let err = HelixPair::new("AAA", "TTTT").unwrap_err();
        assert_eq!(err, HelixError::StrandLengthMismatch { side1: 3, side2: 4 });
    }

    #[test]
    fn test_helix_pair_rejects_non_ascii() {
        assert!(matches!(
            HelixPair::new("AAé", "TTTT"),
            Err(HelixError::InvalidSequence(_))
        ));
    }

    #[test]
    fn test_helix_pair_deserialize_validates() {
        let ok: HelixPair = serde_json::from_str(r#"{"side1":"GCG","side2":"CGC"}"#).unwrap();
        assert_eq!(ok.len(), 3);

        let bad = serde_json::from_str::<HelixPair>(r#"{"side1":"GCG","side2":"CG"}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_split_point_helix_two() {
        assert_eq!(SplitPoint::new(6, 2).helix_two_length(), Ok(4));
        assert!(SplitPoint::new(6, 7).helix_two_length().is_err());
    }

    #[test]
    fn test_separation_breaks() {
        let point = SeparationPoint::new(10, 3);
        assert_eq!(point.break1(), Ok(3));
        assert_eq!(point.break2(), Ok(6));
        assert_eq!(point.helix_three_length(), Ok(4));

        let point = SeparationPoint::new(12, 8);
        assert_eq!(point.break1(), Ok(2));
        assert_eq!(point.helix_three_length(), Ok(2));

        assert!(SeparationPoint::new(4, 5).break1().is_err());
    }

    #[test]
    fn test_fragment_display() {
        let record = FragmentRecord {
            h1_side1: "GC".to_string(),
            h2_side1: "AT".to_string(),
            h2_side2: "AT".to_string(),
            h1_side2: "GC".to_string(),
        };
        assert_eq!(record.to_string(), "GC AT\tAT GC");
        assert_eq!(record.total_length(), 4);
    }
}
