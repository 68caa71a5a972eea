//! Helix entity
//!
//! A validated strand pair together with the effective length left over once
//! the junction is accounted for. Immutable after construction; every
//! placement reads from it without re-validating.

use crate::error::{HelixError, HelixResult};
use crate::format;
use crate::split::{double_double, AlongHelix, CenterLocation, CentralRegion, DefaultLocation, SplitStrategy};
use crate::types::{FragmentRecord, HelixPair, SixPartRecord, SplitPoint};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Helix {
    sequence: HelixPair,
    effective_length: usize,
}

impl Helix {
    /// Helix whose full length surrounds a junction of `junction_length`
    pub fn new(sequence: HelixPair, junction_length: usize) -> HelixResult<Self> {
        let length = sequence.len();
        Self::build(sequence, junction_length, length)
    }

    /// Helix of an explicit total length, which may be shorter than the
    /// strands but never longer; the unused bases at the far end are never
    /// emitted.
    pub fn with_total_length(
        sequence: HelixPair,
        junction_length: usize,
        total_length: usize,
    ) -> HelixResult<Self> {
        if total_length > sequence.len() {
            return Err(HelixError::TotalLengthExceedsStrands {
                total_length,
                available: sequence.len(),
            });
        }
        Self::build(sequence, junction_length, total_length)
    }

    fn build(sequence: HelixPair, junction_length: usize, length: usize) -> HelixResult<Self> {
        let effective_length = length
            .checked_sub(junction_length)
            .ok_or(HelixError::NegativeEffectiveLength { length, junction_length })?;

        log::trace!(
            "helix of {} bp, junction {} nt, effective length {}",
            sequence.len(),
            junction_length,
            effective_length
        );

        Ok(Self { sequence, effective_length })
    }

    pub fn sequence(&self) -> &HelixPair {
        &self.sequence
    }

    pub fn effective_length(&self) -> usize {
        self.effective_length
    }

    /// Helix-one length for a junction shifted `offset` bases from the
    /// center, `floor(L / 2) + offset`
    pub fn helix_one_length_at_offset(&self, offset: i64) -> HelixResult<usize> {
        let out_of_range = || HelixError::OffsetOutOfRange {
            offset,
            effective_length: self.effective_length,
        };
        let center = i64::try_from(self.effective_length / 2).map_err(|_| out_of_range())?;
        let helix_one = center.checked_add(offset).ok_or_else(out_of_range)?;

        usize::try_from(helix_one)
            .ok()
            .filter(|&length| length <= self.effective_length)
            .ok_or_else(out_of_range)
    }

    /// Single split with the junction shifted `offset` bases from the center
    pub fn split_at_offset(&self, offset: i64) -> HelixResult<FragmentRecord> {
        let helix_one = self.helix_one_length_at_offset(offset)?;
        format::format_split(&self.sequence, SplitPoint::new(self.effective_length, helix_one))
    }

    /// Fragment records for any four-part strategy
    pub fn split_with(&self, strategy: &dyn SplitStrategy) -> HelixResult<Vec<FragmentRecord>> {
        let points = strategy.split_points(self.effective_length)?;
        log::trace!("{}: {} split points", strategy.name(), points.len());
        format::format_points(&self.sequence, &points)
    }

    pub fn default_location(&self) -> HelixResult<Vec<FragmentRecord>> {
        self.split_with(&DefaultLocation)
    }

    pub fn center_location(&self) -> HelixResult<Vec<FragmentRecord>> {
        self.split_with(&CenterLocation)
    }

    pub fn central_region(&self) -> HelixResult<Vec<FragmentRecord>> {
        self.split_with(&CentralRegion)
    }

    pub fn along_helix(&self) -> HelixResult<Vec<FragmentRecord>> {
        self.split_with(&AlongHelix)
    }

    /// Three-segment records with the middle insert carved from `middle`
    pub fn double_double(&self, middle: &HelixPair) -> HelixResult<Vec<SixPartRecord>> {
        let points = double_double::separation_points(self.effective_length)?;
        format::format_separations(&self.sequence, middle, &points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(side1: &str, side2: &str) -> HelixPair {
        HelixPair::new(side1, side2).unwrap()
    }

    #[test]
    fn test_effective_length() {
        let helix = Helix::new(pair("AAAAAAAA", "TTTTTTTT"), 2).unwrap();
        assert_eq!(helix.effective_length(), 6);

        let helix = Helix::with_total_length(pair("AAAAAAAA", "TTTTTTTT"), 2, 7).unwrap();
        assert_eq!(helix.effective_length(), 5);
    }

    #[test]
    fn test_junction_longer_than_helix() {
        assert_eq!(
            Helix::new(pair("GCG", "CGC"), 4),
            Err(HelixError::NegativeEffectiveLength { length: 3, junction_length: 4 })
        );
    }

    #[test]
    fn test_offset_path() {
        let helix = Helix::new(pair("GATCCAGTCA", "TGACTGGATC"), 3).unwrap();
        // L = 7, floor(7 / 2) = 3
        assert_eq!(helix.helix_one_length_at_offset(0), Ok(3));
        assert_eq!(helix.helix_one_length_at_offset(-3), Ok(0));
        assert_eq!(helix.helix_one_length_at_offset(4), Ok(7));

        let record = helix.split_at_offset(1).unwrap();
        assert_eq!(record.h1_side1, "GATC");
        assert_eq!(record.h2_side1, "TCA");
        assert_eq!(record.h2_side2, "TGA");
        assert_eq!(record.h1_side2, "GATC");
    }

    #[test]
    fn test_offset_out_of_range() {
        let helix = Helix::new(pair("GATCCAGTCA", "TGACTGGATC"), 3).unwrap();
        assert!(matches!(
            helix.split_at_offset(-4),
            Err(HelixError::OffsetOutOfRange { offset: -4, effective_length: 7 })
        ));
        assert!(helix.split_at_offset(5).is_err());
    }

    #[test]
    fn test_total_length_beyond_strands() {
        assert_eq!(
            Helix::with_total_length(pair("GCGC", "GCGC"), 0, 10),
            Err(HelixError::TotalLengthExceedsStrands { total_length: 10, available: 4 })
        );
        assert_eq!(
            Helix::with_total_length(pair("GCGC", "GCGC"), 0, usize::MAX),
            Err(HelixError::TotalLengthExceedsStrands { total_length: usize::MAX, available: 4 })
        );

        let helix = Helix::with_total_length(pair("GCGC", "GCGC"), 0, 4).unwrap();
        assert_eq!(helix.effective_length(), 4);
    }
}
