//! Error types for helix splitting

/// Result type for helix operations
pub type HelixResult<T> = Result<T, HelixError>;

/// Errors that can occur while validating a helix or carving fragments from it
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HelixError {
    #[error("Helix sides are not of equal length: side1 has {side1} bases, side2 has {side2}")]
    StrandLengthMismatch { side1: usize, side2: usize },

    #[error("Invalid sequence: {0}")]
    InvalidSequence(String),

    #[error("Junction of length {junction_length} does not fit in a helix of length {length}")]
    NegativeEffectiveLength { length: usize, junction_length: usize },

    #[error("Total length {total_length} exceeds the {available} bases of the helix strands")]
    TotalLengthExceedsStrands { total_length: usize, available: usize },

    #[error("Offset {offset} places the junction outside a helix of effective length {effective_length}")]
    OffsetOutOfRange { offset: i64, effective_length: usize },

    #[error("Invalid split: helix one of length {helix_one_length} exceeds total length {total_length}")]
    InvalidSplit { total_length: usize, helix_one_length: usize },

    #[error("Fragment of length {requested} requested from a strand of length {available}")]
    FragmentOutOfBounds { requested: usize, available: usize },

    #[error("Strategy {strategy} needs an effective length of at least {minimum}, got {actual}")]
    EffectiveLengthTooShort {
        strategy: &'static str,
        minimum: usize,
        actual: usize,
    },

    #[error("Strategy {strategy} cannot extend an effective length of {actual}")]
    EffectiveLengthTooLong { strategy: &'static str, actual: usize },

    #[error("Separation of length {separation_length} does not fit in {available} bases")]
    SeparationTooLong { separation_length: usize, available: usize },

    #[error("Batch inputs differ in length: {totals} total lengths vs {partners} partner lengths")]
    BatchLengthMismatch { totals: usize, partners: usize },

    #[error("Three-segment placement requires a middle helix")]
    MissingMiddleHelix,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = HelixError::StrandLengthMismatch { side1: 3, side2: 4 };
        assert_eq!(
            err.to_string(),
            "Helix sides are not of equal length: side1 has 3 bases, side2 has 4"
        );

        let err = HelixError::BatchLengthMismatch { totals: 2, partners: 1 };
        assert!(err.to_string().contains("2 total lengths"));

        let err = HelixError::TotalLengthExceedsStrands { total_length: 10, available: 4 };
        assert_eq!(err.to_string(), "Total length 10 exceeds the 4 bases of the helix strands");
    }
}
