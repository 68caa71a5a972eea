//! Fragment formatter
//!
//! Carves the strands of a helix into fragment records for a set of split
//! points. Strands are antiparallel, so the end of the helix nearest the
//! junction-adjacent helix one is a prefix of `side1` but a suffix of
//! `side2`; helix two takes the opposite ends. Everything is prefix/suffix
//! slicing on 5'->3' strings, nothing is reversed.

use crate::error::{HelixError, HelixResult};
use crate::types::{FragmentRecord, HelixPair, SeparationPoint, SixPartRecord, SplitPoint};

/// First `len` bases of a strand
fn prefix(strand: &str, len: usize) -> HelixResult<&str> {
    strand.get(..len).ok_or(HelixError::FragmentOutOfBounds {
        requested: len,
        available: strand.len(),
    })
}

/// Last `len` bases of a strand
fn suffix(strand: &str, len: usize) -> HelixResult<&str> {
    strand
        .len()
        .checked_sub(len)
        .and_then(|start| strand.get(start..))
        .ok_or(HelixError::FragmentOutOfBounds {
            requested: len,
            available: strand.len(),
        })
}

/// Format a single split point into its four fragments
pub fn format_split(helix: &HelixPair, point: SplitPoint) -> HelixResult<FragmentRecord> {
    let helix_one = point.helix_one_length;
    let helix_two = point.helix_two_length()?;

    let record = FragmentRecord {
        h1_side1: prefix(helix.side1(), helix_one)?.to_string(),
        h2_side1: suffix(helix.side1(), helix_two)?.to_string(),
        h2_side2: prefix(helix.side2(), helix_two)?.to_string(),
        h1_side2: suffix(helix.side2(), helix_one)?.to_string(),
    };
    log::debug!("{}", record);

    Ok(record)
}

/// Format split points in order
pub fn format_points(helix: &HelixPair, points: &[SplitPoint]) -> HelixResult<Vec<FragmentRecord>> {
    points.iter().map(|&point| format_split(helix, point)).collect()
}

/// Batch entry point over parallel lists of total and helix-one lengths.
///
/// The two lists must be the same length; nothing is truncated.
pub fn format_helices(
    helix: &HelixPair,
    total_lengths: &[usize],
    helix_one_lengths: &[usize],
) -> HelixResult<Vec<FragmentRecord>> {
    if total_lengths.len() != helix_one_lengths.len() {
        return Err(HelixError::BatchLengthMismatch {
            totals: total_lengths.len(),
            partners: helix_one_lengths.len(),
        });
    }

    let points: Vec<SplitPoint> = total_lengths
        .iter()
        .zip(helix_one_lengths)
        .map(|(&total, &helix_one)| SplitPoint::new(total, helix_one))
        .collect();

    format_points(helix, &points)
}

/// Centered `separation_length` window of the middle helix.
///
/// Returns the side1 and side2 windows; side2 runs antiparallel so its window
/// sits at the mirrored offset.
fn middle_window(middle: &HelixPair, separation_length: usize) -> HelixResult<(&str, &str)> {
    let outer = middle
        .len()
        .checked_sub(separation_length)
        .ok_or(HelixError::SeparationTooLong {
            separation_length,
            available: middle.len(),
        })?;
    let start = outer / 2;
    let mirrored = outer - start;

    let side1 = &middle.side1()[start..start + separation_length];
    let side2 = &middle.side2()[mirrored..mirrored + separation_length];
    Ok((side1, side2))
}

/// Format a three-segment split with the middle insert taken from `middle`
pub fn format_separation(
    helix: &HelixPair,
    middle: &HelixPair,
    point: SeparationPoint,
) -> HelixResult<SixPartRecord> {
    let helix_one = point.break1()?;
    let helix_three = point.helix_three_length()?;
    let (middle_side1, middle_side2) = middle_window(middle, point.separation_length)?;

    let record = SixPartRecord {
        h1_side1: prefix(helix.side1(), helix_one)?.to_string(),
        h2_side1: middle_side1.to_string(),
        h3_side1: suffix(helix.side1(), helix_three)?.to_string(),
        h3_side2: prefix(helix.side2(), helix_three)?.to_string(),
        h2_side2: middle_side2.to_string(),
        h1_side2: suffix(helix.side2(), helix_one)?.to_string(),
    };
    log::debug!("{}", record);

    Ok(record)
}

pub fn format_separations(
    helix: &HelixPair,
    middle: &HelixPair,
    points: &[SeparationPoint],
) -> HelixResult<Vec<SixPartRecord>> {
    points
        .iter()
        .map(|&point| format_separation(helix, middle, point))
        .collect()
}

/// Batch entry point over parallel lists of total and separation lengths
pub fn format_double_double(
    helix: &HelixPair,
    middle: &HelixPair,
    total_lengths: &[usize],
    separation_lengths: &[usize],
) -> HelixResult<Vec<SixPartRecord>> {
    if total_lengths.len() != separation_lengths.len() {
        return Err(HelixError::BatchLengthMismatch {
            totals: total_lengths.len(),
            partners: separation_lengths.len(),
        });
    }

    let points: Vec<SeparationPoint> = total_lengths
        .iter()
        .zip(separation_lengths)
        .map(|(&total, &separation)| SeparationPoint::new(total, separation))
        .collect();

    format_separations(helix, middle, &points)
}
