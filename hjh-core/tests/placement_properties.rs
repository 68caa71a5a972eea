use hjh_core::split::{AlongHelix, CenterLocation, CentralRegion, DefaultLocation};
use hjh_core::*;
use proptest::prelude::*;

const BASES: [char; 4] = ['A', 'C', 'G', 'T'];

fn complement(base: char) -> char {
    match base {
        'A' => 'T',
        'T' => 'A',
        'G' => 'C',
        _ => 'G',
    }
}

/// Random duplex of the given length, side2 the reverse complement of side1
fn duplex(length: usize) -> impl Strategy<Value = HelixPair> {
    prop::collection::vec(prop::sample::select(BASES.to_vec()), length).prop_map(|bases| {
        let side1: String = bases.iter().collect();
        let side2: String = bases.iter().rev().map(|&b| complement(b)).collect();
        HelixPair::new(side1, side2).unwrap()
    })
}

fn helix_and_junction() -> impl Strategy<Value = (HelixPair, usize)> {
    (0usize..30).prop_flat_map(|length| (duplex(length), 0..=length))
}

/// Helix with a total length at most the strand length, and a junction that fits
fn helix_with_slack() -> impl Strategy<Value = (HelixPair, usize, usize)> {
    (0usize..30).prop_flat_map(|length| {
        (duplex(length), 0..=length)
            .prop_flat_map(|(pair, total)| (Just(pair), 0..=total, Just(total)))
    })
}

/// Junction leaving room for the central region's two extra bases
fn central_region_helix() -> impl Strategy<Value = (HelixPair, usize)> {
    (5usize..30).prop_flat_map(|length| (duplex(length), 2..=length - 3))
}

fn check_four_part(records: &[FragmentRecord], points: &[SplitPoint]) {
    assert_eq!(records.len(), points.len());
    for (record, point) in records.iter().zip(points) {
        let k = point.helix_one_length;
        let t = point.total_length;
        assert_eq!(record.h1_side1.len(), k);
        assert_eq!(record.h1_side2.len(), k);
        assert_eq!(record.h2_side1.len(), t - k);
        assert_eq!(record.h2_side2.len(), t - k);
        assert_eq!(record.total_length(), t);
    }
}

proptest! {
    #[test]
    fn four_part_lengths_match_split_points((pair, junction) in helix_and_junction()) {
        let helix = Helix::new(pair, junction).unwrap();
        let l = helix.effective_length();

        let strategies: Vec<Box<dyn SplitStrategy>> = vec![
            Box::new(DefaultLocation),
            Box::new(CenterLocation),
            Box::new(AlongHelix),
        ];
        for strategy in strategies {
            let points = strategy.split_points(l).unwrap();
            let records = helix.split_with(strategy.as_ref()).unwrap();
            check_four_part(&records, &points);
        }
    }

    #[test]
    fn shortened_helix_lengths_match_split_points((pair, junction, total) in helix_with_slack()) {
        let helix = Helix::with_total_length(pair.clone(), junction, total).unwrap();
        let l = helix.effective_length();
        prop_assert_eq!(l, total - junction);

        let strategies: Vec<Box<dyn SplitStrategy>> = vec![
            Box::new(DefaultLocation),
            Box::new(CenterLocation),
            Box::new(AlongHelix),
        ];
        for strategy in strategies {
            let points = strategy.split_points(l).unwrap();
            let records = helix.split_with(strategy.as_ref()).unwrap();
            check_four_part(&records, &points);
            for record in &records {
                prop_assert!(pair.side1().starts_with(&record.h1_side1));
                prop_assert!(pair.side2().starts_with(&record.h2_side2));
            }
        }
    }

    #[test]
    fn total_length_beyond_strands_is_rejected(length in 0usize..30, extra in 1usize..10) {
        let pair = HelixPair::new("A".repeat(length), "T".repeat(length)).unwrap();
        prop_assert_eq!(
            Helix::with_total_length(pair, 0, length + extra),
            Err(HelixError::TotalLengthExceedsStrands { total_length: length + extra, available: length })
        );
    }

    #[test]
    fn central_region_records_match_split_points((pair, junction) in central_region_helix()) {
        let helix = Helix::new(pair, junction).unwrap();
        let l = helix.effective_length();

        let points = CentralRegion.split_points(l).unwrap();
        let records = helix.central_region().unwrap();
        check_four_part(&records, &points);
    }

    #[test]
    fn along_helix_sweeps_every_position((pair, junction) in helix_and_junction()) {
        let helix = Helix::new(pair, junction).unwrap();
        let l = helix.effective_length();
        let records = helix.along_helix().unwrap();

        prop_assert_eq!(records.len(), l + 1);
        for (k, record) in records.iter().enumerate() {
            prop_assert_eq!(record.helix_one_length(), k);
        }
    }

    #[test]
    fn center_location_rounds_up((pair, junction) in helix_and_junction()) {
        let helix = Helix::new(pair, junction).unwrap();
        let l = helix.effective_length();
        let records = helix.center_location().unwrap();

        prop_assert_eq!(records.len(), 1);
        prop_assert_eq!(records[0].helix_one_length(), (l + 1) / 2);
    }

    #[test]
    fn default_location_parity((pair, junction) in helix_and_junction()) {
        let helix = Helix::new(pair, junction).unwrap();
        let l = helix.effective_length();
        let lengths: Vec<usize> = helix
            .default_location()
            .unwrap()
            .iter()
            .map(FragmentRecord::helix_one_length)
            .collect();

        if l % 2 == 0 {
            prop_assert_eq!(lengths, vec![l / 2]);
        } else {
            prop_assert_eq!(lengths, vec![l / 2, l / 2 + 1]);
        }
    }

    #[test]
    fn central_region_groups_by_total(l in 3usize..200) {
        let points = CentralRegion.split_points(l).unwrap();
        let expected = if l % 2 == 0 { 13 } else { 12 };
        prop_assert_eq!(points.len(), expected);

        let totals: Vec<usize> = points.iter().map(|p| p.total_length).collect();
        let mut sorted = totals.clone();
        sorted.sort_unstable();
        prop_assert_eq!(&totals, &sorted);
        prop_assert_eq!(totals[0], l - 2);
        prop_assert_eq!(totals[totals.len() - 1], l + 2);
        for point in &points {
            prop_assert!(point.helix_one_length <= point.total_length);
        }
    }

    #[test]
    fn fragments_pair_back_into_helix(pair in (0usize..30).prop_flat_map(duplex)) {
        // With no slack, the fragments on each strand rebuild that strand
        let helix = Helix::new(pair.clone(), 0).unwrap();
        for record in helix.along_helix().unwrap() {
            prop_assert_eq!(format!("{}{}", record.h1_side1, record.h2_side1), pair.side1());
            prop_assert_eq!(format!("{}{}", record.h2_side2, record.h1_side2), pair.side2());
        }
    }

    #[test]
    fn double_double_segments_add_up(length in 9usize..40, junction in 0usize..3) {
        let pair = HelixPair::new("G".repeat(length), "C".repeat(length)).unwrap();
        let middle = HelixPair::new("AT".repeat(6), "AT".repeat(6)).unwrap();
        let helix = Helix::new(pair, junction).unwrap();
        let l = helix.effective_length();

        let records = helix.double_double(&middle).unwrap();
        prop_assert_eq!(records.len(), 11);
        for (i, record) in records.iter().enumerate() {
            let total = if i < 5 { l } else { l + 2 };
            prop_assert_eq!(record.total_length(), total);
            prop_assert_eq!(record.h1_side1.len(), (total - record.separation_length()) / 2);
        }
    }
}
