use proptest::prelude::*;

use provtrack_core::model::DataKey;
use provtrack_core::pairing::{pair_datafiles, similarity_ratio};

fn files(prefix: &'static str) -> impl Strategy<Value = Vec<DataKey>> {
    prop::collection::vec("[a-d_]{1,6}\\.(csv|h5)", 0..6).prop_map(move |names| {
        names
            .into_iter()
            .enumerate()
            .map(|(i, name)| DataKey::new(format!("{}/{}", prefix, name), format!("{}{}", prefix, i)))
            .collect()
    })
}

#[test]
fn test_best_pair_is_taken_first() {
    // results_1 is closer to results_1b than to results_2
    let a = vec![DataKey::new("results_1.csv", "a1")];
    let b = vec![
        DataKey::new("results_2.csv", "b1"),
        DataKey::new("results_1b.csv", "b2"),
    ];

    let pairing = pair_datafiles(&a, &b, 0.7);

    assert_eq!(pairing.matches.len(), 1);
    assert_eq!(pairing.matches[0].1.path, "results_1b.csv");
    assert_eq!(pairing.unmatched_b[0].path, "results_2.csv");
}

#[test]
fn test_only_basenames_are_compared() {
    let a = vec![DataKey::new("a/very/deep/directory/tree/out.csv", "a1")];
    let b = vec![DataKey::new("out.csv", "b1")];

    assert_eq!(pair_datafiles(&a, &b, 0.99).matches.len(), 1);
}

#[test]
fn test_threshold_zero_pairs_anything_with_a_common_character() {
    let a = vec![DataKey::new("abc", "a1")];
    let b = vec![DataKey::new("xyc", "b1"), DataKey::new("zzz", "b2")];

    let pairing = pair_datafiles(&a, &b, 0.0);

    assert_eq!(pairing.matches.len(), 1);
    assert_eq!(pairing.unmatched_b, vec![b[1].clone()]);
}

#[test]
fn test_threshold_one_pairs_nothing() {
    let a = vec![DataKey::new("same.csv", "a1")];
    let b = vec![DataKey::new("same.csv", "b1")];

    assert!(pair_datafiles(&a, &b, 1.0).matches.is_empty());
}

proptest! {
    #[test]
    fn counts_are_conserved(a in files("run1"), b in files("run2"), threshold in 0.0f64..1.0) {
        let pairing = pair_datafiles(&a, &b, threshold);
        prop_assert!(pairing.matches.len() <= a.len().min(b.len()));
        prop_assert_eq!(pairing.matches.len() + pairing.unmatched_a.len(), a.len());
        prop_assert_eq!(pairing.matches.len() + pairing.unmatched_b.len(), b.len());
    }

    #[test]
    fn every_match_is_strictly_above_threshold(a in files("run1"), b in files("run2"), threshold in 0.0f64..1.0) {
        for (x, y) in pair_datafiles(&a, &b, threshold).matches {
            prop_assert!(similarity_ratio(x.basename(), y.basename()) > threshold);
        }
    }

    #[test]
    fn raising_threshold_keeps_a_prefix_of_matches(
        a in files("run1"),
        b in files("run2"),
        low in 0.0f64..1.0,
        delta in 0.0f64..0.5,
    ) {
        let high = (low + delta).min(1.0);
        let loose = pair_datafiles(&a, &b, low).matches;
        let strict = pair_datafiles(&a, &b, high).matches;
        prop_assert!(strict.len() <= loose.len());
        prop_assert_eq!(&strict[..], &loose[..strict.len()]);
    }

    #[test]
    fn similarity_is_bounded(x in "\\PC{0,20}", y in "\\PC{0,20}") {
        let r = similarity_ratio(&x, &y);
        prop_assert!((0.0..=1.0).contains(&r));
        prop_assert_eq!(similarity_ratio(&x, &x), 1.0);
    }
}
