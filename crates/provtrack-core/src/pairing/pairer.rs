//! Greedy best-similarity pairing.
//!
//! Each round scores every remaining (A, B) pair by basename similarity and
//! moves the best pair into the matches, until the best remaining score is
//! no longer strictly above the threshold or one side runs out. Inputs are
//! a single run's output files, so an optimal assignment is not needed: the
//! threshold keeps spurious pairs out and a human reviews the result.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::model::DataKey;
use crate::pairing::similarity::similarity_ratio;

/// Similarity a pair must strictly exceed to be matched
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.7;

/// Result of pairing two data-file lists
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataFilePairing {
    /// `(file of A, file of B)` in the order the pairs were chosen
    pub matches: Vec<(DataKey, DataKey)>,
    /// Files of A left unpaired, in input order
    pub unmatched_a: Vec<DataKey>,
    /// Files of B left unpaired, in input order
    pub unmatched_b: Vec<DataKey>,
}

/// Pairwise basename similarities, computed once per pairing
struct ScoreTable {
    scores: Vec<Vec<f64>>,
    alive_a: Vec<bool>,
    alive_b: Vec<bool>,
}

impl ScoreTable {
    fn new(files_a: &[DataKey], files_b: &[DataKey]) -> Self {
        let scores = files_a
            .iter()
            .map(|x| {
                files_b
                    .iter()
                    .map(|y| similarity_ratio(x.basename(), y.basename()))
                    .collect()
            })
            .collect();
        Self {
            scores,
            alive_a: vec![true; files_a.len()],
            alive_b: vec![true; files_b.len()],
        }
    }

    /// Highest-scoring remaining `(i, j, score)`.
    ///
    /// Scans A in order and, for each A, B in order; the first pair reaching
    /// the maximum wins ties. `None` once either side is exhausted.
    fn best_remaining(&self) -> Option<(usize, usize, f64)> {
        let mut best: Option<(usize, usize, f64)> = None;
        for (i, row) in self.scores.iter().enumerate() {
            if !self.alive_a[i] {
                continue;
            }
            for (j, &score) in row.iter().enumerate() {
                if !self.alive_b[j] {
                    continue;
                }
                let better = match best {
                    None => true,
                    Some((_, _, best_score)) => score > best_score,
                };
                if better {
                    best = Some((i, j, score));
                }
            }
        }
        best
    }

    fn take(&mut self, i: usize, j: usize) {
        self.alive_a[i] = false;
        self.alive_b[j] = false;
    }
}

/// Pair files of two runs that look like "the same file, different run".
///
/// A pair is accepted only if its similarity is strictly greater than
/// `threshold`; a score exactly at the threshold is rejected, and so is
/// every pair when `threshold` is NaN. The input slices are not modified.
pub fn pair_datafiles(files_a: &[DataKey], files_b: &[DataKey], threshold: f64) -> DataFilePairing {
    let mut table = ScoreTable::new(files_a, files_b);
    let mut matches = Vec::new();

    while let Some((i, j, score)) = table.best_remaining() {
        if score.partial_cmp(&threshold) != Some(Ordering::Greater) {
            break;
        }
        table.take(i, j);
        matches.push((files_a[i].clone(), files_b[j].clone()));
    }

    let unmatched_a = files_a
        .iter()
        .zip(&table.alive_a)
        .filter(|(_, alive)| **alive)
        .map(|(k, _)| k.clone())
        .collect();
    let unmatched_b = files_b
        .iter()
        .zip(&table.alive_b)
        .filter(|(_, alive)| **alive)
        .map(|(k, _)| k.clone())
        .collect();

    DataFilePairing {
        matches,
        unmatched_a,
        unmatched_b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(path: &str) -> DataKey {
        DataKey::new(path, format!("digest-of-{}", path))
    }

    #[test]
    fn test_empty_inputs() {
        let pairing = pair_datafiles(&[], &[], DEFAULT_SIMILARITY_THRESHOLD);
        assert_eq!(pairing, DataFilePairing::default());

        let a = vec![key("a.csv")];
        let pairing = pair_datafiles(&a, &[], DEFAULT_SIMILARITY_THRESHOLD);
        assert!(pairing.matches.is_empty());
        assert_eq!(pairing.unmatched_a, a);
    }

    #[test]
    fn test_ties_go_to_first_scanned_pair() {
        // Both B files are equally similar to both A files
        let a = vec![key("x/data.csv"), key("y/data.csv")];
        let b = vec![key("p/data.csv"), key("q/data.csv")];
        let pairing = pair_datafiles(&a, &b, DEFAULT_SIMILARITY_THRESHOLD);
        let paths: Vec<(&str, &str)> = pairing
            .matches
            .iter()
            .map(|(x, y)| (x.path.as_str(), y.path.as_str()))
            .collect();
        assert_eq!(paths, vec![("x/data.csv", "p/data.csv"), ("y/data.csv", "q/data.csv")]);
    }

    #[test]
    fn test_nan_threshold_matches_nothing() {
        let a = vec![key("out.csv")];
        let b = vec![key("out.csv")];
        let pairing = pair_datafiles(&a, &b, f64::NAN);
        assert!(pairing.matches.is_empty());
    }
}
