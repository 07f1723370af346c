//! Longest-matching-block similarity ratio between two strings.
//!
//! The ratio is `2 * M / T`, where `T` is the total number of characters in
//! both strings and `M` the number of characters covered by matching blocks.
//! Blocks are found by taking the longest common contiguous block, then
//! recursing on the pieces to its left and to its right. Identical strings
//! score `1.0`, strings without a common character score `0.0`.

use std::collections::HashMap;

/// Second sequences at least this long get "popular" characters pruned from
/// the block index.
const AUTOJUNK_MIN_LEN: usize = 200;

/// A contiguous run `a[a_start..a_start + size] == b[b_start..b_start + size]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MatchingBlock {
    a_start: usize,
    b_start: usize,
    size: usize,
}

struct BlockMatcher<'s> {
    a: &'s [char],
    b: &'s [char],
    /// Positions of each character of `b`, ascending
    b_index: HashMap<char, Vec<usize>>,
}

impl<'s> BlockMatcher<'s> {
    fn new(a: &'s [char], b: &'s [char]) -> Self {
        let mut b_index: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, c) in b.iter().enumerate() {
            b_index.entry(*c).or_default().push(j);
        }

        if b.len() >= AUTOJUNK_MIN_LEN {
            let limit = b.len() / 100 + 1;
            b_index.retain(|_, positions| positions.len() <= limit);
        }

        Self { a, b, b_index }
    }

    /// Longest matching block within `a[a_lo..a_hi]` and `b[b_lo..b_hi]`.
    ///
    /// Among maximal blocks the one starting earliest in `a` wins, then the
    /// one starting earliest in `b`. Returns a block of size 0 if nothing
    /// matches.
    fn longest_match(&self, a_lo: usize, a_hi: usize, b_lo: usize, b_hi: usize) -> MatchingBlock {
        let mut best = MatchingBlock {
            a_start: a_lo,
            b_start: b_lo,
            size: 0,
        };

        // run length of the match ending at (i - 1, j), keyed by j
        let mut prev_run: HashMap<usize, usize> = HashMap::new();
        for i in a_lo..a_hi {
            let mut run: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b_index.get(&self.a[i]) {
                for &j in positions {
                    if j < b_lo {
                        continue;
                    }
                    if j >= b_hi {
                        break;
                    }
                    let k = j
                        .checked_sub(1)
                        .and_then(|prev_j| prev_run.get(&prev_j))
                        .copied()
                        .unwrap_or(0)
                        + 1;
                    run.insert(j, k);
                    if k > best.size {
                        best = MatchingBlock {
                            a_start: i + 1 - k,
                            b_start: j + 1 - k,
                            size: k,
                        };
                    }
                }
            }
            prev_run = run;
        }

        // Characters pruned from the index can still extend a block on
        // either side when they are equal.
        while best.a_start > a_lo
            && best.b_start > b_lo
            && self.a[best.a_start - 1] == self.b[best.b_start - 1]
        {
            best.a_start -= 1;
            best.b_start -= 1;
            best.size += 1;
        }
        while best.a_start + best.size < a_hi
            && best.b_start + best.size < b_hi
            && self.a[best.a_start + best.size] == self.b[best.b_start + best.size]
        {
            best.size += 1;
        }

        best
    }

    fn matching_blocks(&self) -> Vec<MatchingBlock> {
        let mut pending = vec![(0, self.a.len(), 0, self.b.len())];
        let mut blocks = Vec::new();
        while let Some((a_lo, a_hi, b_lo, b_hi)) = pending.pop() {
            let block = self.longest_match(a_lo, a_hi, b_lo, b_hi);
            if block.size == 0 {
                continue;
            }
            if a_lo < block.a_start && b_lo < block.b_start {
                pending.push((a_lo, block.a_start, b_lo, block.b_start));
            }
            let a_end = block.a_start + block.size;
            let b_end = block.b_start + block.size;
            if a_end < a_hi && b_end < b_hi {
                pending.push((a_end, a_hi, b_end, b_hi));
            }
            blocks.push(block);
        }
        blocks.sort_by_key(|m| (m.a_start, m.b_start));
        blocks
    }
}

/// Similarity of `a` and `b` in `[0, 1]`, compared character by character.
///
/// Not symmetric in general: the block search is anchored on `a`, so
/// `similarity_ratio(a, b)` and `similarity_ratio(b, a)` can differ when
/// several equally long blocks compete.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matched: usize = BlockMatcher::new(&a, &b)
        .matching_blocks()
        .iter()
        .map(|m| m.size)
        .sum();
    2.0 * matched as f64 / total as f64
}
