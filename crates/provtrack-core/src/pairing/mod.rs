//! Filename-similarity pairing of data files from two runs.
//!
//! When two runs produce overlapping but not identical output sets (a file
//! renamed, a directory reorganized), digest comparison alone shows only
//! "removed" and "added" files. The pairer proposes which file of run A
//! corresponds to which file of run B so the two can be reviewed side by
//! side.

pub mod pairer;
pub mod similarity;

pub use pairer::{pair_datafiles, DataFilePairing, DEFAULT_SIMILARITY_THRESHOLD};
pub use similarity::similarity_ratio;
