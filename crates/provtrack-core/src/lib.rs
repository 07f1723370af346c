//! Provtrack Core - record comparison kernel
//!
//! This crate provides the data structures and operations for comparing
//! recorded simulation runs, including:
//! - The record model (code version, dependencies, parameters, launch mode,
//!   content-addressed input and output data)
//! - Field-level difference reports between two records
//! - Greedy name-similarity pairing of data files between two runs
//! - Comparison orchestration over a record store seam
//! - Configuration, error and logging facilities

pub mod compare;
pub mod config;
pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod pairing;
pub mod store;

// Used by the logging macros
pub use provtrack_core_types;

// Re-export commonly used types
pub use compare::{compare, compare_records, RecordComparison};
pub use config::ComparisonConfig;
pub use diff::{compute_difference, DiffFlags, DiffReport, RecordDifference};
pub use errors::{ExError, ExErrorKind, ProvenanceError, Result};
pub use model::{DataKey, Record};
pub use pairing::{pair_datafiles, DataFilePairing};
pub use store::{InMemoryRecordStore, RecordStore};
