//! Record difference engine.
//!
//! Compares two run records field by field and produces a structured,
//! deterministic report used by both summary and detailed comparison views.
//!
//! ```ignore
//! use provtrack_core::diff::RecordDifference;
//!
//! let diff = RecordDifference::new(&record_a, &record_b);
//! if diff.report.flags.output_data_differ {
//!     // pair the output files for side-by-side review
//! }
//! ```
//!
//! ## Guarantees
//!
//! - **Purity**: computing a difference performs no I/O, no logging and never
//!   fails; missing collections compare as empty.
//! - **Content addressing**: data files are compared by digest, never by path
//!   or position.
//! - **Explicit absence**: a dependency present on one side only is reported
//!   as absent on the other, never as a default-valued dependency.

pub mod engine;
pub mod model;

pub use engine::{compute_difference, RecordDifference};
pub use model::{DataKeyDelta, DependencyDelta, DiffFlags, DiffReport, LaunchModeChange};
