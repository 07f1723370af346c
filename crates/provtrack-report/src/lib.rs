//! Plain-text rendering of record comparisons and record listings.
//!
//! Rendering is informational only; nothing here feeds back into the
//! structured [`DiffReport`](provtrack_core::DiffReport).

pub mod duration;
pub mod pairing;
pub mod record_text;
pub mod text_diff;

pub use duration::human_readable_duration;
pub use pairing::render_pairing;
pub use record_text::{
    render_csv, render_csv_labels, render_labels, render_output_files, render_records_long,
    render_table, RecordField,
};
pub use text_diff::{render_comparison, render_long, render_short};
