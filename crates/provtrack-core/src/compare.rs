//! Record comparison
//!
//! Looks two records up, diffs them and, when their input or output data
//! sets diverge, pairs the diverging files by name so a reviewer can see
//! which output of one run corresponds to which output of the other.
//!
//! ## Logging Ownership
//!
//! This layer owns lifecycle logging (`log_op_start!` / `log_op_end!` /
//! `log_op_error!`). The diff engine and the pairer emit nothing.

use serde::{Deserialize, Serialize};
use std::time::Instant;

use provtrack_core_types::RequestId;

use crate::config::ComparisonConfig;
use crate::diff::{compute_difference, DiffReport, RecordDifference};
use crate::errors::{ExError, Result};
use crate::model::Record;
use crate::pairing::{pair_datafiles, DataFilePairing};
use crate::store::RecordStore;
use crate::{log_op_end, log_op_error, log_op_start};

/// Both records, their difference report and file pairings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordComparison {
    pub record_a: Record,
    pub record_b: Record,
    pub report: DiffReport,
    /// Set only when the input data sets differ
    pub input_data_pairs: Option<DataFilePairing>,
    /// Set only when the output data sets differ
    pub output_data_pairs: Option<DataFilePairing>,
}

impl RecordComparison {
    /// Borrowing view for renderers
    pub fn difference(&self) -> RecordDifference<'_> {
        RecordDifference {
            record_a: &self.record_a,
            record_b: &self.record_b,
            report: self.report.clone(),
        }
    }
}

/// Compare two already-materialized records.
pub fn compare(a: &Record, b: &Record, config: &ComparisonConfig) -> RecordComparison {
    let report = compute_difference(a, b);
    let threshold = config.similarity_threshold;

    let input_data_pairs = report
        .flags
        .input_data_differ
        .then(|| pair_datafiles(&a.input_data, &b.input_data, threshold));
    let output_data_pairs = report
        .flags
        .output_data_differ
        .then(|| pair_datafiles(&a.output_data, &b.output_data, threshold));

    for (data, keys_a, keys_b, pairs) in [
        ("input", &a.input_data, &b.input_data, &input_data_pairs),
        ("output", &a.output_data, &b.output_data, &output_data_pairs),
    ] {
        if let Some(pairs) = pairs {
            tracing::debug!(
                record_a = %a.label,
                record_b = %b.label,
                data,
                files_a = keys_a.len(),
                files_b = keys_b.len(),
                matches = pairs.matches.len(),
                "paired data files"
            );
        }
    }

    RecordComparison {
        record_a: a.clone(),
        record_b: b.clone(),
        report,
        input_data_pairs,
        output_data_pairs,
    }
}

/// Look up `label_a` and `label_b` in `project` and compare them.
///
/// # Errors
///
/// Returns `InvalidThreshold` if `config` is out of range and
/// `RecordNotFound` if either record is missing from the store.
pub fn compare_records<S: RecordStore + ?Sized>(
    store: &S,
    project: &str,
    label_a: &str,
    label_b: &str,
    config: &ComparisonConfig,
) -> Result<RecordComparison> {
    let request_id = RequestId::new();
    log_op_start!(
        "compare_records",
        request_id = request_id.as_str(),
        project = project,
        record_a = label_a,
        record_b = label_b
    );
    let start = Instant::now();

    let result = compare_records_impl(store, project, label_a, label_b, config).map_err(|e| {
        let ex_err = ExError::from(e.clone())
            .with_op("compare_records")
            .with_project(project)
            .with_request_id(request_id.clone());
        log_op_error!(
            "compare_records",
            ex_err,
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = request_id.as_str()
        );
        e
    })?;

    log_op_end!(
        "compare_records",
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = request_id.as_str(),
        differ = result.report.any_differ()
    );
    Ok(result)
}

fn compare_records_impl<S: RecordStore + ?Sized>(
    store: &S,
    project: &str,
    label_a: &str,
    label_b: &str,
    config: &ComparisonConfig,
) -> Result<RecordComparison> {
    config.validate()?;
    let a = store.get_record(project, label_a)?;
    let b = store.get_record(project, label_b)?;
    Ok(compare(&a, &b, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DataKey;

    #[test]
    fn test_pairings_absent_when_data_equal() {
        let mut a = Record::new("a");
        let mut b = Record::new("b");
        a.output_data = vec![DataKey::new("out.csv", "d1")];
        b.output_data = vec![DataKey::new("other/out.csv", "d1")];
        let cmp = compare(&a, &b, &ComparisonConfig::default());
        assert!(cmp.input_data_pairs.is_none());
        assert!(cmp.output_data_pairs.is_none());
    }

    #[test]
    fn test_output_pairing_when_data_differ() {
        let mut a = Record::new("a");
        let mut b = Record::new("b");
        a.output_data = vec![DataKey::new("out/results.csv", "d1")];
        b.output_data = vec![DataKey::new("out/results.csv", "d2")];
        let cmp = compare(&a, &b, &ComparisonConfig::default());
        let pairs = cmp.output_data_pairs.expect("outputs differ");
        assert_eq!(pairs.matches.len(), 1);
        assert!(cmp.input_data_pairs.is_none());
    }

    #[test]
    fn test_difference_view_borrows_records() {
        let cmp = compare(&Record::new("a"), &Record::new("b"), &ComparisonConfig::default());
        let view = cmp.difference();
        assert_eq!(view.record_a.label, "a");
        assert_eq!(view.report, cmp.report);
    }
}
