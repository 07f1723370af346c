//! Record difference computation.
//!
//! The entry point is [`compute_difference`]; [`RecordDifference`] bundles
//! the resulting report with borrowed references to the two records for
//! renderers that need the records' own field values.

use std::collections::{BTreeMap, BTreeSet};

use crate::diff::model::{DataKeyDelta, DependencyDelta, DiffFlags, DiffReport, LaunchModeChange};
use crate::model::{DataKey, Dependency, Executable, Record};

/// A difference report together with the records it was computed from
#[derive(Debug, Clone)]
pub struct RecordDifference<'a> {
    pub record_a: &'a Record,
    pub record_b: &'a Record,
    pub report: DiffReport,
}

impl<'a> RecordDifference<'a> {
    pub fn new(record_a: &'a Record, record_b: &'a Record) -> Self {
        Self {
            record_a,
            record_b,
            report: compute_difference(record_a, record_b),
        }
    }

    pub fn flags(&self) -> &DiffFlags {
        &self.report.flags
    }
}

fn executable_differs(a: Option<&Executable>, b: Option<&Executable>) -> bool {
    match (a, b) {
        (None, None) => false,
        (Some(a), Some(b)) => !a.same_program(b),
        _ => true,
    }
}

fn digest_set(keys: &[DataKey]) -> BTreeSet<&str> {
    keys.iter().map(|k| k.digest.as_str()).collect()
}

/// Compute the digest-based delta between two key lists.
///
/// Returns `(differ, delta)`; the delta is empty whenever the digest sets
/// are equal, regardless of order, paths or repeated digests.
fn data_key_delta(a: &[DataKey], b: &[DataKey]) -> (bool, DataKeyDelta) {
    let set_a = digest_set(a);
    let set_b = digest_set(b);
    if set_a == set_b {
        return (false, DataKeyDelta::default());
    }
    let a_only = a
        .iter()
        .filter(|k| !set_b.contains(k.digest.as_str()))
        .cloned()
        .collect();
    let b_only = b
        .iter()
        .filter(|k| !set_a.contains(k.digest.as_str()))
        .cloned()
        .collect();
    (true, DataKeyDelta { a_only, b_only })
}

fn dependency_identities(deps: &[Dependency]) -> BTreeSet<(&str, &str, &str)> {
    deps.iter().map(Dependency::identity).collect()
}

/// Per-name differences over the union of both records' dependency names.
///
/// If a record lists the same name twice the later entry wins.
fn dependency_differences(a: &[Dependency], b: &[Dependency]) -> BTreeMap<String, DependencyDelta> {
    let by_name_a: BTreeMap<&str, &Dependency> = a.iter().map(|d| (d.name.as_str(), d)).collect();
    let by_name_b: BTreeMap<&str, &Dependency> = b.iter().map(|d| (d.name.as_str(), d)).collect();
    let names: BTreeSet<&str> = by_name_a.keys().chain(by_name_b.keys()).copied().collect();

    let mut out = BTreeMap::new();
    for name in names {
        let delta = match (by_name_a.get(name), by_name_b.get(name)) {
            (Some(a), None) => DependencyDelta::OnlyInA { a: (*a).clone() },
            (None, Some(b)) => DependencyDelta::OnlyInB { b: (*b).clone() },
            (Some(a), Some(b)) if a.identity() != b.identity() => DependencyDelta::Changed {
                a: (*a).clone(),
                b: (*b).clone(),
            },
            _ => continue,
        };
        out.insert(name.to_string(), delta);
    }
    out
}

/// Compare two records field by field.
///
/// Pure and total: never fails, never mutates its inputs. Swapping the
/// arguments swaps the A/B sides of every detail structure and leaves the
/// flags unchanged.
pub fn compute_difference(a: &Record, b: &Record) -> DiffReport {
    let repository_differs = a.repository != b.repository;
    let main_file_differs = a.main_file != b.main_file;
    let version_differs = a.version != b.version;
    let diff_differs = a.diff != b.diff;

    let dependencies_differ =
        dependency_identities(&a.dependencies) != dependency_identities(&b.dependencies);
    let dependency_differences = if dependencies_differ {
        dependency_differences(&a.dependencies, &b.dependencies)
    } else {
        BTreeMap::new()
    };

    let launch_mode_differs = a.launch_mode != b.launch_mode;
    let launch_mode_differences = launch_mode_differs.then(|| LaunchModeChange {
        a: a.launch_mode.clone(),
        b: b.launch_mode.clone(),
    });

    let (input_data_differ, input_data_differences) = data_key_delta(&a.input_data, &b.input_data);
    let (output_data_differ, output_data_differences) =
        data_key_delta(&a.output_data, &b.output_data);

    let flags = DiffFlags {
        executable_differs: executable_differs(a.executable.as_ref(), b.executable.as_ref()),
        code_differs: repository_differs || main_file_differs || version_differs || diff_differs,
        repository_differs,
        main_file_differs,
        version_differs,
        diff_differs,
        dependencies_differ,
        launch_mode_differs,
        input_data_differ,
        output_data_differ,
        script_arguments_differ: a.script_arguments != b.script_arguments,
        // path-keyed, so a literal "a.b" key never collides with a -> b
        parameters_differ: a.parameters.flatten() != b.parameters.flatten(),
    };

    DiffReport {
        record_a: a.label.clone(),
        record_b: b.label.clone(),
        flags,
        dependency_differences,
        launch_mode_differences,
        input_data_differences,
        output_data_differences,
    }
}
