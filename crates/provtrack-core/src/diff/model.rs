//! Record difference output types.
//!
//! Maps are `BTreeMap` so serialized reports are deterministic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::{DataKey, Dependency, LaunchMode};

/// Field-level difference flags between record A and record B
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffFlags {
    /// Executable name or version differs
    pub executable_differs: bool,
    /// Any of repository, main file, version or uncommitted diff differs
    pub code_differs: bool,
    pub repository_differs: bool,
    pub main_file_differs: bool,
    pub version_differs: bool,
    /// The uncommitted-changes patch text differs
    pub diff_differs: bool,
    pub dependencies_differ: bool,
    pub launch_mode_differs: bool,
    /// Input digest sets differ
    pub input_data_differ: bool,
    /// Output digest sets differ
    pub output_data_differ: bool,
    pub script_arguments_differ: bool,
    /// Flattened parameter maps differ
    pub parameters_differ: bool,
}

impl DiffFlags {
    /// True if any flag is set
    pub fn any(&self) -> bool {
        self.executable_differs
            || self.code_differs
            || self.dependencies_differ
            || self.launch_mode_differs
            || self.input_data_differ
            || self.output_data_differ
            || self.script_arguments_differ
            || self.parameters_differ
    }
}

/// How one named dependency differs between the two records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DependencyDelta {
    /// Dependency of A but not of B
    OnlyInA { a: Dependency },
    /// Dependency of B but not of A
    OnlyInB { b: Dependency },
    /// Present in both with a different version or diff
    Changed { a: Dependency, b: Dependency },
}

impl DependencyDelta {
    /// A's side, `None` when A does not have the dependency
    pub fn a(&self) -> Option<&Dependency> {
        match self {
            DependencyDelta::OnlyInA { a } | DependencyDelta::Changed { a, .. } => Some(a),
            DependencyDelta::OnlyInB { .. } => None,
        }
    }

    /// B's side, `None` when B does not have the dependency
    pub fn b(&self) -> Option<&Dependency> {
        match self {
            DependencyDelta::OnlyInB { b } | DependencyDelta::Changed { b, .. } => Some(b),
            DependencyDelta::OnlyInA { .. } => None,
        }
    }

    pub fn pair(&self) -> (Option<&Dependency>, Option<&Dependency>) {
        (self.a(), self.b())
    }
}

/// Launch modes of both records, reported only when they differ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchModeChange {
    pub a: LaunchMode,
    pub b: LaunchMode,
}

/// Data keys whose digest has no counterpart on the other side
///
/// Each list keeps the order of the record it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataKeyDelta {
    pub a_only: Vec<DataKey>,
    pub b_only: Vec<DataKey>,
}

impl DataKeyDelta {
    pub fn is_empty(&self) -> bool {
        self.a_only.is_empty() && self.b_only.is_empty()
    }
}

/// The structured difference between two records.
///
/// All detail structures are present even when nothing differs (empty map,
/// `None`, empty deltas) so consumers can process reports uniformly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffReport {
    /// Label of record A
    pub record_a: String,
    /// Label of record B
    pub record_b: String,
    pub flags: DiffFlags,
    /// Keyed by dependency name; only names whose entries differ appear
    pub dependency_differences: BTreeMap<String, DependencyDelta>,
    pub launch_mode_differences: Option<LaunchModeChange>,
    pub input_data_differences: DataKeyDelta,
    pub output_data_differences: DataKeyDelta,
}

impl DiffReport {
    /// True if the records differ in any compared field
    pub fn any_differ(&self) -> bool {
        self.flags.any()
    }
}
