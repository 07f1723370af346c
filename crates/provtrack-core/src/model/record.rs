use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::data_key::DataKey;
use super::launch_mode::LaunchMode;
use super::parameters::ParameterSet;

/// The program that ran the main file (interpreter or compiled binary)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Executable {
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub options: String,
}

impl Executable {
    pub fn new(name: impl Into<String>, version: Option<&str>) -> Self {
        Self {
            name: name.into(),
            path: String::new(),
            version: version.map(str::to_string),
            options: String::new(),
        }
    }

    /// Same program, judged by name and version only.
    ///
    /// Two runs of `python 3.11` from different install paths count as the
    /// same executable.
    pub fn same_program(&self, other: &Executable) -> bool {
        self.name == other.name && self.version == other.version
    }
}

impl std::fmt::Display for Executable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (version: {})",
            self.name,
            self.version.as_deref().unwrap_or("unknown")
        )?;
        if !self.path.is_empty() {
            write!(f, " at {}", self.path)?;
        }
        Ok(())
    }
}

/// Version-control repository holding the main file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub url: String,
    /// VCS backend, e.g. `git`
    #[serde(default)]
    pub kind: String,
}

impl Repository {
    pub fn new(url: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            kind: kind.into(),
        }
    }
}

impl std::fmt::Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.url)
    }
}

/// A code module imported by the main file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub version: String,
    /// Uncommitted changes to the module, empty if none
    #[serde(default)]
    pub diff: String,
    /// Language the module belongs to, e.g. `python`
    #[serde(default)]
    pub module: String,
}

impl Dependency {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: String::new(),
            version: version.into(),
            diff: String::new(),
            module: String::new(),
        }
    }

    pub fn with_diff(mut self, diff: impl Into<String>) -> Self {
        self.diff = diff.into();
        self
    }

    /// The (name, version, diff) triple that decides whether two
    /// dependencies are the same
    pub fn identity(&self) -> (&str, &str, &str) {
        (&self.name, &self.version, &self.diff)
    }
}

/// Description of one machine the run executed on
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformInformation {
    pub architecture_bits: String,
    pub architecture_linkage: String,
    pub machine: String,
    pub network_name: String,
    pub ip_addr: String,
    pub processor: String,
    pub release: String,
    pub system_name: String,
    pub version: String,
}

/// Stored metadata describing one execution of a computational experiment
///
/// Owned by the record store; the comparison code only reads it. Optional
/// collections default to empty when absent from a stored document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique within `project`
    pub label: String,

    #[serde(default)]
    pub project: String,

    #[serde(default)]
    pub executable: Option<Executable>,

    #[serde(default)]
    pub repository: Option<Repository>,

    #[serde(default)]
    pub main_file: String,

    /// Committed version (revision id) of the main file's repository
    #[serde(default)]
    pub version: String,

    /// Uncommitted changes at launch time, empty if the working copy was clean
    #[serde(default)]
    pub diff: String,

    #[serde(default)]
    pub dependencies: Vec<Dependency>,

    #[serde(default)]
    pub parameters: ParameterSet,

    #[serde(default)]
    pub input_data: Vec<DataKey>,

    #[serde(default)]
    pub output_data: Vec<DataKey>,

    #[serde(default)]
    pub launch_mode: LaunchMode,

    #[serde(default)]
    pub script_arguments: String,

    #[serde(default)]
    pub reason: String,

    #[serde(default)]
    pub outcome: String,

    #[serde(default)]
    pub tags: BTreeSet<String>,

    /// Wall-clock run time in seconds
    #[serde(default)]
    pub duration: Option<f64>,

    pub timestamp: DateTime<Utc>,

    #[serde(default)]
    pub user: String,

    #[serde(default)]
    pub platforms: Vec<PlatformInformation>,

    /// Label of an earlier record this run repeats, if any
    #[serde(default)]
    pub repeats: Option<String>,
}

impl Record {
    /// Create an empty record stamped with the current time
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            project: String::new(),
            executable: None,
            repository: None,
            main_file: String::new(),
            version: String::new(),
            diff: String::new(),
            dependencies: Vec::new(),
            parameters: ParameterSet::new(),
            input_data: Vec::new(),
            output_data: Vec::new(),
            launch_mode: LaunchMode::default(),
            script_arguments: String::new(),
            reason: String::new(),
            outcome: String::new(),
            tags: BTreeSet::new(),
            duration: None,
            timestamp: Utc::now(),
            user: String::new(),
            platforms: Vec::new(),
            repeats: None,
        }
    }

    pub fn in_project(mut self, project: impl Into<String>) -> Self {
        self.project = project.into();
        self
    }

    /// True when the run had uncommitted changes to its main code
    pub fn has_uncommitted_changes(&self) -> bool {
        !self.diff.is_empty()
    }
}
