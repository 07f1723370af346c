use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};

/// Content-addressed reference to one input or output file of a record
///
/// Two keys are equal when their digests are equal: the same bytes stored
/// under a different path are still the same data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataKey {
    /// Path relative to the data store root
    pub path: String,

    /// Content hash of the file
    pub digest: String,

    /// When the file was created, if the store recorded it
    #[serde(default)]
    pub creation: Option<DateTime<Utc>>,

    /// Store-specific extra information (mimetype, size, ...)
    #[serde(default)]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl DataKey {
    pub fn new(path: impl Into<String>, digest: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            digest: digest.into(),
            creation: None,
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_creation(mut self, creation: DateTime<Utc>) -> Self {
        self.creation = Some(creation);
        self
    }

    /// Final `/`-separated component of the path (empty for a trailing slash)
    pub fn basename(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or("")
    }
}

impl PartialEq for DataKey {
    fn eq(&self, other: &Self) -> bool {
        self.digest == other.digest
    }
}

impl Eq for DataKey {}

impl Hash for DataKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digest.hash(state);
    }
}

impl std::fmt::Display for DataKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.path, self.digest)
    }
}
