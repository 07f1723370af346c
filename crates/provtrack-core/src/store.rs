//! Record lookup seam.
//!
//! The comparison layer only needs to materialize a record from its
//! `(project, label)` pair; persistence is left to implementors of
//! [`RecordStore`].

use std::collections::HashMap;

use crate::errors::{ProvenanceError, Result};
use crate::model::Record;

/// Source of records, addressed by project and label
pub trait RecordStore {
    /// # Errors
    ///
    /// Returns `RecordNotFound` if no record with this label exists in
    /// `project`.
    fn get_record(&self, project: &str, label: &str) -> Result<Record>;
}

/// In-memory record store
///
/// HashMap-backed and not thread-safe; reads take `&self`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    records: HashMap<(String, String), Record>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record under its own project and label
    ///
    /// # Errors
    ///
    /// Returns `DuplicateRecord` if the project already holds that label.
    pub fn insert(&mut self, record: Record) -> Result<()> {
        let key = (record.project.clone(), record.label.clone());
        if self.records.contains_key(&key) {
            return Err(ProvenanceError::DuplicateRecord {
                project: key.0,
                label: key.1,
            });
        }
        self.records.insert(key, record);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Labels stored for `project`, sorted
    pub fn labels(&self, project: &str) -> Vec<&str> {
        let mut labels: Vec<&str> = self
            .records
            .keys()
            .filter(|(p, _)| p == project)
            .map(|(_, l)| l.as_str())
            .collect();
        labels.sort_unstable();
        labels
    }
}

impl RecordStore for InMemoryRecordStore {
    fn get_record(&self, project: &str, label: &str) -> Result<Record> {
        self.records
            .get(&(project.to_string(), label.to_string()))
            .cloned()
            .ok_or_else(|| ProvenanceError::RecordNotFound {
                project: project.to_string(),
                label: label.to_string(),
            })
    }
}
