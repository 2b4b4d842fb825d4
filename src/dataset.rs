use std::collections::HashMap;

use crate::record::{CensusRecord, StateCodeEntry};

/// Census records of one load, keyed by state name.
///
/// Iteration follows the order in which states were first inserted, which makes sorting
/// with equal keys reproducible.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    records: Vec<CensusRecord>,
    index: HashMap<String, usize>,
}

impl Dataset {
    pub fn new() -> Dataset {
        Dataset::default()
    }

    /// Insert a record under its state name. An existing record for the same state is
    /// replaced in place and true is returned.
    pub fn insert(&mut self, record: CensusRecord) -> bool {
        match self.index.get(&record.state) {
            Some(&i) => {
                self.records[i] = record;
                true
            }
            None => {
                self.index.insert(record.state.clone(), self.records.len());
                self.records.push(record);
                false
            }
        }
    }

    /// Set the state code of the record for `entry.state`. Returns false, leaving the
    /// dataset untouched, when no such state was loaded.
    pub fn apply_state_code(&mut self, entry: StateCodeEntry) -> bool {
        match self.index.get(&entry.state) {
            Some(&i) => {
                self.records[i].state_code = entry.state_code;
                true
            }
            None => false,
        }
    }

    /// Get the record loaded for `state`.
    pub fn get(&self, state: &str) -> Option<&CensusRecord> {
        self.index.get(state).map(|&i| &self.records[i])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item=&CensusRecord> {
        self.records.iter()
    }

    /// Copy the records in first-insertion order.
    pub fn values(&self) -> Vec<CensusRecord> {
        self.records.clone()
    }
}
