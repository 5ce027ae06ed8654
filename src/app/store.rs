//! The directory store.
//!
//! Holds the most recently loaded batch. It starts empty, is replaced as a
//! whole by every successful load and is never merged or edited in place.
//! A failed load leaves it untouched.

use crate::domain::UserRecord;

/// Most recently loaded ordered batch of users.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryStore {
    records: Vec<UserRecord>,
}

impl DirectoryStore {
    /// Replaces the whole batch.
    pub fn replace(&mut self, records: Vec<UserRecord>) {
        tracing::debug!(
            previous = self.records.len(),
            current = records.len(),
            "directory store replaced"
        );
        self.records = records;
    }

    /// Returns the records in load order.
    #[must_use]
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
