//! Authoritative ordered collection of employee records.

use thiserror::Error;
use tracing::debug;

use crate::record::{DraftRecord, EmployeeId, EmployeeRecord};

/// Failure signaled when a mutation targets an id the store does not hold.
///
/// A stale id indicates a caller/UI inconsistency; it is propagated, never
/// silently ignored.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("no record with id {0}")]
    NotFound(EmployeeId),
}

/// In-memory record store preserving insertion order.
///
/// Ids come from a monotonic counter and are never reused within a store's
/// lifetime, so no sequence of inserts and deletes can produce a collision.
/// Mutations are all-or-nothing: a failed update or delete leaves every
/// record untouched.
#[derive(Clone, Debug)]
pub struct RecordStore {
    records: Vec<EmployeeRecord>,
    next_id: u64,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            next_id: 1,
        }
    }
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new record with a freshly assigned unique id.
    pub fn insert(&mut self, draft: &DraftRecord) -> EmployeeRecord {
        let id = EmployeeId::new(self.next_id);
        self.next_id += 1;
        let record = EmployeeRecord {
            id,
            name: draft.name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            position: draft.position.clone(),
            department: draft.department.clone(),
        };
        self.records.push(record.clone());
        debug!(%id, total = self.records.len(), "record inserted");
        record
    }

    /// Replace all fields of the record with `id` except the id itself.
    ///
    /// The record keeps its position in the collection.
    pub fn update(
        &mut self,
        id: EmployeeId,
        draft: &DraftRecord,
    ) -> Result<EmployeeRecord, StoreError> {
        let record = self
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(StoreError::NotFound(id))?;
        record.name = draft.name.clone();
        record.email = draft.email.clone();
        record.phone = draft.phone.clone();
        record.position = draft.position.clone();
        record.department = draft.department.clone();
        let updated = record.clone();
        debug!(%id, "record updated");
        Ok(updated)
    }

    /// Remove the record with `id`.
    ///
    /// Deleting an absent id fails with [`StoreError::NotFound`]; repeating
    /// a delete yields the same failure again, not a panic.
    pub fn delete(&mut self, id: EmployeeId) -> Result<(), StoreError> {
        let index = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or(StoreError::NotFound(id))?;
        self.records.remove(index);
        debug!(%id, remaining = self.records.len(), "record deleted");
        Ok(())
    }

    /// Single-record lookup.
    pub fn get(&self, id: EmployeeId) -> Option<&EmployeeRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Read-only view in insertion order.
    ///
    /// Callers may rely on this order for default display.
    pub fn all(&self) -> &[EmployeeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
