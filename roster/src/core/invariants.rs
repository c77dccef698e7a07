//! Semantic roster invariants not expressible in the type system.

use std::collections::HashSet;

use crate::core::validator::validate;
use crate::record::{DraftRecord, EmployeeRecord};

/// Check roster-wide invariants:
/// - No duplicate ids.
/// - Every stored record still passes field validation.
///
/// Returns a list of stable error messages (empty on success).
pub fn validate_invariants(records: &[EmployeeRecord]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for record in records {
        if !seen.insert(record.id) {
            errors.push(format!("duplicate id {}", record.id));
        }

        for (field, message) in validate(&DraftRecord::from_record(record)).iter() {
            errors.push(format!("record {}: {}: {}", record.id, field.label(), message));
        }
    }

    errors
}
