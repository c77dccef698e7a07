//! Employee record data model.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Opaque unique identifier for a stored employee record.
///
/// Assigned by the store from a monotonic counter and immutable afterwards.
/// Displays and parses as its integer value so a presentation layer can echo
/// ids back as commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(u64);

impl EmployeeId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EmployeeId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(EmployeeId)
    }
}

/// One employee's stored data.
///
/// All fields except `id` are replaced wholesale on update. `phone` stays
/// text to preserve leading zeros.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub department: String,
}

/// Uncommitted form input: the record fields without an id.
///
/// May be partially empty; not subject to any invariant until submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub department: String,
}

impl DraftRecord {
    /// Pre-populate a draft from a stored record (edit-mode entry).
    pub fn from_record(record: &EmployeeRecord) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            phone: record.phone.clone(),
            position: record.position.clone(),
            department: record.department.clone(),
        }
    }
}
