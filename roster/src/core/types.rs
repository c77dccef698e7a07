//! Shared deterministic types for the roster core.
//!
//! These types define stable contracts between core components and the
//! workflow session. They carry no I/O and no hidden state.

use serde::{Deserialize, Serialize};

use crate::record::EmployeeId;

/// Column a projection can be ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Department,
}

/// Direction applied to the active sort key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Sort parameters for the projected view.
///
/// An absent key means natural (insertion) order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Apply the sort-toggle rule for a header click on `key`.
    ///
    /// Toggling the currently-ascending key flips it to descending; any
    /// other invocation (other key, no key, or a descending key) selects
    /// `key` ascending.
    #[must_use]
    pub fn toggle(self, key: SortKey) -> Self {
        let direction = if self.key == Some(key) && self.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        Self {
            key: Some(key),
            direction,
        }
    }
}

/// Modal workflow state.
///
/// A single tagged variant instead of independent visibility flags: the edit
/// form and the delete confirmation cannot be represented open at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WorkflowState {
    /// No modal open.
    #[default]
    Idle,
    /// Employee form open; `None` is create mode, `Some(id)` edit mode.
    Editing(Option<EmployeeId>),
    /// Delete confirmation open for the given record.
    ConfirmingDelete(EmployeeId),
}

impl WorkflowState {
    /// Stable label used in transition errors and diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            WorkflowState::Idle => "idle",
            WorkflowState::Editing(_) => "editing",
            WorkflowState::ConfirmingDelete(_) => "confirming a delete",
        }
    }
}

/// Severity of a notification surfaced to the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// Transient toast emitted to the presentation layer.
///
/// Display lifetime (timing, auto-dismiss) is a presentation concern; the
/// core only emits the value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }
}
