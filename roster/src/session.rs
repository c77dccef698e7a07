//! Workflow orchestration for the roster's create/edit/delete modal flows.
//!
//! [`RosterSession`] is the single writer: it owns the record store by value
//! and turns user intents into store mutations, workflow-state transitions,
//! and notifications. Intents run synchronously to completion, one at a
//! time; the modal state machine has no state in which the edit form and the
//! delete confirmation are open together.

use thiserror::Error;
use tracing::debug;

use crate::core::projector::project;
use crate::core::types::{Notification, SortKey, SortSpec, WorkflowState};
use crate::core::validator::{FieldErrors, validate};
use crate::record::{DraftRecord, EmployeeId, EmployeeRecord};
use crate::store::{RecordStore, StoreError};

/// Failure signaled for intents the current workflow state does not permit,
/// or store mutations targeting stale ids.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The current state's transition table does not list this intent.
    #[error("cannot {intent} while {state}")]
    BadTransition {
        intent: &'static str,
        state: &'static str,
    },
}

/// Result of one submit attempt.
///
/// Exactly one notification is derived per outcome; the presentation layer
/// decides its display and dismissal timing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Draft accepted in create mode; the stored record with its fresh id.
    Created(EmployeeRecord),
    /// Draft accepted in edit mode; the updated record.
    Updated(EmployeeRecord),
    /// Validation failed; the form stays open with these field errors.
    Rejected(FieldErrors),
}

impl SubmitOutcome {
    /// The single toast for this submit attempt.
    pub fn notification(&self) -> Notification {
        match self {
            SubmitOutcome::Created(_) => Notification::success("Employee added successfully!"),
            SubmitOutcome::Updated(_) => Notification::success("Employee updated successfully!"),
            SubmitOutcome::Rejected(_) => {
                Notification::error("Please fill all required fields correctly")
            }
        }
    }
}

/// Single-user roster editing session.
#[derive(Debug, Default)]
pub struct RosterSession {
    store: RecordStore,
    state: WorkflowState,
    draft: DraftRecord,
    errors: FieldErrors,
    search: String,
    sort: SortSpec,
}

impl RosterSession {
    pub fn new() -> Self {
        Self::default()
    }

    // --- queries ---

    pub fn state(&self) -> WorkflowState {
        self.state
    }

    /// Current form contents (meaningful while editing).
    pub fn draft(&self) -> &DraftRecord {
        &self.draft
    }

    /// Field errors from the last rejected submit; cleared when the form
    /// closes.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn search_term(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[EmployeeRecord] {
        self.store.all()
    }

    /// Records as displayed under the current search term and sort spec.
    pub fn visible(&self) -> Vec<&EmployeeRecord> {
        project(self.store.all(), &self.search, self.sort)
    }

    // --- transient view parameters (valid in any workflow state) ---

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Header-click sort toggle (see [`SortSpec::toggle`]).
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = self.sort.toggle(key);
    }

    // --- workflow intents ---

    /// Open the form in create mode with a blank draft.
    pub fn open_create(&mut self) -> Result<(), SessionError> {
        self.expect_idle("open the employee form")?;
        self.draft = DraftRecord::default();
        self.errors = FieldErrors::default();
        self.state = WorkflowState::Editing(None);
        debug!("form opened in create mode");
        Ok(())
    }

    /// Open the form in edit mode, pre-populated from the stored record.
    pub fn open_edit(&mut self, id: EmployeeId) -> Result<(), SessionError> {
        self.expect_idle("open the employee form")?;
        let record = self.store.get(id).ok_or(StoreError::NotFound(id))?;
        self.draft = DraftRecord::from_record(record);
        self.errors = FieldErrors::default();
        self.state = WorkflowState::Editing(Some(id));
        debug!(%id, "form opened in edit mode");
        Ok(())
    }

    /// Submit form contents.
    ///
    /// On validation failure the form stays open with the draft and errors
    /// retained. On success the store is mutated and the session returns to
    /// idle; create mode never retains submitted values, so the next
    /// [`open_create`](Self::open_create) starts blank.
    pub fn submit(&mut self, draft: DraftRecord) -> Result<SubmitOutcome, SessionError> {
        let WorkflowState::Editing(target) = self.state else {
            return Err(self.bad_transition("submit"));
        };

        let errors = validate(&draft);
        if !errors.is_empty() {
            debug!(error_count = errors.len(), "submit rejected");
            self.draft = draft;
            self.errors = errors.clone();
            return Ok(SubmitOutcome::Rejected(errors));
        }

        let outcome = match target {
            None => SubmitOutcome::Created(self.store.insert(&draft)),
            Some(id) => SubmitOutcome::Updated(self.store.update(id, &draft)?),
        };
        self.close_form();
        Ok(outcome)
    }

    /// Close the form without mutating the store.
    pub fn cancel(&mut self) -> Result<(), SessionError> {
        if !matches!(self.state, WorkflowState::Editing(_)) {
            return Err(self.bad_transition("cancel the employee form"));
        }
        self.close_form();
        Ok(())
    }

    /// Ask for confirmation before deleting `id`.
    pub fn request_delete(&mut self, id: EmployeeId) -> Result<(), SessionError> {
        self.expect_idle("request a delete")?;
        self.state = WorkflowState::ConfirmingDelete(id);
        Ok(())
    }

    /// Perform the pending delete and close the confirmation.
    ///
    /// A stale id surfaces the store's `NotFound`. The confirmation closes
    /// either way, so the session cannot wedge in a modal state.
    pub fn confirm_delete(&mut self) -> Result<(), SessionError> {
        let WorkflowState::ConfirmingDelete(id) = self.state else {
            return Err(self.bad_transition("confirm a delete"));
        };
        self.state = WorkflowState::Idle;
        self.store.delete(id)?;
        Ok(())
    }

    /// Dismiss the confirmation without mutating the store.
    pub fn cancel_delete(&mut self) -> Result<(), SessionError> {
        if !matches!(self.state, WorkflowState::ConfirmingDelete(_)) {
            return Err(self.bad_transition("cancel a delete"));
        }
        self.state = WorkflowState::Idle;
        Ok(())
    }

    fn close_form(&mut self) {
        self.draft = DraftRecord::default();
        self.errors = FieldErrors::default();
        self.state = WorkflowState::Idle;
    }

    fn expect_idle(&self, intent: &'static str) -> Result<(), SessionError> {
        match self.state {
            WorkflowState::Idle => Ok(()),
            _ => Err(self.bad_transition(intent)),
        }
    }

    fn bad_transition(&self, intent: &'static str) -> SessionError {
        SessionError::BadTransition {
            intent,
            state: self.state.label(),
        }
    }
}
