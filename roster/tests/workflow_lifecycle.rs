//! Lifecycle tests driving the public session API end to end: create, edit,
//! and delete flows including notifications, state transitions, and the
//! projected view.

use roster::core::types::{NotificationKind, SortKey, WorkflowState};
use roster::record::DraftRecord;
use roster::session::{RosterSession, SessionError, SubmitOutcome};
use roster::store::StoreError;
use roster::test_support::{draft, seeded_session, valid_draft};

/// Create flow: open the form, submit a valid draft, and verify the stored
/// record, the success toast, and the return to idle.
#[test]
fn create_flow_stores_record_and_returns_to_idle() {
    let mut session = RosterSession::new();

    session.open_create().expect("open create");
    assert_eq!(session.state(), WorkflowState::Editing(None));

    let outcome = session
        .submit(draft("Jo", "jo@x.com", "5551234567", "Dev", "Eng"))
        .expect("submit");

    let SubmitOutcome::Created(record) = outcome.clone() else {
        panic!("expected Created, got {outcome:?}");
    };
    assert_eq!(record.name, "Jo");
    assert_eq!(record.email, "jo@x.com");
    assert_eq!(record.phone, "5551234567");
    assert_eq!(record.position, "Dev");
    assert_eq!(record.department, "Eng");

    let notification = outcome.notification();
    assert_eq!(notification.kind, NotificationKind::Success);
    assert_eq!(notification.message, "Employee added successfully!");

    assert_eq!(session.state(), WorkflowState::Idle);
    assert_eq!(session.records().len(), 1);
    assert_eq!(session.records()[0], record);
}

/// Rejected submit: one error toast, the form stays open with draft and
/// errors retained, and a corrected resubmit succeeds.
#[test]
fn rejected_submit_recovers_on_resubmit() {
    let mut session = RosterSession::new();
    session.open_create().expect("open create");

    let bad = draft("Jo", "jo@x.com", "123", "Dev", "Eng");
    let outcome = session.submit(bad.clone()).expect("submit");
    assert!(matches!(outcome, SubmitOutcome::Rejected(_)));

    let notification = outcome.notification();
    assert_eq!(notification.kind, NotificationKind::Error);
    assert_eq!(notification.message, "Please fill all required fields correctly");
    assert_eq!(session.state(), WorkflowState::Editing(None));
    assert_eq!(session.draft(), &bad);
    assert!(session.records().is_empty());

    let outcome = session
        .submit(draft("Jo", "jo@x.com", "5551234567", "Dev", "Eng"))
        .expect("resubmit");
    assert!(matches!(outcome, SubmitOutcome::Created(_)));
    assert_eq!(session.state(), WorkflowState::Idle);
}

/// Edit flow: the form is pre-populated from the stored record; submitting a
/// changed department updates only that field and preserves id and position.
#[test]
fn edit_flow_updates_in_place() {
    let mut session = seeded_session(&[("A", "Engineering"), ("B", "Sales")]);
    let target = session.records()[0].clone();

    session.open_edit(target.id).expect("open edit");
    assert_eq!(session.state(), WorkflowState::Editing(Some(target.id)));
    assert_eq!(session.draft(), &DraftRecord::from_record(&target));

    let mut changed = session.draft().clone();
    changed.department = "Platform".to_string();
    let outcome = session.submit(changed).expect("submit");

    let SubmitOutcome::Updated(updated) = outcome.clone() else {
        panic!("expected Updated, got {outcome:?}");
    };
    assert_eq!(updated.id, target.id);
    assert_eq!(updated.name, target.name);
    assert_eq!(updated.department, "Platform");
    assert_eq!(outcome.notification().message, "Employee updated successfully!");

    assert_eq!(session.state(), WorkflowState::Idle);
    assert_eq!(session.records()[0].id, target.id);
    assert_eq!(session.records()[0].department, "Platform");
    assert_eq!(session.records()[1].name, "B");
}

/// Delete flow: request opens the confirmation, cancel changes nothing,
/// confirm removes the record, and a repeated confirm reports NotFound.
#[test]
fn delete_flow_requires_confirmation() {
    let mut session = seeded_session(&[("A", "X"), ("B", "Y")]);
    let id = session.records()[0].id;

    session.request_delete(id).expect("request");
    assert_eq!(session.state(), WorkflowState::ConfirmingDelete(id));

    session.cancel_delete().expect("cancel");
    assert_eq!(session.state(), WorkflowState::Idle);
    assert_eq!(session.records().len(), 2);

    session.request_delete(id).expect("request again");
    session.confirm_delete().expect("confirm");
    assert_eq!(session.state(), WorkflowState::Idle);
    assert_eq!(session.records().len(), 1);
    assert_eq!(session.records()[0].name, "B");

    session.request_delete(id).expect("request stale id");
    let err = session.confirm_delete().expect_err("stale id");
    assert_eq!(err, SessionError::Store(StoreError::NotFound(id)));
    assert_eq!(session.state(), WorkflowState::Idle);
    assert_eq!(session.records().len(), 1);
}

/// Search and sort parameters shape the projection without touching the
/// stored order.
#[test]
fn projection_tracks_view_parameters() {
    let mut session = seeded_session(&[
        ("Dana", "Engineering"),
        ("Alex", "Engineering"),
        ("Bo", "Sales"),
    ]);

    session.set_search("engineering");
    session.toggle_sort(SortKey::Name);
    let visible: Vec<_> = session.visible().iter().map(|r| r.name.clone()).collect();
    assert_eq!(visible, vec!["Alex", "Dana"]);

    // Stored order is untouched by view parameters.
    let stored: Vec<_> = session.records().iter().map(|r| r.name.clone()).collect();
    assert_eq!(stored, vec!["Dana", "Alex", "Bo"]);
}

/// A full mixed session: create, reject, edit, and delete interleaved with
/// view changes, ending in a consistent roster.
#[test]
fn mixed_session_stays_consistent() {
    let mut session = RosterSession::new();

    session.open_create().expect("open create");
    session.submit(valid_draft("Ava", "Engineering")).expect("submit");

    session.open_create().expect("open create");
    let outcome = session.submit(DraftRecord::default()).expect("submit empty");
    assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
    session.cancel().expect("cancel");

    session.open_create().expect("open create");
    session.submit(valid_draft("Liam", "Sales")).expect("submit");

    let liam = session.records()[1].id;
    session.open_edit(liam).expect("open edit");
    let mut changed = session.draft().clone();
    changed.position = "Manager".to_string();
    session.submit(changed).expect("submit edit");

    let ava = session.records()[0].id;
    session.request_delete(ava).expect("request");
    session.confirm_delete().expect("confirm");

    assert_eq!(session.records().len(), 1);
    assert_eq!(session.records()[0].id, liam);
    assert_eq!(session.records()[0].position, "Manager");
    assert_eq!(session.state(), WorkflowState::Idle);
    assert!(roster::core::invariants::validate_invariants(session.records()).is_empty());
}
