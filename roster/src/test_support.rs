//! Test-only helpers for constructing drafts and seeded sessions.

use crate::record::DraftRecord;
use crate::session::{RosterSession, SubmitOutcome};

/// Fully explicit draft constructor.
pub fn draft(name: &str, email: &str, phone: &str, position: &str, department: &str) -> DraftRecord {
    DraftRecord {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        position: position.to_string(),
        department: department.to_string(),
    }
}

/// A draft that passes every validation rule.
pub fn valid_draft(name: &str, department: &str) -> DraftRecord {
    let local = name.to_lowercase().replace(' ', ".");
    draft(
        name,
        &format!("{local}@example.com"),
        "5551234567",
        "Engineer",
        department,
    )
}

/// Session pre-filled through the create workflow, one record per entry.
pub fn seeded_session(entries: &[(&str, &str)]) -> RosterSession {
    let mut session = RosterSession::new();
    for (name, department) in entries {
        session.open_create().expect("open create");
        let outcome = session
            .submit(valid_draft(name, department))
            .expect("submit seed draft");
        assert!(
            matches!(outcome, SubmitOutcome::Created(_)),
            "seed draft rejected"
        );
    }
    session
}
