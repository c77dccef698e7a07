//! Field-level validation for draft records.
//!
//! Rules are checked independently and errors accumulate; the result is
//! empty iff the draft is acceptable for submission. The message texts, the
//! loose email shape, and the ten-digit phone rule are part of the stable
//! contract and must not be tightened.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::record::DraftRecord;

static EMAIL_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"\S+@\S+\.\S+").unwrap());
static PHONE_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[0-9]{10}$").unwrap());

/// Identifies one of the five validated record fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Position,
    Department,
}

impl Field {
    /// Stable label for rendering error lists.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Position => "position",
            Field::Department => "department",
        }
    }
}

/// Field-to-message map; absence of a key means the field is valid.
///
/// Iterates in field declaration order to keep rendered error lists
/// deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, &'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.errors.iter().map(|(&field, &message)| (field, message))
    }

    fn set(&mut self, field: Field, message: &'static str) {
        self.errors.insert(field, message);
    }
}

/// Validate a draft for submission. Pure and deterministic.
pub fn validate(draft: &DraftRecord) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if draft.name.trim().is_empty() {
        errors.set(Field::Name, "Name is required");
    }

    let email = draft.email.trim();
    if email.is_empty() {
        errors.set(Field::Email, "Email is required");
    } else if !EMAIL_RE.is_match(email) {
        errors.set(Field::Email, "Email is invalid");
    }

    let phone = draft.phone.trim();
    if phone.is_empty() {
        errors.set(Field::Phone, "Phone number is required");
    } else if !PHONE_RE.is_match(phone) {
        errors.set(Field::Phone, "Phone number must be 10 digits");
    }

    if draft.position.trim().is_empty() {
        errors.set(Field::Position, "Position is required");
    }

    if draft.department.trim().is_empty() {
        errors.set(Field::Department, "Department is required");
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::draft;

    #[test]
    fn valid_draft_has_no_errors() {
        let errors = validate(&draft("Jo", "jo@x.com", "5551234567", "Dev", "Eng"));
        assert!(errors.is_empty());
    }

    /// A missing required field yields exactly its error and nothing else.
    #[test]
    fn missing_name_yields_only_name_error() {
        let errors = validate(&draft("", "a@b.com", "1234567890", "Eng", "R&D"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
    }

    /// All rules are checked; errors accumulate instead of short-circuiting.
    #[test]
    fn empty_draft_reports_all_five_fields() {
        let errors = validate(&DraftRecord::default());
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Phone), Some("Phone number is required"));
        assert_eq!(errors.get(Field::Position), Some("Position is required"));
        assert_eq!(errors.get(Field::Department), Some("Department is required"));
    }

    #[test]
    fn whitespace_only_fields_count_as_empty() {
        let errors = validate(&draft("  ", "a@b.com", "1234567890", "Eng", "R&D"));
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
    }

    #[test]
    fn email_requires_domain_dot_segment() {
        let cases = [("a@b.com", None), ("abc", Some("Email is invalid")), ("a@b", Some("Email is invalid"))];
        for (email, expected) in cases {
            let errors = validate(&draft("Jo", email, "1234567890", "Dev", "Eng"));
            assert_eq!(errors.get(Field::Email), expected, "email: {email:?}");
        }
    }

    #[test]
    fn phone_must_be_exactly_ten_digits() {
        let cases = [
            ("1234567890", None),
            ("123", Some("Phone number must be 10 digits")),
            ("12345678901", Some("Phone number must be 10 digits")),
            ("123-456-7890", Some("Phone number must be 10 digits")),
        ];
        for (phone, expected) in cases {
            let errors = validate(&draft("Jo", "a@b.com", phone, "Dev", "Eng"));
            assert_eq!(errors.get(Field::Phone), expected, "phone: {phone:?}");
        }
    }

    /// Leading zeros are digits too; the store keeps phones as text.
    #[test]
    fn phone_accepts_leading_zeros() {
        let errors = validate(&draft("Jo", "a@b.com", "0123456789", "Dev", "Eng"));
        assert!(errors.is_empty());
    }

    #[test]
    fn iteration_order_follows_field_declaration() {
        let errors = validate(&DraftRecord::default());
        let fields: Vec<_> = errors.iter().map(|(field, _)| field).collect();
        assert_eq!(
            fields,
            vec![
                Field::Name,
                Field::Email,
                Field::Phone,
                Field::Position,
                Field::Department
            ]
        );
    }
}
