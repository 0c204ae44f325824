//! Field validation rules for inbound patient requests.
//!
//! A [`PatientDraft`] is the untrusted field set from the transport layer.
//! [`validate_create`] and [`validate_patch`] turn it into the typed payloads
//! the store accepts, or collect every broken rule into [`ValidationErrors`]
//! so the caller learns about all failing fields at once. Nothing reaches the
//! store until these pass.

use std::fmt;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::{PatientCreate, PatientDraft, PatientPatch};

/// Textual form of `date_of_birth` on the wire.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Per-field validation messages, keyed by field name.
///
/// Serializes as `{ "field": ["message", ...] }`, which is exactly the shape
/// the 422 response body carries. Field order is preserved for stable output.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: IndexMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Ok when no rule was broken, otherwise Err(self).
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, messages.join(", "))?;
            first = false;
        }
        Ok(())
    }
}

/// Validate a draft for creation.
///
/// `first_name` and `last_name` must be present and non-empty;
/// `date_of_birth`, when present, must parse as `YYYY-MM-DD`. `email` is free
/// text.
pub fn validate_create(draft: PatientDraft) -> Result<PatientCreate, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let first_name = require_non_empty("first_name", draft.first_name, &mut errors);
    let last_name = require_non_empty("last_name", draft.last_name, &mut errors);
    let date_of_birth = parse_date_of_birth(draft.date_of_birth, &mut errors);

    errors.into_result()?;

    Ok(PatientCreate {
        // into_result bailed on any broken rule, so both names are present
        first_name: first_name.unwrap_or_default(),
        last_name: last_name.unwrap_or_default(),
        date_of_birth,
        email: draft.email,
    })
}

/// Validate a draft for a partial update.
///
/// Fields absent from the draft stay absent from the patch. A name field that
/// is present must not be empty: a partial update may never blank a required
/// field.
pub fn validate_patch(draft: PatientDraft) -> Result<PatientPatch, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let first_name = reject_empty("first_name", draft.first_name, &mut errors);
    let last_name = reject_empty("last_name", draft.last_name, &mut errors);
    let date_of_birth = parse_date_of_birth(draft.date_of_birth, &mut errors);

    errors.into_result()?;

    Ok(PatientPatch {
        first_name,
        last_name,
        date_of_birth,
        email: draft.email,
    })
}

/// The field must be present and non-empty.
fn require_non_empty(
    field: &str,
    value: Option<String>,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => {
            errors.add(field, format!("{} is required and must not be empty", field));
            None
        }
    }
}

/// The field may be absent, but must not be empty when present.
fn reject_empty(
    field: &str,
    value: Option<String>,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match value {
        Some(v) if v.trim().is_empty() => {
            errors.add(field, format!("{} must not be empty", field));
            None
        }
        other => other,
    }
}

fn parse_date_of_birth(
    value: Option<String>,
    errors: &mut ValidationErrors,
) -> Option<NaiveDate> {
    let raw = value?;
    match NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(_) => {
            errors.add("date_of_birth", "date_of_birth must be a valid YYYY-MM-DD date");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(
        first_name: Option<&str>,
        last_name: Option<&str>,
        date_of_birth: Option<&str>,
        email: Option<&str>,
    ) -> PatientDraft {
        PatientDraft {
            first_name: first_name.map(Into::into),
            last_name: last_name.map(Into::into),
            date_of_birth: date_of_birth.map(Into::into),
            email: email.map(Into::into),
        }
    }

    #[test]
    fn test_valid_create_passes_fields_through() {
        let payload = validate_create(draft(
            Some("Sarah"),
            Some("Connor"),
            Some("1963-05-13"),
            Some("sarah.conner@example.com"),
        ))
        .unwrap();

        assert_eq!(payload.first_name, "Sarah");
        assert_eq!(payload.last_name, "Connor");
        assert_eq!(
            payload.date_of_birth,
            Some(NaiveDate::from_ymd_opt(1963, 5, 13).unwrap())
        );
        assert_eq!(payload.email.as_deref(), Some("sarah.conner@example.com"));
    }

    #[test]
    fn test_create_without_optional_fields() {
        let payload = validate_create(draft(Some("The"), Some("Terminator"), None, None)).unwrap();
        assert_eq!(payload.date_of_birth, None);
        assert_eq!(payload.email, None);
    }

    #[test]
    fn test_create_requires_both_names() {
        let errors = validate_create(draft(None, Some(""), None, None)).unwrap_err();
        assert!(errors.contains("first_name"));
        assert!(errors.contains("last_name"));
    }

    #[test]
    fn test_create_rejects_whitespace_only_name() {
        let errors = validate_create(draft(Some("   "), Some("Connor"), None, None)).unwrap_err();
        assert!(errors.contains("first_name"));
        assert!(!errors.contains("last_name"));
    }

    #[test]
    fn test_create_rejects_malformed_date() {
        let errors =
            validate_create(draft(Some("Sarah"), Some("Connor"), Some("13/05/1963"), None))
                .unwrap_err();
        assert!(errors.contains("date_of_birth"));
    }

    #[test]
    fn test_create_rejects_impossible_date() {
        let errors =
            validate_create(draft(Some("Sarah"), Some("Connor"), Some("1963-02-30"), None))
                .unwrap_err();
        assert!(errors.contains("date_of_birth"));
    }

    #[test]
    fn test_email_is_free_text() {
        let payload =
            validate_create(draft(Some("Sarah"), Some("Connor"), None, Some("not-an-email")))
                .unwrap();
        assert_eq!(payload.email.as_deref(), Some("not-an-email"));
    }

    #[test]
    fn test_patch_allows_omitted_fields() {
        let patch = validate_patch(draft(None, None, None, Some("x@example.com"))).unwrap();
        assert_eq!(patch.first_name, None);
        assert_eq!(patch.last_name, None);
        assert_eq!(patch.email.as_deref(), Some("x@example.com"));
    }

    #[test]
    fn test_patch_rejects_blanking_a_name() {
        let errors = validate_patch(draft(Some(""), None, None, None)).unwrap_err();
        assert!(errors.contains("first_name"));
        assert!(!errors.contains("last_name"));
    }

    #[test]
    fn test_patch_rejects_malformed_date() {
        let errors = validate_patch(draft(None, None, Some("yesterday"), None)).unwrap_err();
        assert!(errors.contains("date_of_birth"));
    }

    #[test]
    fn test_errors_serialize_keyed_by_field() {
        let errors = validate_create(draft(None, None, None, None)).unwrap_err();
        let json = serde_json::to_value(&errors).unwrap();
        assert!(json.get("first_name").unwrap().is_array());
        assert!(json.get("last_name").unwrap().is_array());
    }
}
