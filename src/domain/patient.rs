use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A patient record as held by the store.
///
/// `id` is assigned by the store at creation and never changes. It is not part
/// of the outward JSON shape; see [`PatientRepr`].
#[derive(Debug, Clone, PartialEq)]
pub struct Patient {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub email: Option<String>,
}

/// Raw inbound fields, exactly as an HTTP body may carry them.
///
/// Every field is optional text here; the validation rules decide what a
/// create or a partial update actually requires. `date_of_birth` stays a
/// string until validation so a malformed date becomes a field-level error
/// rather than a body-parse failure. Unknown fields in the request body are
/// ignored: only the fields named here are ever accepted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatientDraft {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub email: Option<String>,
}

/// Validated payload for creating a patient.
#[derive(Debug, Clone, PartialEq)]
pub struct PatientCreate {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub email: Option<String>,
}

/// Validated partial update. `None` means "leave the field unchanged".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub email: Option<String>,
}

/// Outward JSON shape of a patient.
///
/// `date_of_birth` serializes through chrono as `YYYY-MM-DD`, matching the
/// form it was submitted in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRepr {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub email: Option<String>,
}

impl From<&Patient> for PatientRepr {
    fn from(patient: &Patient) -> Self {
        Self {
            first_name: patient.first_name.clone(),
            last_name: patient.last_name.clone(),
            date_of_birth: patient.date_of_birth,
            email: patient.email.clone(),
        }
    }
}
