use crate::actor_framework::Entity;
use crate::domain::{Patient, PatientCreate, PatientPatch};
use crate::validation::ValidationErrors;

impl Entity for Patient {
    type Id = String;
    type CreatePayload = PatientCreate;
    type Patch = PatientPatch;

    fn id(&self) -> &String {
        &self.id
    }

    /// Creates a new Patient from a validated creation payload.
    ///
    /// The payload names exactly the accepted fields, so nothing beyond them
    /// can ever reach a stored record. The `id` is store-assigned.
    fn from_create(id: String, payload: PatientCreate) -> Result<Self, ValidationErrors> {
        Ok(Self {
            id,
            first_name: payload.first_name,
            last_name: payload.last_name,
            date_of_birth: payload.date_of_birth,
            email: payload.email,
        })
    }

    /// Merges a partial update into the record.
    ///
    /// Fields absent from the patch are left unchanged. Name fields are
    /// re-checked here so the stored-record invariant (names never empty)
    /// holds even for a patch built without going through validation.
    fn on_update(&mut self, patch: PatientPatch) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if matches!(&patch.first_name, Some(v) if v.trim().is_empty()) {
            errors.add("first_name", "first_name must not be empty");
        }
        if matches!(&patch.last_name, Some(v) if v.trim().is_empty()) {
            errors.add("last_name", "last_name must not be empty");
        }
        errors.into_result()?;

        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(date_of_birth) = patch.date_of_birth {
            self.date_of_birth = Some(date_of_birth);
        }
        if let Some(email) = patch.email {
            self.email = Some(email);
        }
        Ok(())
    }
}
