use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Patient, PatientCreate, PatientPatch};
use crate::patient_actor::PatientError;

/// Fixed page size for listings.
pub const PAGE_SIZE: usize = 15;

/// Client for interacting with the Patient actor.
#[derive(Clone)]
pub struct PatientClient {
    inner: ResourceClient<Patient>,
}

impl PatientClient {
    pub fn new(inner: ResourceClient<Patient>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, payload))]
    pub async fn create_patient(&self, payload: PatientCreate) -> Result<Patient, PatientError> {
        debug!("Sending request");
        self.inner.create(payload).await.map_err(PatientError::from)
    }

    #[instrument(skip(self))]
    pub async fn get_patient(&self, id: String) -> Result<Option<Patient>, PatientError> {
        debug!("Sending request");
        self.inner.get(id).await.map_err(PatientError::from)
    }

    /// Returns the records on the given 1-based page, in insertion order.
    #[instrument(skip(self))]
    pub async fn list_patients(&self, page: usize) -> Result<Vec<Patient>, PatientError> {
        debug!("Sending request");
        self.inner
            .list(page, PAGE_SIZE)
            .await
            .map_err(PatientError::from)
    }

    #[instrument(skip(self, patch))]
    pub async fn update_patient(
        &self,
        id: String,
        patch: PatientPatch,
    ) -> Result<Patient, PatientError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(PatientError::from)
    }
}
