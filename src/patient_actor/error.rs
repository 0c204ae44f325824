use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::validation::ValidationErrors;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PatientError {
    #[error("Patient not found: {0}")]
    NotFound(String),
    #[error("Patient validation error: {0}")]
    Validation(ValidationErrors),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for PatientError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(id) => PatientError::NotFound(id),
            FrameworkError::Rejected(errors) => PatientError::Validation(errors),
            FrameworkError::Channel(msg) => PatientError::ActorCommunicationError(msg),
        }
    }
}
