use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::patient_actor::PatientError;

/// Transport-level error taxonomy. Every variant is terminal for the request.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("unauthenticated")]
    Unauthenticated,
    #[error("method not supported")]
    MethodNotSupported,
    #[error(transparent)]
    Patient(#[from] PatientError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Unauthenticated." })),
            )
                .into_response(),
            ApiError::MethodNotSupported => (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(json!({ "message": "Method Not Allowed." })),
            )
                .into_response(),
            ApiError::Patient(PatientError::NotFound(_)) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": "Not Found." })),
            )
                .into_response(),
            ApiError::Patient(PatientError::Validation(errors)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "errors": errors })),
            )
                .into_response(),
            ApiError::Patient(PatientError::ActorCommunicationError(e)) => {
                error!(error = %e, "Store communication failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal Server Error." })),
                )
                    .into_response()
            }
        }
    }
}
