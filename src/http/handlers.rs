use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::domain::{PatientDraft, PatientRepr};
use crate::patient_actor::PatientError;
use crate::validation;

use super::auth::Principal;
use super::error::ApiError;
use super::routes::AppState;

/// Response envelope shared by every success body.
#[derive(Debug, Serialize)]
pub struct Document<T> {
    pub data: T,
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<usize>,
}

/// GET /patients: a bounded page of records, insertion order.
#[instrument(skip(state, _principal))]
pub async fn index(
    _principal: Principal,
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<Document<Vec<PatientRepr>>>, ApiError> {
    let page = query.page.unwrap_or(1);
    let patients = state.patients.list_patients(page).await?;
    debug!(count = patients.len(), "Listing patients");
    Ok(Json(Document {
        data: patients.iter().map(PatientRepr::from).collect(),
    }))
}

/// POST /patients: validate, persist, answer 201 with the new record.
#[instrument(skip(state, _principal, draft))]
pub async fn store(
    _principal: Principal,
    State(state): State<AppState>,
    Json(draft): Json<PatientDraft>,
) -> Result<(StatusCode, Json<Document<PatientRepr>>), ApiError> {
    let payload = validation::validate_create(draft).map_err(PatientError::Validation)?;
    let patient = state.patients.create_patient(payload).await?;
    info!(id = %patient.id, "Patient created");
    Ok((
        StatusCode::CREATED,
        Json(Document {
            data: PatientRepr::from(&patient),
        }),
    ))
}

/// GET /patients/{id}
#[instrument(skip(state, _principal))]
pub async fn show(
    _principal: Principal,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Document<PatientRepr>>, ApiError> {
    let patient = state
        .patients
        .get_patient(id.clone())
        .await?
        .ok_or(PatientError::NotFound(id))?;
    Ok(Json(Document {
        data: PatientRepr::from(&patient),
    }))
}

/// PATCH /patients/{id}: merge the supplied fields into the record.
///
/// Validation runs before anything is sent to the store, so a rejected patch
/// never touches the stored record.
#[instrument(skip(state, _principal, draft))]
pub async fn update(
    _principal: Principal,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<PatientDraft>,
) -> Result<Json<Document<PatientRepr>>, ApiError> {
    let patch = validation::validate_patch(draft).map_err(PatientError::Validation)?;
    let patient = state.patients.update_patient(id, patch).await?;
    info!(id = %patient.id, "Patient updated");
    Ok(Json(Document {
        data: PatientRepr::from(&patient),
    }))
}

/// DELETE /patients/{id}: always 405.
///
/// Deleting a patient record is not supported, for any id and any caller.
/// No [`Principal`] is extracted here: the refusal wins over the auth gate.
#[instrument]
pub async fn reject_delete(Path(_id): Path<String>) -> ApiError {
    debug!("Rejecting delete attempt");
    ApiError::MethodNotSupported
}
