use std::collections::HashSet;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use crate::clients::PatientClient;

use super::handlers;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub patients: PatientClient,
    pub api_tokens: Arc<HashSet<String>>,
}

impl AppState {
    pub fn new(patients: PatientClient, api_tokens: HashSet<String>) -> Self {
        Self {
            patients,
            api_tokens: Arc::new(api_tokens),
        }
    }
}

/// Build the application router.
///
/// DELETE is routed to a handler that always answers 405: this resource
/// cannot be removed, and the refusal applies before any auth check.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/patients",
            get(handlers::index).post(handlers::store),
        )
        .route(
            "/patients/{id}",
            get(handlers::show)
                .patch(handlers::update)
                .delete(handlers::reject_delete),
        )
        .with_state(state)
}
