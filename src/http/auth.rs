//! Authentication gate.
//!
//! The identity provider is external to this service; what arrives here is a
//! bearer token, checked against the configured token set. Handlers that
//! require an authenticated caller take a [`Principal`] argument; extraction
//! failing short-circuits the request with 401 before any handler code runs.

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;
use tracing::debug;

use super::error::ApiError;
use super::routes::AppState;

/// The authenticated caller.
#[derive(Debug, Clone)]
pub struct Principal {
    #[allow(dead_code)]
    pub token: String,
}

impl FromRequestParts<AppState> for Principal {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "));

        match token {
            Some(token) if state.api_tokens.contains(token) => Ok(Principal {
                token: token.to_string(),
            }),
            _ => {
                debug!("Rejecting unauthenticated request");
                Err(ApiError::Unauthenticated)
            }
        }
    }
}
