//! HTTP transport layer: routing, authentication gate, handlers, and the
//! mapping from domain errors to status codes.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod routes;

pub use error::ApiError;
pub use routes::{router, AppState};
