//! System orchestration, startup, and shutdown logic.

pub mod config;
pub mod patient_system;
pub mod tracing;

pub use config::*;
pub use patient_system::*;
pub use tracing::*;
