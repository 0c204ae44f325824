mod actor_framework;
mod app_system;
mod clients;
mod domain;
mod http;
mod patient_actor;
mod validation;

#[cfg(test)]
mod mock_framework;

use tracing::{info, warn};

use crate::app_system::{setup_tracing, ApiConfig, PatientSystem};
use crate::http::AppState;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = ApiConfig::from_env();
    if config.api_tokens.is_empty() {
        warn!("No API tokens configured; every authenticated route will answer 401");
    }

    info!("Starting patient record API");

    let system = PatientSystem::new();
    let state = AppState::new(system.patient_client.clone(), config.api_tokens.clone());
    let app = http::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .map_err(|e| format!("Failed to bind {}: {}", config.bind_addr, e))?;
    info!(addr = %config.bind_addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await
        .map_err(|e| e.to_string())?;

    system.shutdown().await?;

    info!("Application stopped");
    Ok(())
}
