use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{error, info};

use crate::actor_framework::ResourceActor;
use crate::clients::PatientClient;
use crate::domain::Patient;

/// The main application system.
///
/// Responsible for starting the patient actor, wiring up its client, and
/// handling shutdown.
pub struct PatientSystem {
    pub patient_client: PatientClient,
    handle: tokio::task::JoinHandle<()>,
}

impl PatientSystem {
    pub fn new() -> Self {
        let id_counter = Arc::new(AtomicU64::new(1));
        let next_patient_id = move || {
            let id = id_counter.fetch_add(1, Ordering::SeqCst);
            format!("patient_{}", id)
        };

        let (patient_actor, resource_client) = ResourceActor::<Patient>::new(32, next_patient_id);
        let patient_client = PatientClient::new(resource_client);
        let handle = tokio::spawn(patient_actor.run());

        Self {
            patient_client,
            handle,
        }
    }

    /// Closes the actor's channel and waits for it to drain.
    ///
    /// The actor stops once every client clone has been dropped.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.patient_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for PatientSystem {
    fn default() -> Self {
        Self::new()
    }
}
