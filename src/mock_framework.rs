//! # Mock Framework
//!
//! Utilities for testing against the store without spinning up a real
//! `ResourceActor`.
//!
//! Use [`create_mock_client`] to get a client and a receiver. The client goes
//! wherever a real one would; the receiver lets the test inspect exactly what
//! requests arrive and script the responses deterministically.

use tokio::sync::{mpsc, oneshot};

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};

/// Creates a mock client and a receiver for asserting requests.
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreatePayload, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Patch, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update { id, patch, respond_to }) => Some((id, patch, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Patient, PatientCreate};

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Patient>(10);

        // Test Create
        let create_task = tokio::spawn(async move {
            let payload = PatientCreate {
                first_name: "Sarah".to_string(),
                last_name: "Connor".to_string(),
                date_of_birth: None,
                email: None,
            };
            client.create(payload).await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.first_name, "Sarah");

        let stored = Patient {
            id: "patient_1".to_string(),
            first_name: payload.first_name,
            last_name: payload.last_name,
            date_of_birth: payload.date_of_birth,
            email: payload.email,
        };
        responder.send(Ok(stored.clone())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(stored));
    }

    #[tokio::test]
    async fn test_mock_get_and_update() {
        use crate::domain::PatientPatch;

        let (client, mut receiver) = create_mock_client::<Patient>(10);

        let get_client = client.clone();
        let get_task =
            tokio::spawn(async move { get_client.get("patient_1".to_string()).await });
        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, "patient_1");
        responder.send(Ok(None)).unwrap();
        assert_eq!(get_task.await.unwrap(), Ok(None));

        let update_task = tokio::spawn(async move {
            client
                .update(
                    "patient_1".to_string(),
                    PatientPatch {
                        email: Some("sarah@example.com".to_string()),
                        ..Default::default()
                    },
                )
                .await
        });
        let (id, patch, responder) = expect_update(&mut receiver)
            .await
            .expect("Expected Update request");
        assert_eq!(id, "patient_1");
        assert_eq!(patch.email.as_deref(), Some("sarah@example.com"));
        responder
            .send(Err(FrameworkError::NotFound(id)))
            .unwrap();
        assert!(matches!(
            update_task.await.unwrap(),
            Err(FrameworkError::NotFound(_))
        ));
    }
}
