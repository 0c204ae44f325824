use std::fmt::{Debug, Display};
use std::hash::Hash;

use indexmap::IndexMap;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

use crate::validation::ValidationErrors;

// =============================================================================
// 1. THE ABSTRACTION (Entity trait and hooks)
// =============================================================================

/// Trait that any domain entity must implement to be managed by ResourceActor.
///
/// There is deliberately no delete hook: records managed by this store are
/// never removed. The transport layer answers delete attempts itself.
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;
    type CreatePayload: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and a validated create payload
    fn from_create(id: Self::Id, payload: Self::CreatePayload) -> Result<Self, ValidationErrors>;

    /// Merge a partial update into the entity. Fields absent from the patch
    /// are left untouched. Returning an error leaves the entity unchanged.
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), ValidationErrors>;
}

/// Errors surfaced by the store itself, as opposed to domain errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("record not found: {0}")]
    NotFound(String),
    #[error("record rejected: {0}")]
    Rejected(ValidationErrors),
    #[error("store channel error: {0}")]
    Channel(String),
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        payload: T::CreatePayload,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    List {
        /// 1-based page number.
        page: usize,
        per_page: usize,
        respond_to: Response<Vec<T>>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    // IndexMap so that listing walks records in insertion order.
    store: IndexMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: IndexMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient { sender };
        (actor, client)
    }

    pub async fn run(mut self) {
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { payload, respond_to } => {
                    let id = (self.next_id_fn)();
                    match T::from_create(id.clone(), payload) {
                        Ok(item) => {
                            self.store.insert(id, item.clone());
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            let _ = respond_to.send(Err(FrameworkError::Rejected(e)));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    if let Some(item) = self.store.get_mut(&id) {
                        match item.on_update(patch) {
                            Ok(()) => {
                                let _ = respond_to.send(Ok(item.clone()));
                            }
                            Err(e) => {
                                let _ = respond_to.send(Err(FrameworkError::Rejected(e)));
                            }
                        }
                    } else {
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::List { page, per_page, respond_to } => {
                    // saturate so an absurd page number yields an empty page
                    // instead of an arithmetic panic killing the actor
                    let offset = page.max(1).saturating_sub(1).saturating_mul(per_page);
                    let items = self
                        .store
                        .values()
                        .skip(offset)
                        .take(per_page)
                        .cloned()
                        .collect();
                    let _ = respond_to.send(Ok(items));
                }
            }
        }
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, payload: T::CreatePayload) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Create { payload, respond_to })
            .await
            .map_err(|_| FrameworkError::Channel("Actor closed".to_string()))?;
        response
            .await
            .map_err(|_| FrameworkError::Channel("Actor dropped".to_string()))?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Get { id, respond_to })
            .await
            .map_err(|_| FrameworkError::Channel("Actor closed".to_string()))?;
        response
            .await
            .map_err(|_| FrameworkError::Channel("Actor dropped".to_string()))?
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Update { id, patch, respond_to })
            .await
            .map_err(|_| FrameworkError::Channel("Actor closed".to_string()))?;
        response
            .await
            .map_err(|_| FrameworkError::Channel("Actor dropped".to_string()))?
    }

    pub async fn list(&self, page: usize, per_page: usize) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::List { page, per_page, respond_to })
            .await
            .map_err(|_| FrameworkError::Channel("Actor closed".to_string()))?;
        response
            .await
            .map_err(|_| FrameworkError::Channel("Actor dropped".to_string()))?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
