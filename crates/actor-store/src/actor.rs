//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the task that owns a keyed registry of
//! entities. It implements the "Server" side of the Actor Model: it processes messages
//! sequentially and is the only code that ever touches the map.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Every request, read or write, is handled inside one turn of the receive loop. No two
/// requests ever observe the map at the same time, so each operation is linearizable
/// without a `Mutex` or `RwLock`. A read-modify-write sent as a single
/// [`ResourceRequest::Action`] cannot interleave with any other request, which is what
/// makes check-and-set on an entity atomic.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// ```rust
/// use actor_store::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug)] enum NoteAction { Append(String) }
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     type Id = u32;
///     type Filter = ();
///     type Action = NoteAction;
///     type ActionResult = usize;
///     type Context = ();
///     type Error = NoteError;
///
///     fn id(&self) -> &u32 { &self.id }
///     fn matches(&self, _: &()) -> bool { true }
///     async fn handle_action(&mut self, action: NoteAction, _: &()) -> Result<usize, NoteError> {
///         match action {
///             NoteAction::Append(more) => { self.text.push_str(&more); Ok(self.text.len()) }
///         }
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(10);
///     tokio::spawn(actor.run(()));
///
///     client.save(Note { id: 1, text: "ab".into() }).await.unwrap();
///     let len = client.perform_action(1, NoteAction::Append("c".into())).await.unwrap();
///     assert_eq!(len, 3);
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the mailbox. When it is full, client calls wait
    /// until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// # Context Injection
    /// The `context` argument is handed to every [`ActorEntity::handle_action`] call. This
    /// allows entities to use dependencies (random sources, other clients) that were built
    /// *after* the actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Order" instead of "ride_broker::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Save { item, respond_to } => {
                    let id = item.id().clone();
                    debug!(entity_type, %id, "Save");
                    let replaced = self.store.insert(id.clone(), item).is_some();
                    info!(entity_type, %id, replaced, size = self.store.len(), "Saved");
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to
                        .send(item.ok_or_else(|| FrameworkError::NotFound(id.to_string())));
                }
                ResourceRequest::Update { item, respond_to } => {
                    let id = item.id().clone();
                    debug!(entity_type, %id, "Update");
                    if let Some(slot) = self.store.get_mut(&id) {
                        *slot = item;
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::List { filter, respond_to } => {
                    let items: Vec<T> = self
                        .store
                        .values()
                        .filter(|item| item.matches(&filter))
                        .cloned()
                        .collect();
                    debug!(entity_type, ?filter, matched = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };

                    // Work on a draft so a failed action leaves the stored entity untouched
                    let mut draft = item.clone();
                    let result = match draft.handle_action(action, &context).await {
                        Ok(outcome) => {
                            *item = draft;
                            info!(entity_type, %id, "Action ok");
                            Ok(outcome)
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Action failed");
                            Err(FrameworkError::entity(e))
                        }
                    };
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
