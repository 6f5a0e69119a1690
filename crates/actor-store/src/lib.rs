//! # Actor Store
//!
//! This crate provides a keyed, in-memory registry that is safe to share between any number
//! of concurrent tasks. Instead of guarding a `HashMap` with a lock, the map is owned by a
//! single Tokio task (the **actor**) and every caller talks to it by message passing.
//!
//! ## Why an Actor?
//!
//! - Isolated state: only the actor task can reach the map, so there is no shared memory to lock.
//! - Sequential processing: requests are handled one at a time, so every operation is linearizable.
//! - Atomic read-modify-write: an [`ActorEntity::Action`] is checked and applied inside a single
//!   turn of the loop, which closes the classic "read status, then write" race that a
//!   lock-per-call store leaves open.
//!
//! ## Core Components
//!
//! - [`ActorEntity`] - The trait a record type implements to be stored
//! - [`ResourceActor`] - The task that owns the map and processes requests
//! - [`ResourceClient`] - Cloneable, type-safe handle used to talk to the actor
//! - [`ActorClient`] - Trait for domain clients that wrap a `ResourceClient`
//! - [`FrameworkError`] - Errors raised by the store itself
//!
//! ## Quick Start
//!
//! ```rust
//! use actor_store::{ActorEntity, FrameworkError, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Ticket {
//!     id: String,
//!     open: bool,
//! }
//!
//! #[derive(Debug)] enum TicketAction { Close }
//! #[derive(Debug, thiserror::Error)]
//! #[error("ticket already closed")]
//! struct AlreadyClosed;
//!
//! #[async_trait]
//! impl ActorEntity for Ticket {
//!     type Id = String;
//!     type Filter = bool;
//!     type Action = TicketAction;
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = AlreadyClosed;
//!
//!     fn id(&self) -> &String { &self.id }
//!     fn matches(&self, open: &bool) -> bool { self.open == *open }
//!
//!     async fn handle_action(&mut self, _: TicketAction, _: &()) -> Result<(), AlreadyClosed> {
//!         if !self.open {
//!             return Err(AlreadyClosed);
//!         }
//!         self.open = false;
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Ticket>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     client.save(Ticket { id: "t1".into(), open: true }).await.unwrap();
//!     client.perform_action("t1".into(), TicketAction::Close).await.unwrap();
//!
//!     // The second close is rejected by the entity and nothing is written
//!     let again = client.perform_action("t1".into(), TicketAction::Close).await;
//!     assert!(matches!(again, Err(FrameworkError::EntityError(_))));
//!     assert!(client.list(true).await.unwrap().is_empty());
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via the `run()` method, not at construction time.
//! The actor and its client can be created first, handed around, and only then started with
//! whatever the entity's action handler needs (a random source, another actor's client, ...).
//!
//! ## Testing
//!
//! The [`mock`] module offers a `MockClient` that answers requests from scripted expectations,
//! which is the easiest way to inject store failures into code that depends on a store.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
