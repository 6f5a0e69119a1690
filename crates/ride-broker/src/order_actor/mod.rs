//! # Order Actor
//!
//! The Order actor is the store for trip requests plus the rules for moving them through
//! their lifecycle.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_store::ActorEntity) implementation for [`Order`]: the transition rules
//! - [`actions`] - [`OrderAction`], [`Transition`] and [`OrderFilter`]
//! - [`codes`] - [`CodeSource`] injected as the actor's context
//! - [`pricing`] - fare computation used at creation time
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and its raw client
//!
//! ## Usage
//!
//! ```rust
//! use ride_broker::clients::OrderClient;
//! use ride_broker::model::{OrderCreate, Tariff};
//! use ride_broker::order_actor::{self, RandomCodes};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, store) = order_actor::new(32);
//!     let client = OrderClient::new(store);
//!
//!     // The code source is the actor's only dependency
//!     tokio::spawn(actor.run(Arc::new(RandomCodes)));
//!
//!     let receipt = client
//!         .create_order(OrderCreate {
//!             passenger_id: "P1".into(),
//!             address_from: "Main St 1".into(),
//!             address_to: "Airport".into(),
//!             tariff: Tariff::comfort(),
//!             ..Default::default()
//!         })
//!         .await?;
//!     client.accept_order(receipt.order_id, "D1").await?;
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod codes;
pub mod entity;
pub mod error;
pub mod pricing;

pub use actions::*;
pub use codes::*;
pub use error::*;

use crate::model::Order;
use actor_store::{ResourceActor, ResourceClient};

/// Creates a new Order actor and its client.
pub fn new(mailbox_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(mailbox_size)
}
