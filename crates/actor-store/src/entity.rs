//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a record type must satisfy to live inside a
//! [`ResourceActor`](crate::ResourceActor). It names the key type, the scan filter, the
//! resource-specific actions and the context injected into the action handler.
//!
//! # Architecture Note
//! The store never inspects an entity beyond three questions: what is its key ([`ActorEntity::id`]),
//! does it match a filter ([`ActorEntity::matches`]), and what happens when an action is applied
//! ([`ActorEntity::handle_action`]). Everything domain-specific (state machines, derived fields,
//! validation) stays behind those three methods, so the store loop is written *once*.
//!
//! We use "Associated Types" (type Id, type Filter, etc.) to enforce type safety.
//! An `Order` store only accepts `OrderAction`s, and you can't accidentally send it
//! some other entity's action. The compiler prevents this class of bugs entirely.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any record must implement to be stored by a `ResourceActor`.
///
/// # Async & Context
/// This trait is `#[async_trait]` so action handlers may await (e.g., calling other actors).
/// The `Context` type is injected into every handler call. This allows "Late Binding"
/// of dependencies (passing them to `run()` instead of `new()`).
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique key for this entity (e.g., String, Uuid, u64).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Predicate payload used by `List` scans.
    type Filter: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `Accept`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// # Design Note: Error Granularity
    ///
    /// One error enum per entity rather than one per action. Clients deal with a single
    /// error type, which keeps pattern matching at the call site simple.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The key this entity is stored under.
    fn id(&self) -> &Self::Id;

    /// Whether this entity belongs in the result of a `List` scan.
    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Handle a custom resource-specific action.
    ///
    /// The actor calls this on a *copy* of the stored entity. The copy replaces the stored
    /// value only when the handler returns `Ok`, so a failed action never leaves a
    /// half-applied change behind.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
