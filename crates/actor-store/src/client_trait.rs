//! # ActorClient Trait
//!
//! Common interface for resource‑specific clients: default `fetch` and `scan` methods built on
//! top of a generic `ResourceClient`, with framework errors mapped into the resource's own error.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the read operations of the store.
///
/// # Example
///
/// ```rust
/// use actor_store::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Driver { id: u32 }
/// #[derive(Debug)] enum DriverAction {}
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct DriverError(String);
///
/// #[async_trait]
/// impl ActorEntity for Driver {
///     type Id = u32; type Filter = (); type Action = DriverAction; type ActionResult = ();
///     type Context = (); type Error = DriverError;
///     fn id(&self) -> &u32 { &self.id }
///     fn matches(&self, _: &()) -> bool { true }
///     async fn handle_action(&mut self, _: DriverAction, _: &()) -> Result<(), DriverError> { Ok(()) }
/// }
///
/// struct DriverClient { inner: ResourceClient<Driver> }
///
/// #[async_trait]
/// impl ActorClient<Driver> for DriverClient {
///     type Error = DriverError;
///     fn inner(&self) -> &ResourceClient<Driver> { &self.inner }
///     fn map_error(e: FrameworkError) -> DriverError { DriverError(e.to_string()) }
/// }
///
/// async fn usage(client: DriverClient) {
///     // fetch() and scan() are provided automatically
///     let _ = client.fetch(1).await;
///     let _ = client.scan(()).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn fetch(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Collect every entity matching `filter`.
    #[tracing::instrument(skip(self))]
    async fn scan(&self, filter: T::Filter) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(filter).await.map_err(Self::map_error)
    }
}
