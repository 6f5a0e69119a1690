use crate::clients::OrderClient;
use crate::lifecycle::BrokerConfig;
use crate::order_actor::{self, CodeSource, RandomCodes};
use std::sync::Arc;
use tracing::{error, info};

/// The runtime orchestrator for the ride broker.
///
/// `BrokerSystem` is responsible for:
/// - **Lifecycle Management**: starting the order store actor and stopping it again
/// - **Dependency Wiring**: handing the actor its confirmation-code source
///
/// # Example
///
/// ```ignore
/// let config = BrokerConfig::from_env()?;
/// let system = BrokerSystem::new(&config);
///
/// let receipt = system.order_client.create_order(params).await?;
/// system.order_client.accept_order(receipt.order_id, "D1").await?;
///
/// system.shutdown().await?;
/// ```
pub struct BrokerSystem {
    /// Client for the order lifecycle
    pub order_client: OrderClient,

    handle: tokio::task::JoinHandle<()>,
}

impl BrokerSystem {
    /// Starts the order store with random confirmation codes.
    pub fn new(config: &BrokerConfig) -> Self {
        Self::with_code_source(config, Arc::new(RandomCodes))
    }

    /// Starts the order store with the given confirmation-code source.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn with_code_source(config: &BrokerConfig, codes: Arc<dyn CodeSource>) -> Self {
        let (order_actor, store) = order_actor::new(config.order_mailbox_size);
        let handle = tokio::spawn(order_actor.run(codes));

        if let Some(url) = &config.database_url {
            // Orders only live in memory for now
            info!(database_url = %url, "DATABASE_URL set but not used by the in-memory store");
        }

        Self {
            order_client: OrderClient::new(store),
            handle,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the client closes the store's channel; the actor drains its mailbox and exits.
    /// Clones of the client handed out earlier keep the actor alive until they are dropped too.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
