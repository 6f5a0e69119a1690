//! # System Lifecycle & Orchestration
//!
//! Everything needed to bring the broker up and down again:
//!
//! - [`config`] - [`BrokerConfig`] read from `.env` and the process environment
//! - [`tracing`](self::tracing) - [`setup_tracing`] for structured logs
//! - [`broker_system`] - [`BrokerSystem`], which starts the order store and wires its context
//!
//! ## Context Injection
//!
//! The order store actor is created first and only receives its dependency, the
//! [`CodeSource`](crate::order_actor::CodeSource) used on arrival, when it is started:
//!
//! ```rust,ignore
//! let (order_actor, store) = order_actor::new(config.order_mailbox_size);
//! let handle = tokio::spawn(order_actor.run(Arc::new(RandomCodes)));
//! ```
//!
//! Tests use [`BrokerSystem::with_code_source`] to make codes predictable.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the client** - closes the sender side of the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None` once the mailbox is drained
//! 3. **Await completion** - the join handle reports a panicked actor as an error

pub mod broker_system;
pub mod config;
pub mod tracing;

pub use self::tracing::setup_tracing;
pub use broker_system::BrokerSystem;
pub use config::{BrokerConfig, ConfigError};
