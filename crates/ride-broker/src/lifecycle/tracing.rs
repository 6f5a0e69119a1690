//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the subscriber used by the binary. The format is compact and hides
//! the module path (`with_target(false)`); the store logs carry an `entity_type` field instead.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run      # one line per store operation and transition
//! RUST_LOG=debug cargo run     # adds request payloads and issued confirmation codes
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Actor started entity_type="Order"
//! INFO scenario:create_order: Saved entity_type="Order" id=1b0f... replaced=false size=1
//! INFO scenario:create_order: Order created order_id=1b0f... price=600.0
//! INFO scenario:accept_order: Action ok entity_type="Order" id=1b0f...
//! INFO scenario:accept_order: Order transitioned order_id=1b0f... from=searching to=driver_assigned
//! ```
//!
//! Rejected transitions show up at `WARN` twice: once from the store (`Action failed`) with the
//! entity id, once from the client (`Order transition rejected`) inside the caller's span.

/// Installs the global subscriber. Call once, at startup.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
