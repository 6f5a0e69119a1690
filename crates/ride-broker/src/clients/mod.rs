//! Domain clients and the transport-facing status mapping.

pub mod order_client;
pub mod status;

pub use order_client::OrderClient;
pub use status::Operation;
