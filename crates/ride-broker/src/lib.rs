//! # Ride Broker
//!
//! Core of a ride-hailing order broker: passengers create trip requests, drivers claim them and
//! move them through a fixed lifecycle, and drivers can list the requests nobody has claimed yet.
//!
//! - [`model`]: the [`Order`](model::Order) record, its status enum and the request/response shapes.
//! - [`order_actor`]: lifecycle rules, pricing and confirmation codes, executed inside the store actor.
//! - [`clients`]: [`OrderClient`](clients::OrderClient), the API the transport layer calls.
//! - [`lifecycle`]: configuration, tracing and the [`BrokerSystem`](lifecycle::BrokerSystem) orchestrator.

pub mod clients;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
