//! The trip request and its lifecycle state.
//!
//! # Actor Store
//! [`Order`] implements the [`ActorEntity`](actor_store::ActorEntity) trait,
//! allowing it to be kept by a [`ResourceActor`](actor_store::ResourceActor).
//!
//! See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
//! - Lifecycle actions ([`OrderAction`](crate::order_actor::OrderAction))
//! - The scan filter ([`OrderFilter`](crate::order_actor::OrderFilter))
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Number of distinct confirmation codes (`00000` to `99999`).
pub const CODE_SPACE: u32 = 100_000;

/// Errors raised while parsing model values coming from the transport.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    #[error("unknown order status: {0}")]
    UnknownStatus(String),
    #[error("malformed order id: {0}")]
    MalformedId(String),
}

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub Uuid);

impl OrderId {
    /// A fresh random (v4) identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OrderId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| ModelError::MalformedId(s.to_string()))
    }
}

/// Where an order is in its lifecycle.
///
/// ```text
/// pending ──► searching ──► driver_assigned ──► waiting_for_confirmation ──► in_progress ──► completed
///    │            │               │                      │
///    └────────────┴───────────────┴──────────────────────┴──► cancelled
/// ```
///
/// `pending` may also go straight to `driver_assigned`. `completed` and `cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Searching,
    #[serde(rename = "driver_assigned")]
    Assigned,
    #[serde(rename = "waiting_for_confirmation")]
    Arrived,
    InProgress,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 7] = [
        OrderStatus::Pending,
        OrderStatus::Searching,
        OrderStatus::Assigned,
        OrderStatus::Arrived,
        OrderStatus::InProgress,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    /// Wire name, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Searching => "searching",
            OrderStatus::Assigned => "driver_assigned",
            OrderStatus::Arrived => "waiting_for_confirmation",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Pre-assignment states that drivers can still claim.
    pub fn is_awaiting_driver(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Searching)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    /// Whether `next` is a legal edge of the lifecycle graph from `self`.
    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (*self, next),
            (Pending, Searching)
                | (Pending | Searching, Assigned)
                | (Assigned, Arrived)
                | (Arrived, InProgress)
                | (InProgress, Completed)
                | (Pending | Searching | Assigned | Arrived, Cancelled)
        )
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ModelError::UnknownStatus(s.to_string()))
    }
}

/// Fare class chosen by the passenger. The set is open-ended; only `comfort` is priced differently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tariff(pub String);

impl Tariff {
    pub const COMFORT: &'static str = "comfort";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn comfort() -> Self {
        Self::new(Self::COMFORT)
    }

    pub fn is_comfort(&self) -> bool {
        self.0 == Self::COMFORT
    }
}

impl Display for Tariff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Five-digit, zero-padded code the driver hands to the passenger on arrival.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConfirmationCode(String);

impl ConfirmationCode {
    /// Builds the code for `n`, reduced into the `00000..=99999` range.
    pub fn from_number(n: u32) -> Self {
        Self(format!("{:05}", n % CODE_SPACE))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ConfirmationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub passenger_id: String,
    pub passenger_type: String,
    pub driver_id: Option<String>,
    pub status: OrderStatus,
    pub address_from: String,
    pub address_to: String,
    pub tariff: Tariff,
    pub selected_services: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    /// Internal only; never leaves the process in a serialized order.
    #[serde(skip)]
    pub confirmation_code: Option<ConfirmationCode>,
}

/// Payload for creating a new order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderCreate {
    pub passenger_id: String,
    #[serde(default)]
    pub passenger_type: String,
    pub address_from: String,
    pub address_to: String,
    #[serde(default)]
    pub tariff: Tariff,
    #[serde(default)]
    pub selected_services: Vec<String>,
    #[serde(default)]
    pub comments: Option<String>,
}

impl Order {
    /// Creates a new Order instance from a creation request.
    ///
    /// # Notes
    /// The order starts in `searching`, without a driver and without a confirmation code.
    /// The price is computed by the caller and stored as-is.
    pub fn new(id: OrderId, params: OrderCreate, price: f64) -> Self {
        Self {
            id,
            passenger_id: params.passenger_id,
            passenger_type: params.passenger_type,
            driver_id: None,
            status: OrderStatus::Searching,
            address_from: params.address_from,
            address_to: params.address_to,
            tariff: params.tariff,
            selected_services: params.selected_services,
            comments: params.comments,
            price,
            created_at: Utc::now(),
            confirmation_code: None,
        }
    }
}

/// What `create_order` hands back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderReceipt {
    pub order_id: OrderId,
    pub status: OrderStatus,
    pub price: f64,
}

impl From<&Order> for OrderReceipt {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id,
            status: order.status,
            price: order.price,
        }
    }
}

/// What `report_arrival` hands back to the driver.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArrivalReport {
    pub status: OrderStatus,
    pub confirmation_code: ConfirmationCode,
}
