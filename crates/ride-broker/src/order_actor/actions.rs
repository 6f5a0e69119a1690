use crate::model::{ConfirmationCode, OrderStatus};

/// Lifecycle operations applied atomically inside the Order actor.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderAction {
    /// Claim a `pending`/`searching` order for a driver.
    Accept { driver_id: String },
    /// The assigned driver is at the pickup point.
    ReportArrival,
    /// Move along the lifecycle graph to a status that carries no side data.
    ChangeStatus(OrderStatus),
    Cancel,
}

/// Outcome of an [`OrderAction`]: the edge that was taken, plus the code issued on arrival.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub from: OrderStatus,
    pub to: OrderStatus,
    pub confirmation_code: Option<ConfirmationCode>,
}

/// Scans supported by the order store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderFilter {
    /// `pending` or `searching` orders that a driver can still accept.
    AwaitingDriver,
}
