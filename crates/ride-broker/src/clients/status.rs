//! Status codes the transport layer answers with.
//!
//! The HTTP server itself lives outside this crate; it asks the core which code belongs to a
//! successful call and which to an [`OrderError`], so every route reports failures the same way.

use crate::order_actor::OrderError;

/// Controller operations exposed over the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateOrder,
    GetOrder,
    AcceptOrder,
    ReportArrival,
    ChangeStatus,
    CancelOrder,
    ListAvailableOrders,
}

impl Operation {
    pub fn success_status(&self) -> u16 {
        match self {
            Operation::CreateOrder => 201,
            _ => 200,
        }
    }
}

impl OrderError {
    /// HTTP status for this error when raised by `op`.
    pub fn status_code(&self, op: Operation) -> u16 {
        match self {
            OrderError::NotFound(_) => 404,
            // Claims and explicit status changes conflict with the current state; the
            // remaining transitions are treated as bad requests
            OrderError::InvalidTransition { .. } => match op {
                Operation::AcceptOrder | Operation::ChangeStatus => 409,
                _ => 400,
            },
            // Accept shares one column for both kinds of rejection
            OrderError::ValidationError(_) => match op {
                Operation::AcceptOrder => 409,
                _ => 400,
            },
            OrderError::PersistenceError(_) => 500,
        }
    }
}
