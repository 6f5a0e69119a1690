//! # Order Client
//!
//! Provides a high‑level API for the order lifecycle.
//! It wraps a `ResourceClient<Order>`: creation validates, prices and saves; every later
//! change is sent as a single [`OrderAction`] so the status check happens inside the actor.
use crate::model::{
    ArrivalReport, DriverStatusUpdate, Order, OrderCreate, OrderId, OrderReceipt, OrderStatus,
};
use crate::order_actor::{pricing, OrderAction, OrderError, OrderFilter, Transition};
use actor_store::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, error, info, instrument, warn};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Validates the request, prices it and stores a new `searching` order.
    #[instrument(skip(self, params))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderReceipt, OrderError> {
        debug!(?params, "create_order called");
        validate(&params)?;

        let price = pricing::quote(&params.tariff, &params.selected_services);
        let order = Order::new(OrderId::new(), params, price);
        let receipt = OrderReceipt::from(&order);

        // Any store failure on create is a persistence failure, including a NotFound
        self.inner
            .save(order)
            .await
            .map_err(|e| OrderError::PersistenceError(e.to_string()))?;

        info!(order_id = %receipt.order_id, price = receipt.price, "Order created");
        Ok(receipt)
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.fetch(id).await
    }

    /// Assigns `driver_id` to an order that is still waiting for a driver.
    ///
    /// A blank driver id is rejected once the order is known to exist.
    #[instrument(skip(self))]
    pub async fn accept_order(
        &self,
        id: OrderId,
        driver_id: &str,
    ) -> Result<OrderStatus, OrderError> {
        let transition = self
            .transition(
                id,
                OrderAction::Accept {
                    driver_id: driver_id.to_string(),
                },
            )
            .await?;
        Ok(transition.to)
    }

    /// Marks the driver as arrived and returns the code the passenger must confirm.
    #[instrument(skip(self))]
    pub async fn report_arrival(&self, id: OrderId) -> Result<ArrivalReport, OrderError> {
        let transition = self.transition(id, OrderAction::ReportArrival).await?;
        let confirmation_code = transition.confirmation_code.ok_or_else(|| {
            OrderError::PersistenceError(format!("no confirmation code issued for {id}"))
        })?;
        Ok(ArrivalReport {
            status: transition.to,
            confirmation_code,
        })
    }

    #[instrument(skip(self))]
    pub async fn change_status(
        &self,
        id: OrderId,
        new_status: OrderStatus,
    ) -> Result<OrderStatus, OrderError> {
        let transition = self
            .transition(id, OrderAction::ChangeStatus(new_status))
            .await?;
        Ok(transition.to)
    }

    #[instrument(skip(self))]
    pub async fn cancel_order(&self, id: OrderId) -> Result<OrderStatus, OrderError> {
        let transition = self.transition(id, OrderAction::Cancel).await?;
        Ok(transition.to)
    }

    /// Orders a driver can still claim (`pending` or `searching`), in no particular order.
    #[instrument(skip(self))]
    pub async fn list_available_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.scan(OrderFilter::AwaitingDriver).await
    }

    /// Records a driver's availability report. Nothing in the lifecycle reads it.
    #[instrument(skip(self, update))]
    pub fn report_driver_status(&self, driver_id: Option<&str>, update: &DriverStatusUpdate) {
        let driver_id = driver_id
            .filter(|id| !id.is_empty())
            .unwrap_or("unknown_driver");
        info!(
            driver_id,
            availability = update.availability(),
            lat = update.current_location.lat,
            lng = update.current_location.lng,
            "Driver status reported"
        );
    }

    async fn transition(
        &self,
        id: OrderId,
        action: OrderAction,
    ) -> Result<Transition, OrderError> {
        match self.inner.perform_action(id, action).await {
            Ok(transition) => {
                info!(order_id = %id, from = %transition.from, to = %transition.to, "Order transitioned");
                Ok(transition)
            }
            Err(e) => {
                let unreachable = e.is_unreachable();
                let e = Self::map_error(e);
                if unreachable {
                    error!(order_id = %id, error = %e, "Order store unreachable");
                } else {
                    warn!(order_id = %id, error = %e, "Order transition rejected");
                }
                Err(e)
            }
        }
    }
}

fn validate(params: &OrderCreate) -> Result<(), OrderError> {
    for (field, value) in [
        ("passenger_id", &params.passenger_id),
        ("address_from", &params.address_from),
        ("address_to", &params.address_to),
    ] {
        if value.trim().is_empty() {
            return Err(OrderError::ValidationError(format!("{field} is required")));
        }
    }
    Ok(())
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from(e)
    }
}
