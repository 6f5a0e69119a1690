//! Entity trait implementation for the Order domain type.
//!
//! This is where the lifecycle rules live. The store actor calls
//! [`handle_action`](ActorEntity::handle_action) inside a single mailbox turn, so the status
//! check and the write it guards can never interleave with another request for the same order.

use crate::model::{Order, OrderId, OrderStatus};
use crate::order_actor::{CodeSource, OrderAction, OrderError, OrderFilter, Transition};
use actor_store::ActorEntity;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

impl Order {
    /// Moves to `next` if the lifecycle graph allows it.
    fn advance(&mut self, next: OrderStatus) -> Result<OrderStatus, OrderError> {
        let from = self.status;
        if !from.can_transition_to(next) {
            return Err(OrderError::InvalidTransition { from, to: next });
        }
        self.status = next;
        Ok(from)
    }
}

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Filter = OrderFilter;
    type Action = OrderAction;
    type ActionResult = Transition;
    type Context = Arc<dyn CodeSource>;
    type Error = OrderError;

    fn id(&self) -> &OrderId {
        &self.id
    }

    fn matches(&self, filter: &OrderFilter) -> bool {
        match filter {
            OrderFilter::AwaitingDriver => self.status.is_awaiting_driver(),
        }
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        codes: &Arc<dyn CodeSource>,
    ) -> Result<Transition, OrderError> {
        let mut confirmation_code = None;

        let from = match action {
            OrderAction::Accept { driver_id } => {
                if driver_id.trim().is_empty() {
                    return Err(OrderError::ValidationError("driver_id is required".into()));
                }
                let from = self.advance(OrderStatus::Assigned)?;
                self.driver_id = Some(driver_id);
                from
            }
            OrderAction::ReportArrival => {
                let from = self.advance(OrderStatus::Arrived)?;
                let code = codes.next_code();
                debug!(order_id = %self.id, code = %code, "Confirmation code issued");
                self.confirmation_code = Some(code.clone());
                confirmation_code = Some(code);
                from
            }
            OrderAction::ChangeStatus(next) => {
                // These two carry a driver id / confirmation code and have dedicated actions
                if matches!(next, OrderStatus::Assigned | OrderStatus::Arrived) {
                    return Err(OrderError::InvalidTransition {
                        from: self.status,
                        to: next,
                    });
                }
                self.advance(next)?
            }
            OrderAction::Cancel => self.advance(OrderStatus::Cancelled)?,
        };

        Ok(Transition {
            from,
            to: self.status,
            confirmation_code,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConfirmationCode, OrderCreate, Tariff};

    struct FixedCode;

    impl CodeSource for FixedCode {
        fn next_code(&self) -> ConfirmationCode {
            ConfirmationCode::from_number(4242)
        }
    }

    fn codes() -> Arc<dyn CodeSource> {
        Arc::new(FixedCode)
    }

    fn order_in(status: OrderStatus) -> Order {
        let mut order = Order::new(
            OrderId::new(),
            OrderCreate {
                passenger_id: "P1".into(),
                address_from: "A".into(),
                address_to: "B".into(),
                tariff: Tariff::new("economy"),
                ..Default::default()
            },
            300.0,
        );
        order.status = status;
        order
    }

    #[tokio::test]
    async fn test_accept_sets_driver() {
        let mut order = order_in(OrderStatus::Searching);
        let transition = order
            .handle_action(
                OrderAction::Accept {
                    driver_id: "D1".into(),
                },
                &codes(),
            )
            .await
            .unwrap();

        assert_eq!(transition.from, OrderStatus::Searching);
        assert_eq!(transition.to, OrderStatus::Assigned);
        assert_eq!(order.driver_id.as_deref(), Some("D1"));
    }

    #[tokio::test]
    async fn test_accept_rejected_outside_pre_assignment() {
        for status in [
            OrderStatus::Assigned,
            OrderStatus::Arrived,
            OrderStatus::InProgress,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ] {
            let mut order = order_in(status);
            let err = order
                .handle_action(
                    OrderAction::Accept {
                        driver_id: "D2".into(),
                    },
                    &codes(),
                )
                .await
                .unwrap_err();
            assert_eq!(
                err,
                OrderError::InvalidTransition {
                    from: status,
                    to: OrderStatus::Assigned
                }
            );
        }
    }

    #[tokio::test]
    async fn test_accept_requires_driver_id() {
        for blank in ["", "   "] {
            let mut order = order_in(OrderStatus::Searching);
            let err = order
                .handle_action(
                    OrderAction::Accept {
                        driver_id: blank.into(),
                    },
                    &codes(),
                )
                .await
                .unwrap_err();
            assert!(matches!(err, OrderError::ValidationError(_)));
            assert_eq!(order.status, OrderStatus::Searching);
            assert_eq!(order.driver_id, None);
        }
    }

    #[tokio::test]
    async fn test_arrival_issues_code() {
        let mut order = order_in(OrderStatus::Assigned);
        let transition = order
            .handle_action(OrderAction::ReportArrival, &codes())
            .await
            .unwrap();

        assert_eq!(transition.to, OrderStatus::Arrived);
        assert_eq!(
            transition.confirmation_code.as_ref().map(|c| c.as_str()),
            Some("04242")
        );
        assert_eq!(order.confirmation_code, transition.confirmation_code);
    }

    #[tokio::test]
    async fn test_arrival_requires_assignment() {
        let mut order = order_in(OrderStatus::Searching);
        let result = order.handle_action(OrderAction::ReportArrival, &codes()).await;
        assert!(matches!(result, Err(OrderError::InvalidTransition { .. })));
        assert_eq!(order.confirmation_code, None);
    }

    #[tokio::test]
    async fn test_change_status_follows_graph() {
        let mut order = order_in(OrderStatus::Arrived);
        order
            .handle_action(OrderAction::ChangeStatus(OrderStatus::InProgress), &codes())
            .await
            .unwrap();
        order
            .handle_action(OrderAction::ChangeStatus(OrderStatus::Completed), &codes())
            .await
            .unwrap();
        assert_eq!(order.status, OrderStatus::Completed);

        let back = order
            .handle_action(OrderAction::ChangeStatus(OrderStatus::Searching), &codes())
            .await;
        assert!(matches!(back, Err(OrderError::InvalidTransition { .. })));
    }

    #[tokio::test]
    async fn test_change_status_cannot_skip_side_data() {
        let mut order = order_in(OrderStatus::Searching);
        let result = order
            .handle_action(OrderAction::ChangeStatus(OrderStatus::Assigned), &codes())
            .await;
        assert!(matches!(result, Err(OrderError::InvalidTransition { .. })));
        assert_eq!(order.driver_id, None);
    }

    #[tokio::test]
    async fn test_cancel_rules() {
        for (status, allowed) in [
            (OrderStatus::Pending, true),
            (OrderStatus::Searching, true),
            (OrderStatus::Assigned, true),
            (OrderStatus::Arrived, true),
            (OrderStatus::InProgress, false),
            (OrderStatus::Completed, false),
            (OrderStatus::Cancelled, false),
        ] {
            let mut order = order_in(status);
            let result = order.handle_action(OrderAction::Cancel, &codes()).await;
            assert_eq!(result.is_ok(), allowed, "cancel from {status}");
        }
    }

    #[test]
    fn test_awaiting_driver_filter() {
        for status in OrderStatus::ALL {
            assert_eq!(
                order_in(status).matches(&OrderFilter::AwaitingDriver),
                matches!(status, OrderStatus::Pending | OrderStatus::Searching)
            );
        }
    }
}
