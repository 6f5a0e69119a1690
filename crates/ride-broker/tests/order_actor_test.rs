use actor_store::mock::MockClient;
use actor_store::{ActorClient, FrameworkError};
use ride_broker::clients::{Operation, OrderClient};
use ride_broker::model::{ConfirmationCode, Order, OrderCreate, OrderId, OrderStatus, Tariff};
use ride_broker::order_actor::{self, CodeSource, OrderError};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Hands out 00001, 00002, ... so arrival codes can be asserted exactly.
struct SequentialCodes(AtomicU32);

impl CodeSource for SequentialCodes {
    fn next_code(&self) -> ConfirmationCode {
        ConfirmationCode::from_number(self.0.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

fn economy(passenger: &str) -> OrderCreate {
    OrderCreate {
        passenger_id: passenger.into(),
        address_from: "Station".into(),
        address_to: "Harbour".into(),
        tariff: Tariff::new("economy"),
        ..Default::default()
    }
}

/// Real Order actor with an injected, predictable code source.
#[tokio::test]
async fn test_order_actor_with_injected_codes() {
    let (order_actor, store) = order_actor::new(8);
    let client = OrderClient::new(store);
    let actor_handle =
        tokio::spawn(order_actor.run(Arc::new(SequentialCodes(AtomicU32::new(0)))));

    let first = client.create_order(economy("P1")).await.unwrap();
    let second = client.create_order(economy("P2")).await.unwrap();
    assert_eq!(first.price, 300.0);

    for receipt in [&first, &second] {
        client.accept_order(receipt.order_id, "D7").await.unwrap();
    }
    let a = client.report_arrival(first.order_id).await.unwrap();
    let b = client.report_arrival(second.order_id).await.unwrap();
    assert_eq!(a.confirmation_code.as_str(), "00001");
    assert_eq!(b.confirmation_code.as_str(), "00002");

    // The code is kept on the stored order
    let stored = client.fetch(first.order_id).await.unwrap();
    assert_eq!(stored.confirmation_code, Some(a.confirmation_code));
    assert_eq!(stored.driver_id.as_deref(), Some("D7"));

    drop(client);
    actor_handle.await.unwrap();
}

/// A second arrival report is rejected and does not replace the issued code.
#[tokio::test]
async fn test_repeated_arrival_keeps_first_code() {
    let (order_actor, store) = order_actor::new(8);
    let client = OrderClient::new(store);
    let actor_handle =
        tokio::spawn(order_actor.run(Arc::new(SequentialCodes(AtomicU32::new(41)))));

    let receipt = client.create_order(economy("P1")).await.unwrap();
    client.accept_order(receipt.order_id, "D1").await.unwrap();
    let arrival = client.report_arrival(receipt.order_id).await.unwrap();
    assert_eq!(arrival.confirmation_code.as_str(), "00042");

    let err = client.report_arrival(receipt.order_id).await.unwrap_err();
    assert_eq!(
        err,
        OrderError::InvalidTransition {
            from: OrderStatus::Arrived,
            to: OrderStatus::Arrived
        }
    );
    assert_eq!(err.status_code(Operation::ReportArrival), 400);

    let order = client.get_order(receipt.order_id).await.unwrap();
    assert_eq!(order.confirmation_code, Some(arrival.confirmation_code));

    drop(client);
    actor_handle.await.unwrap();
}

/// A store that fails on write surfaces as a persistence error on every lifecycle call.
#[tokio::test]
async fn test_store_failures_become_persistence_errors() {
    let mut mock = MockClient::<Order>::new();
    let id = OrderId::new();
    mock.expect_action(id).return_err(FrameworkError::ActorDropped);
    mock.expect_action(id).return_err(FrameworkError::entity(
        std::io::Error::other("write timed out"),
    ));

    let client = OrderClient::new(mock.client());

    let first = client.cancel_order(id).await.unwrap_err();
    assert!(matches!(first, OrderError::PersistenceError(_)));
    assert_eq!(first.status_code(Operation::CancelOrder), 500);

    let second = client
        .change_status(id, OrderStatus::InProgress)
        .await
        .unwrap_err();
    assert!(matches!(second, OrderError::PersistenceError(msg) if msg.contains("write timed out")));

    mock.verify();
}

/// A malformed id coming from the transport is reported as not found.
#[test]
fn test_malformed_id_is_not_found() {
    let err = "order-42".parse::<OrderId>().map_err(OrderError::from).unwrap_err();
    assert_eq!(err, OrderError::NotFound("order-42".into()));
    assert_eq!(err.status_code(Operation::GetOrder), 404);
}
