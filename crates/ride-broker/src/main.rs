//! # Ride Broker demo
//!
//! Runs one trip through the broker with the real store actor:
//! 1. Load [`BrokerConfig`] and set up tracing.
//! 2. Start the [`BrokerSystem`].
//! 3. Create a comfort order, accept it, report arrival, then cancel it.
//! 4. Shut down gracefully.

use ride_broker::lifecycle::{setup_tracing, BrokerConfig, BrokerSystem};
use ride_broker::model::{DriverStatusUpdate, Location, OrderCreate, Tariff};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = BrokerConfig::from_env().map_err(|e| e.to_string())?;
    info!(port = %config.port, "Starting ride broker");

    let system = BrokerSystem::new(&config);

    let params = OrderCreate {
        passenger_id: "P1".to_string(),
        passenger_type: "regular".to_string(),
        address_from: "Lenina 1".to_string(),
        address_to: "Airport".to_string(),
        tariff: Tariff::comfort(),
        selected_services: vec!["wifi".to_string(), "child_seat".to_string()],
        comments: Some("Two suitcases".to_string()),
    };

    let span = tracing::info_span!("scenario");
    let scenario = async {
        let client = &system.order_client;

        let receipt = client.create_order(params).await?;
        info!(order_id = %receipt.order_id, price = receipt.price, status = %receipt.status, "Order placed");

        let available = client.list_available_orders().await?;
        info!(count = available.len(), "Orders awaiting a driver");

        client.report_driver_status(
            Some("D1"),
            &DriverStatusUpdate {
                is_available: true,
                current_location: Location {
                    lat: 55.7558,
                    lng: 37.6173,
                },
            },
        );

        let status = client.accept_order(receipt.order_id, "D1").await?;
        info!(status = %status, "Driver assigned");

        let arrival = client.report_arrival(receipt.order_id).await?;
        info!(status = %arrival.status, "Driver arrived");

        let status = client.cancel_order(receipt.order_id).await?;
        info!(status = %status, "Order cancelled");

        Ok::<_, ride_broker::order_actor::OrderError>(())
    }
    .instrument(span)
    .await;

    system.shutdown().await?;

    if let Err(e) = scenario {
        error!(error = %e, "Scenario failed");
        return Err(e.to_string());
    }

    info!("Application completed successfully");
    Ok(())
}
