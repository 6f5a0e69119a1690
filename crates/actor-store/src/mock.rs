//! # Mock Store & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>`, but the requests it sends are answered
//! from a queue of scripted expectations instead of a running `ResourceActor`. This makes it easy
//! to exercise the code *around* a store (domain clients, error mapping) deterministically.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real state management |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires a broken store) |
//!
//! ## Testing Failure Scenarios
//!
//! The main reason to reach for the mock is to simulate a store that cannot be written to,
//! something an in-memory actor never does on its own.
//!
//! ```rust
//! use actor_store::mock::MockClient;
//! use actor_store::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Trip { id: u32 }
//! #[derive(Debug)] enum TripAction {}
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct TripError;
//!
//! #[async_trait]
//! impl ActorEntity for Trip {
//!     type Id = u32; type Filter = (); type Action = TripAction; type ActionResult = ();
//!     type Context = (); type Error = TripError;
//!     fn id(&self) -> &u32 { &self.id }
//!     fn matches(&self, _: &()) -> bool { true }
//!     async fn handle_action(&mut self, _: TripAction, _: &()) -> Result<(), TripError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Trip>::new();
//!     let client = mock.client();
//!
//!     // Simulate a store that went away
//!     mock.expect_save(1).return_err(FrameworkError::ActorClosed);
//!
//!     let result = client.save(Trip { id: 1 }).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and a receiver you drive by hand, or the fluent
//! [`MockClient`] API.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request together with the scripted answer.
enum Expectation<T: ActorEntity> {
    Save {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn answer<R>(respond_to: Response<R>, response: Result<R, FrameworkError>) {
    let _ = respond_to.send(response);
}

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in FIFO order. A request that does not match the next expectation
/// (wrong kind or wrong id) panics the background task, which surfaces in the test as
/// `FrameworkError::ActorDropped`, and `verify()` then reports the leftover expectations.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone
                    .lock()
                    .expect("mock expectations poisoned")
                    .pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Save { item, respond_to },
                        Some(Expectation::Save { id, response }),
                    ) => {
                        assert_eq!(item.id(), &id, "save for unexpected id");
                        answer(respond_to, response);
                    }
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "get for unexpected id");
                        answer(respond_to, response);
                    }
                    (
                        ResourceRequest::Update { item, respond_to },
                        Some(Expectation::Update { id, response }),
                    ) => {
                        assert_eq!(item.id(), &id, "update for unexpected id");
                        answer(respond_to, response);
                    }
                    (
                        ResourceRequest::List {
                            filter: _,
                            respond_to,
                        },
                        Some(Expectation::List { response }),
                    ) => {
                        answer(respond_to, response);
                    }
                    (
                        ResourceRequest::Action {
                            id,
                            action: _,
                            respond_to,
                        },
                        Some(Expectation::Action {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "action for unexpected id");
                        answer(respond_to, response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `save` of the entity keyed `id`.
    pub fn expect_save(&mut self, id: T::Id) -> UnitExpectationBuilder<T> {
        UnitExpectationBuilder {
            id,
            is_update: false,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `update` of the entity keyed `id`.
    pub fn expect_update(&mut self, id: T::Id) -> UnitExpectationBuilder<T> {
        UnitExpectationBuilder {
            id,
            is_update: true,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `list` scan (the filter itself is not checked).
    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self
            .expectations
            .lock()
            .expect("mock expectations poisoned");
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

fn push<T: ActorEntity>(expectations: &Expectations<T>, expectation: Expectation<T>) {
    expectations
        .lock()
        .expect("mock expectations poisoned")
        .push_back(expectation);
}

/// Builder for `save` and `update` expectations, which both answer with `()`.
pub struct UnitExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    is_update: bool,
    expectations: Expectations<T>,
}

impl<T: ActorEntity> UnitExpectationBuilder<T> {
    fn finish(self, response: Result<(), FrameworkError>) {
        let expectation = if self.is_update {
            Expectation::Update {
                id: self.id,
                response,
            }
        } else {
            Expectation::Save {
                id: self.id,
                response,
            }
        };
        push(&self.expectations, expectation);
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self) {
        self.finish(Ok(()));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.finish(Err(error));
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Expectations<T>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        push(
            &self.expectations,
            Expectation::Get {
                id: self.id,
                response: Ok(value),
            },
        );
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        push(
            &self.expectations,
            Expectation::Get {
                id: self.id,
                response: Err(error),
            },
        );
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: ActorEntity> {
    expectations: Expectations<T>,
}

impl<T: ActorEntity> ListExpectationBuilder<T> {
    /// Sets the expectation to answer with `items`.
    pub fn return_ok(self, items: Vec<T>) {
        push(
            &self.expectations,
            Expectation::List {
                response: Ok(items),
            },
        );
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        push(
            &self.expectations,
            Expectation::List {
                response: Err(error),
            },
        );
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Expectations<T>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, result: T::ActionResult) {
        push(
            &self.expectations,
            Expectation::Action {
                id: self.id,
                response: Ok(result),
            },
        );
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        push(
            &self.expectations,
            Expectation::Action {
                id: self.id,
                response: Err(error),
            },
        );
    }
}

// =============================================================================
// RECEIVER HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// The returned client sends messages to a channel the test controls (`receiver`).
/// The test inspects each message, asserts on its payload and answers through the
/// embedded responder, simulating success, failure or delay deterministically.
///
/// **Note**: Consider using [`MockClient`] for a more fluent API.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Save request
pub async fn expect_save<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T, Response<()>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Save { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Filter, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::List { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Car {
        id: u32,
        plate: String,
    }

    #[derive(Debug, PartialEq)]
    enum CarAction {
        Repaint(String),
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Car error")]
    struct CarError;

    #[async_trait]
    impl ActorEntity for Car {
        type Id = u32;
        type Filter = ();
        type Action = CarAction;
        type ActionResult = ();
        type Context = ();
        type Error = CarError;

        fn id(&self) -> &u32 {
            &self.id
        }

        fn matches(&self, _filter: &()) -> bool {
            true
        }

        async fn handle_action(
            &mut self,
            action: CarAction,
            _ctx: &Self::Context,
        ) -> Result<(), Self::Error> {
            match action {
                CarAction::Repaint(plate) => self.plate = plate,
            }
            Ok(())
        }
    }

    fn car(id: u32) -> Car {
        Car {
            id,
            plate: format!("A{id:03}BC"),
        }
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Car>(10);

        let save_task = tokio::spawn(async move { client.save(car(1)).await });

        let (item, responder) = expect_save(&mut receiver)
            .await
            .expect("Expected Save request");
        assert_eq!(item.plate, "A001BC");
        responder.send(Ok(())).unwrap();

        let result = save_task.await.unwrap();
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_receiver_helpers_answer_reads() {
        let (client, mut receiver) = create_mock_client::<Car>(10);

        let reads = tokio::spawn(async move {
            let found = client.get(7).await;
            let listed = client.list(()).await;
            (found, listed)
        });

        let (id, responder) = expect_get(&mut receiver)
            .await
            .expect("Expected Get request");
        assert_eq!(id, 7);
        responder.send(Ok(car(7))).unwrap();

        let ((), responder) = expect_list(&mut receiver)
            .await
            .expect("Expected List request");
        responder.send(Err(FrameworkError::ActorClosed)).unwrap();

        let (found, listed) = reads.await.unwrap();
        assert_eq!(found.unwrap(), car(7));
        assert!(matches!(listed, Err(FrameworkError::ActorClosed)));
    }

    #[tokio::test]
    async fn test_receiver_helper_exposes_action_payload() {
        let (client, mut receiver) = create_mock_client::<Car>(10);

        let action_task = tokio::spawn(async move {
            client
                .perform_action(3, CarAction::Repaint("B123CD".into()))
                .await
        });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, 3);
        assert_eq!(action, CarAction::Repaint("B123CD".into()));
        responder.send(Ok(())).unwrap();

        assert!(action_task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_receiver_helper_rejects_other_requests() {
        let (client, mut receiver) = create_mock_client::<Car>(10);

        tokio::spawn(async move { client.save(car(1)).await });

        assert!(expect_get(&mut receiver).await.is_none());
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Car>::new();

        mock.expect_save(1).return_ok();
        mock.expect_get(1).return_ok(car(1));
        mock.expect_update(2)
            .return_err(FrameworkError::NotFound("2".into()));
        mock.expect_list().return_ok(vec![car(1)]);

        let client = mock.client();

        client.save(car(1)).await.unwrap();
        assert_eq!(client.get(1).await.unwrap(), car(1));
        assert!(matches!(
            client.update(car(2)).await,
            Err(FrameworkError::NotFound(id)) if id == "2"
        ));
        assert_eq!(client.list(()).await.unwrap().len(), 1);

        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_request_drops_responder() {
        let mut mock = MockClient::<Car>::new();
        mock.expect_get(1).return_ok(car(1));

        let result = mock.client().save(car(1)).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }
}
