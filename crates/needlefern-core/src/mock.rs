//! # Mock Services & Testing Guide
//!
//! In-memory doubles for the storefront services, for testing code *around* them
//! (mainly the HTTP handlers) without the fixture, the actor task, or the simulated
//! delays.
//!
//! | Double | Stands in for | How |
//! |--------|---------------|-----|
//! | [`MockCatalog`] | [`CatalogActor`](crate::catalog::CatalogActor) | Answers a real [`CatalogClient`] from an expectation queue |
//! | [`MockOrderService`] | [`OrderIntake`](crate::order_intake::OrderIntake) | Implements [`OrderService`] from an expectation queue |
//!
//! Both follow the same pattern: queue expectations with `expect_*().return_ok(..)` or
//! `return_err(..)`, hand the double to the code under test, then call `verify()`.
//!
//! ## Injecting a catalog fault
//!
//! ```rust
//! use needlefern_core::catalog::CatalogError;
//! use needlefern_core::mock::MockCatalog;
//! use needlefern_core::service::CatalogService;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockCatalog::new();
//!     mock.expect_list().return_err(CatalogError::Store("timeout".into()));
//!
//!     let result = mock.client().list_products().await;
//!     assert!(matches!(result, Err(CatalogError::Store(_))));
//!     mock.verify();
//! }
//! ```

use crate::catalog::message::CatalogRequest;
use crate::catalog::{CatalogClient, CatalogError};
use crate::model::{OrderAck, OrderData, Product};
use crate::order_intake::OrderError;
use crate::service::OrderService;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;

type Queue<T> = Arc<Mutex<VecDeque<T>>>;

// =============================================================================
// CATALOG
// =============================================================================

/// A stand-in for the catalog actor.
///
/// # Example
///
/// ```ignore
/// let mut mock = MockCatalog::new();
/// mock.expect_list().return_ok(vec![product]);
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockCatalog {
    client: CatalogClient,
    expectations: Queue<Result<Vec<Product>, CatalogError>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCatalog {
    /// Creates a new mock catalog with no expectations.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<CatalogRequest>(100);
        let expectations: Queue<Result<Vec<Product>, CatalogError>> =
            Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (CatalogRequest::List { respond_to }, Some(response)) => {
                        let _ = respond_to.send(response);
                    }
                    (CatalogRequest::List { .. }, None) => {
                        panic!("Unexpected catalog List request");
                    }
                }
            }
        });

        Self {
            client: CatalogClient::new(sender, Duration::ZERO),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client (with no latency) wired to this mock.
    pub fn client(&self) -> CatalogClient {
        self.client.clone()
    }

    /// Expects a `List` request.
    pub fn expect_list(&mut self) -> ListExpectationBuilder {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all catalog expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `List` expectations.
pub struct ListExpectationBuilder {
    expectations: Queue<Result<Vec<Product>, CatalogError>>,
}

impl ListExpectationBuilder {
    /// Sets the expectation to return these products.
    pub fn return_ok(self, products: Vec<Product>) {
        self.expectations.lock().unwrap().push_back(Ok(products));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: CatalogError) {
        self.expectations.lock().unwrap().push_back(Err(error));
    }
}

// =============================================================================
// ORDERS
// =============================================================================

/// A stand-in for the order intake service that also records what it was sent.
#[derive(Clone, Default)]
pub struct MockOrderService {
    expectations: Queue<Result<OrderAck, OrderError>>,
    received: Arc<Mutex<Vec<OrderData>>>,
}

impl MockOrderService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `submit_order` call.
    pub fn expect_submit(&mut self) -> SubmitExpectationBuilder {
        SubmitExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Orders received so far, in arrival order.
    pub fn received(&self) -> Vec<OrderData> {
        self.received.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all order expectations were met. {} remaining", exps.len());
        }
    }
}

#[async_trait]
impl OrderService for MockOrderService {
    async fn submit_order(&self, order: OrderData) -> Result<OrderAck, OrderError> {
        self.received.lock().unwrap().push(order);
        let expectation = self.expectations.lock().unwrap().pop_front();
        match expectation {
            Some(response) => response,
            None => panic!("Unexpected submit_order call"),
        }
    }
}

/// Builder for `submit_order` expectations.
pub struct SubmitExpectationBuilder {
    expectations: Queue<Result<OrderAck, OrderError>>,
}

impl SubmitExpectationBuilder {
    /// Sets the expectation to return a successful acknowledgment.
    pub fn return_ok(self, ack: OrderAck) {
        self.expectations.lock().unwrap().push_back(Ok(ack));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: OrderError) {
        self.expectations.lock().unwrap().push_back(Err(error));
    }
}
