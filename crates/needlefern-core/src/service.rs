//! # Service Traits
//!
//! The seams between the HTTP boundary and the storefront services. Handlers hold these
//! as trait objects, so the real [`CatalogClient`](crate::catalog::CatalogClient) and
//! [`OrderIntake`](crate::order_intake::OrderIntake) can be swapped for the doubles in
//! [`mock`](crate::mock).
use crate::catalog::CatalogError;
use crate::model::{OrderAck, OrderData, ProductListing};
use crate::order_intake::OrderError;
use async_trait::async_trait;

/// Read access to the product catalog.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Returns the whole catalog, in fixture order, with `cached = false`.
    async fn list_products(&self) -> Result<ProductListing, CatalogError>;
}

/// Checkout submission.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Validates and acknowledges an order.
    async fn submit_order(&self, order: OrderData) -> Result<OrderAck, OrderError>;
}
