//! # Catalog Service
//!
//! Serves the fixed product list, with a simulated backing-store delay.
//!
//! ## Structure
//!
//! - [`fixture`] - The hardcoded [`Product`] records
//! - [`CatalogActor`] - Owns the fixture and answers requests sequentially
//! - [`CatalogClient`] - Cloneable handle used by the HTTP layer; pays the latency
//! - [`CatalogError`] - Internal faults (actor gone, store failure)
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use needlefern_core::catalog;
//! use needlefern_core::service::CatalogService;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = catalog::new(catalog::fixture::products(), 32, Duration::ZERO);
//!     tokio::spawn(actor.run());
//!
//!     let listing = client.list_products().await.unwrap();
//!     assert_eq!(listing.products.len(), 4);
//!     assert!(!listing.cached);
//! }
//! ```

mod actor;
mod client;
pub mod error;
pub mod fixture;
pub mod message;

pub use actor::CatalogActor;
pub use client::CatalogClient;
pub use error::*;

use crate::model::Product;
use std::time::Duration;
use tokio::sync::mpsc;

/// Default simulated backing-store delay.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

/// Creates a catalog actor owning `products` and a client bound to it.
///
/// # Arguments
/// * `products` - The catalog contents, moved into the actor
/// * `buffer_size` - Capacity of the request channel (at least 1)
/// * `latency` - Delay paid by every
///   [`list_products`](crate::service::CatalogService::list_products) call
pub fn new(
    products: Vec<Product>,
    buffer_size: usize,
    latency: Duration,
) -> (CatalogActor, CatalogClient) {
    let (sender, receiver) = mpsc::channel(buffer_size.max(1));
    let actor = CatalogActor::new(receiver, products);
    let client = CatalogClient::new(sender, latency);
    (actor, client)
}
