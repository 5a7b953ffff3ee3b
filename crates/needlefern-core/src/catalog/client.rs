//! # Catalog Client
//!
//! Provides the high-level API for reading the catalog. It wraps the sender half of the
//! [`CatalogActor`](super::CatalogActor) channel and implements
//! [`CatalogService`](crate::service::CatalogService).

use super::message::CatalogRequest;
use super::CatalogError;
use crate::model::{Product, ProductListing};
use crate::service::CatalogService;
use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Client for reading the product catalog.
///
/// Cheap to clone: it only holds a channel sender and the configured latency.
#[derive(Clone)]
pub struct CatalogClient {
    sender: mpsc::Sender<CatalogRequest>,
    latency: Duration,
}

impl CatalogClient {
    /// `latency` is the simulated backing-store delay paid by every listing.
    pub fn new(sender: mpsc::Sender<CatalogRequest>, latency: Duration) -> Self {
        Self { sender, latency }
    }

    /// Fetches the raw products from the actor, without the simulated delay.
    pub async fn products(&self) -> Result<Vec<Product>, CatalogError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(CatalogRequest::List { respond_to })
            .await
            .map_err(|_| CatalogError::ActorClosed)?;
        response.await.map_err(|_| CatalogError::ActorDropped)?
    }
}

#[async_trait]
impl CatalogService for CatalogClient {
    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<ProductListing, CatalogError> {
        debug!(latency_ms = self.latency.as_millis() as u64, "Reading catalog");
        // Suspends only this request's task.
        tokio::time::sleep(self.latency).await;
        let products = self.products().await?;
        Ok(ProductListing::fresh(products))
    }
}
