//! # Catalog Actor
//!
//! The "server" half of the catalog. It owns the product fixture and the receiving end
//! of the request channel, and answers requests one at a time in its own Tokio task.

use super::message::CatalogRequest;
use crate::model::Product;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Actor that owns the read-only product catalog.
///
/// **Concurrency Model**:
/// The products are only ever touched from inside [`run`](Self::run), so no `Mutex` or
/// `RwLock` is needed. Answering a request is a clone of the fixture; the simulated
/// store latency is paid by the caller in [`CatalogClient`](super::CatalogClient), so a
/// slow listing never holds up the actor loop.
pub struct CatalogActor {
    receiver: mpsc::Receiver<CatalogRequest>,
    products: Vec<Product>,
}

impl CatalogActor {
    pub fn new(receiver: mpsc::Receiver<CatalogRequest>, products: Vec<Product>) -> Self {
        Self { receiver, products }
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        info!(size = self.products.len(), "Catalog actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CatalogRequest::List { respond_to } => {
                    debug!(size = self.products.len(), "List");
                    let _ = respond_to.send(Ok(self.products.clone()));
                }
            }
        }

        info!(size = self.products.len(), "Catalog actor shutdown");
    }
}
