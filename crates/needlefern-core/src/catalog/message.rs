//! Messages exchanged between the [`CatalogClient`](super::CatalogClient) and the
//! [`CatalogActor`](super::CatalogActor).

use super::CatalogError;
use crate::model::Product;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the catalog actor.
pub type Response<T> = oneshot::Sender<Result<T, CatalogError>>;

/// Requests the catalog actor understands.
///
/// The catalog is read-only, so there is nothing to create, update or delete.
#[derive(Debug)]
pub enum CatalogRequest {
    /// Every product, in fixture order.
    List { respond_to: Response<Vec<Product>> },
}
