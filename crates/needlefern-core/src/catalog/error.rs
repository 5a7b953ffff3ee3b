//! Error types for the Catalog service.

use thiserror::Error;

/// Errors that can occur while reading the catalog.
///
/// Every variant is an internal fault from the caller's point of view; the HTTP layer
/// reports them all the same way.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The catalog actor is no longer running.
    #[error("Catalog actor closed")]
    ActorClosed,

    /// The catalog actor dropped the response channel before answering.
    #[error("Catalog actor dropped response channel")]
    ActorDropped,

    /// The backing store failed while assembling the listing.
    #[error("{0}")]
    Store(String),
}
