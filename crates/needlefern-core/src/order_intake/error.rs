//! Error types for the Order Intake service.

use thiserror::Error;

/// Errors that can occur during order submission.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The submitted order has no line items.
    #[error("Cart is empty.")]
    EmptyCart,
}
