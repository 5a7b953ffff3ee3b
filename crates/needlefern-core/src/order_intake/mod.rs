//! # Order Intake Service
//!
//! Takes in checkout submissions. The whole flow is linear:
//!
//! ```text
//! validate (non-empty cart) -> draw order id -> payment delay -> diagnostic log -> ack
//! ```
//!
//! with a single early exit when the cart is empty.
//!
//! Orders are never checked against the catalog: unknown product ids and non-positive
//! quantities are accepted as-is, and stock is never decremented.
//!
//! ## Usage
//!
//! ```rust
//! use needlefern_core::model::{OrderData, OrderItem, ProductId};
//! use needlefern_core::order_intake::OrderIntake;
//! use needlefern_core::service::OrderService;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let intake = OrderIntake::new(Duration::ZERO);
//!     let ack = intake
//!         .submit_order(OrderData {
//!             name: "Alice".to_string(),
//!             email: "a@x.com".to_string(),
//!             payment_method: "card".to_string(),
//!             items: vec![OrderItem { id: ProductId(1001), quantity: 2 }],
//!         })
//!         .await
//!         .unwrap();
//!     assert_eq!(ack.total_items, 1);
//! }
//! ```

pub mod error;
mod service;

pub use error::*;
pub use service::OrderIntake;

use std::time::Duration;

/// Default simulated payment initiation delay.
pub const DEFAULT_PAYMENT_LATENCY: Duration = Duration::from_secs(1);
