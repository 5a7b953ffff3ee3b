//! # NeedleFern Core
//!
//! > **The storefront behind the NeedleFern cross-stitch shop.**
//!
//! This crate holds everything the storefront does, independent of HTTP: a fixed product
//! catalog and an order intake that acknowledges checkouts. There is no database, no
//! payment gateway and no inventory bookkeeping; both services simulate latency instead.
//!
//! ## 🏗️ Architecture
//!
//! 1. **Model** ([`model`]) - Plain serde DTOs: [`Product`](model::Product),
//!    [`OrderData`](model::OrderData), [`OrderAck`](model::OrderAck), ...
//! 2. **Catalog** ([`catalog`]) - A [`CatalogActor`](catalog::CatalogActor) owns the
//!    fixture in its own Tokio task; the cloneable [`CatalogClient`](catalog::CatalogClient)
//!    talks to it over a channel.
//! 3. **Order Intake** ([`order_intake`]) - A stateless service: validate, delay, log, ack.
//! 4. **Seams** ([`service`]) - [`CatalogService`](service::CatalogService) and
//!    [`OrderService`](service::OrderService), the traits the HTTP layer is written against.
//!
//! ## Concurrency Model
//!
//! - No shared mutable state. The catalog is read-only and owned by a single actor.
//! - Simulated delays use `tokio::time::sleep`, so they suspend only the request that
//!   pays them. The catalog delay is paid on the client side, before the actor is asked.
//! - Requests are not cancellable once started.
//!
//! ## 🧪 Testing
//!
//! See [`mock`] for doubles of both services, and [`tracing`] for log setup.

pub mod catalog;
pub mod mock;
pub mod model;
pub mod order_intake;
pub mod service;
pub mod tracing;

pub use catalog::{CatalogClient, CatalogError};
pub use order_intake::{OrderError, OrderIntake};
pub use service::{CatalogService, OrderService};
