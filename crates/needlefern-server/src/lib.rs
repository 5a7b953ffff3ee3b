//! # NeedleFern Server
//!
//! The HTTP face of [`needlefern_core`].
//!
//! - **[config]**: [`ServerConfig`](config::ServerConfig), from flags or `NEEDLEFERN_*` variables.
//! - **[api]**: The axum router, CORS policy and error-to-response mapping.
//! - **[lifecycle]**: [`StorefrontSystem`](lifecycle::StorefrontSystem), which starts the
//!   catalog actor, serves HTTP and shuts everything down.
//!
//! The binary entry point is in `main.rs`. This library exists so integration tests can
//! drive the router in-process.

pub mod api;
pub mod config;
pub mod lifecycle;
