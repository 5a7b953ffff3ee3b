//! # System Lifecycle
//!
//! Starts the storefront, serves it, and stops it cleanly.
//!
//! 1. **Start** - [`StorefrontSystem::new`] builds the fixture once and spawns the catalog
//!    actor in its own Tokio task.
//! 2. **Serve** - [`StorefrontSystem::serve`] runs axum until [`shutdown_signal`] (or any
//!    other future) resolves, letting in-flight requests finish.
//! 3. **Stop** - [`StorefrontSystem::shutdown`] drops the catalog client, which closes the
//!    actor's channel, and waits for the actor task to end.

mod signal;
mod storefront_system;

pub use signal::shutdown_signal;
pub use storefront_system::StorefrontSystem;

use thiserror::Error;

/// Errors raised while starting, serving or stopping the system.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Actor task failed: {0}")]
    ActorTask(String),
}
