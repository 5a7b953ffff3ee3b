use super::ServerError;
use crate::api::{self, AppState};
use crate::config::ServerConfig;
use axum::Router;
use needlefern_core::catalog::{self, fixture, CatalogClient};
use needlefern_core::order_intake::OrderIntake;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

/// The runtime orchestrator for the storefront.
///
/// `StorefrontSystem` is responsible for:
/// - **Lifecycle Management**: Starting the catalog actor and stopping it again
/// - **Dependency Wiring**: Handing the service handles to the HTTP router
///
/// # Example
///
/// ```ignore
/// let system = StorefrontSystem::new(&config);
/// let listener = TcpListener::bind(config.socket_addr()).await?;
///
/// system.serve(listener, shutdown_signal()).await?;
/// system.shutdown().await?;
/// ```
pub struct StorefrontSystem {
    /// Client for the catalog actor
    pub catalog_client: CatalogClient,

    /// Order intake service (stateless)
    pub order_intake: OrderIntake,

    /// Task handle of the catalog actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl StorefrontSystem {
    /// Builds the fixture, spawns the catalog actor and prepares the order intake.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: &ServerConfig) -> Self {
        let (catalog_actor, catalog_client) = catalog::new(
            fixture::products(),
            config.catalog_buffer,
            config.catalog_latency(),
        );
        let handle = tokio::spawn(catalog_actor.run());

        let order_intake = OrderIntake::new(config.payment_latency());

        Self {
            catalog_client,
            order_intake,
            handle,
        }
    }

    /// The HTTP router, wired to this system's services.
    pub fn router(&self) -> Router {
        api::router(AppState::new(
            Arc::new(self.catalog_client.clone()),
            Arc::new(self.order_intake.clone()),
        ))
    }

    /// Serves HTTP on `listener` until `shutdown` resolves, then drains open connections.
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        info!(%addr, "NeedleFern API listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the last catalog client closes the actor's channel; the actor then leaves
    /// its loop and the task is awaited. Routers built with [`router`](Self::router) hold
    /// clients too and must be dropped first.
    ///
    /// # Errors
    /// [`ServerError::ActorTask`] if the catalog actor panicked.
    pub async fn shutdown(self) -> Result<(), ServerError> {
        info!("Shutting down system...");

        drop(self.catalog_client);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Catalog actor task failed");
            return Err(ServerError::ActorTask(e.to_string()));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
