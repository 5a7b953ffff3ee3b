//! # HTTP Boundary
//!
//! Routes the two storefront endpoints to the services in `needlefern_core`.
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | `/products` | [`products::list_products`] |
//! | POST | `/submit_order` | [`orders::submit_order`] |
//!
//! Handlers only see the [`CatalogService`] and [`OrderService`] traits through
//! [`AppState`], so tests can drive the router with the doubles from
//! `needlefern_core::mock`.

pub mod error;
pub mod orders;
pub mod products;

pub use error::ApiError;

use axum::routing::{get, post};
use axum::Router;
use needlefern_core::{CatalogService, OrderService};
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogService>,
    pub orders: Arc<dyn OrderService>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogService>, orders: Arc<dyn OrderService>) -> Self {
        Self { catalog, orders }
    }
}

/// Builds the storefront router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/products", get(products::list_products))
        .route("/submit_order", post(orders::submit_order))
        .with_state(state)
        .layer(permissive_cors())
        .layer(TraceLayer::new_for_http())
}

/// Any origin, method and header, with credentials.
///
/// `*` cannot be combined with credentials, so the request's own origin, method and
/// headers are echoed back instead. Development setting only: it lets every site call
/// the API with the user's cookies.
pub fn permissive_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
