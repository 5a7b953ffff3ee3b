use super::{ApiError, AppState};
use axum::extract::State;
use axum::Json;
use needlefern_core::model::ProductListing;
use tracing::instrument;

/// `GET /products`
#[instrument(skip_all)]
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<ProductListing>, ApiError> {
    let listing = state.catalog.list_products().await?;
    Ok(Json(listing))
}
