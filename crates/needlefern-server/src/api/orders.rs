use super::{ApiError, AppState};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use needlefern_core::model::{OrderAck, OrderData};
use tracing::{debug, instrument};

/// `POST /submit_order`
///
/// Body rejections are taken as a `Result` so they come back as `{"detail": ...}` like
/// every other error.
#[instrument(skip_all)]
pub async fn submit_order(
    State(state): State<AppState>,
    payload: Result<Json<OrderData>, JsonRejection>,
) -> Result<Json<OrderAck>, ApiError> {
    let Json(order) = payload?;
    debug!(?order, "submit_order called");

    let ack = state.orders.submit_order(order).await?;
    Ok(Json(ack))
}
