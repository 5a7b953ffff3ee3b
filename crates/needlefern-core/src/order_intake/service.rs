use super::OrderError;
use crate::model::{OrderAck, OrderData, OrderId};
use crate::service::OrderService;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument};

/// Accepts checkout submissions and acknowledges them.
///
/// There is no order store: each submission is validated, delayed, logged and answered,
/// then forgotten. Resubmitting the same payload yields a new id and a second log record.
///
/// # Order ids
/// Ids come from an injected generator, wall-clock milliseconds by default.
#[derive(Clone)]
pub struct OrderIntake {
    payment_latency: Duration,
    next_order_id: Arc<dyn Fn() -> OrderId + Send + Sync>,
}

impl OrderIntake {
    /// Creates an intake that stamps orders with the current time.
    pub fn new(payment_latency: Duration) -> Self {
        Self::with_id_source(payment_latency, OrderId::now)
    }

    /// Creates an intake with a custom order id generator.
    pub fn with_id_source(
        payment_latency: Duration,
        next_order_id: impl Fn() -> OrderId + Send + Sync + 'static,
    ) -> Self {
        Self {
            payment_latency,
            next_order_id: Arc::new(next_order_id),
        }
    }
}

#[async_trait]
impl OrderService for OrderIntake {
    /// Validates, "initiates payment" and acknowledges an order.
    ///
    /// # Errors
    /// [`OrderError::EmptyCart`] when `items` is empty. Nothing is logged in that case.
    #[instrument(skip_all)]
    async fn submit_order(&self, order: OrderData) -> Result<OrderAck, OrderError> {
        if order.items.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let order_id = (self.next_order_id)();

        // Simulated payment initiation; not cancellable.
        tokio::time::sleep(self.payment_latency).await;

        let total_items = order.items.len();
        info!(
            %order_id,
            customer = %order.name,
            email = %order.email,
            payment_method = %order.payment_method,
            total_items,
            "New order received"
        );

        Ok(OrderAck::new(order_id, total_items))
    }
}
