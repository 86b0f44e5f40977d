//! Simulated checkout.

use std::time::Duration;

use chronolux_core::{StoreError, StoreResult};

use crate::cart::{Cart, OrderReceipt};

/// Simulated order-placement latency.
pub const DEFAULT_CHECKOUT_DELAY: Duration = Duration::from_millis(1500);

/// Place an order for everything in `cart`.
///
/// An empty cart fails immediately with [`StoreError::EmptyCollection`] and no
/// delay. Otherwise waits `delay`, then empties the cart in one step and
/// returns the receipt carrying the pre-clear total. The exclusive borrow of
/// `cart` spans the wait, so nothing can change the cart mid-checkout.
pub async fn checkout(cart: &mut Cart, delay: Duration) -> StoreResult<OrderReceipt> {
    if cart.is_empty() {
        return Err(StoreError::empty("cart"));
    }

    tracing::debug!(lines = cart.len(), delay_ms = delay.as_millis() as u64, "placing order");
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let receipt = cart.take_order()?;
    tracing::info!(
        order_id = %receipt.order_id,
        total = receipt.total,
        lines = receipt.lines.len(),
        "order placed"
    );
    Ok(receipt)
}
