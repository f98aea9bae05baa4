//! Simulated order submission.
//!
//! There is no order backend: submitting waits for a configurable delay,
//! mints a random order id, and clears the cart. The confirmation is the
//! terminal state.

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use tracing::{info, instrument, warn};

use tasty_bites_core::OrderId;

use crate::cart::Cart;
use crate::error::CheckoutError;
use crate::storage::CartStorage;
use crate::store::{CartStore, Persisted};

/// Flat delivery fee charged on non-empty orders.
pub const DEFAULT_DELIVERY_FEE: Decimal = Decimal::from_parts(299, 0, 0, false, 2);

/// Length of generated order ids.
pub const ORDER_ID_LEN: usize = 9;

const ORDER_ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Checkout knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutOptions {
    /// Fee added to every non-empty order.
    pub delivery_fee: Decimal,
    /// Simulated submission latency.
    pub submit_delay: Duration,
    /// Offset from placement to the estimated delivery time.
    pub delivery_eta: TimeDelta,
}

impl Default for CheckoutOptions {
    fn default() -> Self {
        Self {
            delivery_fee: DEFAULT_DELIVERY_FEE,
            submit_delay: Duration::from_millis(1500),
            delivery_eta: TimeDelta::minutes(45),
        }
    }
}

/// Amounts shown on the cart page and at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSummary {
    pub subtotal: Decimal,
    /// Zero when the cart is empty.
    pub delivery_fee: Decimal,
    pub total: Decimal,
}

impl OrderSummary {
    #[must_use]
    pub fn for_cart(cart: &Cart, delivery_fee: Decimal) -> Self {
        let subtotal = cart.calculate_total();
        let delivery_fee = if cart.is_empty() {
            Decimal::ZERO
        } else {
            delivery_fee
        };
        Self {
            subtotal,
            delivery_fee,
            total: subtotal + delivery_fee,
        }
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    pub summary: OrderSummary,
    /// Units ordered across all lines.
    pub item_count: u64,
    pub placed_at: DateTime<Utc>,
    pub estimated_delivery: DateTime<Utc>,
}

/// Mint a random lowercase base-36 order id.
#[must_use]
pub fn generate_order_id<R: Rng>(rng: &mut R) -> OrderId {
    let id: String = (0..ORDER_ID_LEN)
        .map(|_| {
            let index = rng.random_range(0..ORDER_ID_ALPHABET.len());
            ORDER_ID_ALPHABET.get(index).copied().map_or('0', char::from)
        })
        .collect();
    OrderId::new(id)
}

/// Submit the cart as an order.
///
/// The summary is taken before the delay; the cart is cleared after it.
/// A failed write of the cleared cart is logged but does not fail the order.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] if there is nothing to order.
#[instrument(skip_all)]
pub async fn place_order<S: CartStorage>(
    store: &mut CartStore<S>,
    options: &CheckoutOptions,
) -> Result<OrderConfirmation, CheckoutError> {
    if store.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let summary = OrderSummary::for_cart(store.cart(), options.delivery_fee);
    let item_count = store.item_count();

    tokio::time::sleep(options.submit_delay).await;

    let order_id = generate_order_id(&mut rand::rng());
    let placed_at = Utc::now();

    if let Persisted::Degraded(warning) = store.clear_cart() {
        warn!(order_id = %order_id, error = %warning, "Order placed but cleared cart was not persisted");
    }

    info!(
        order_id = %order_id,
        total = %summary.total,
        item_count,
        "Order confirmed"
    );

    Ok(OrderConfirmation {
        order_id,
        summary,
        item_count,
        placed_at,
        estimated_delivery: placed_at + options.delivery_eta,
    })
}
