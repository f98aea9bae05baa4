//! Checkout command.
//!
//! Places a simulated order for everything in the cart, then empties it.

use tracing::info;

use tasty_bites_cart::{CartStorage, CartStore, CheckoutOptions, place_order};
use tasty_bites_core::format_currency;

use super::CommandResult;

/// Submit the cart.
///
/// # Errors
///
/// Fails if the cart is empty.
pub async fn run<S: CartStorage>(
    store: &mut CartStore<S>,
    options: &CheckoutOptions,
) -> CommandResult {
    info!(
        "Placing order for {} items ({})...",
        store.item_count(),
        format_currency(store.calculate_total())
    );

    let confirmation = place_order(store, options).await?;

    info!("Order confirmed!");
    info!("  Order number:       #{}", confirmation.order_id);
    info!(
        "  Estimated delivery: {}",
        confirmation.estimated_delivery.format("%H:%M UTC")
    );
    info!(
        "  Order total:        {}",
        format_currency(confirmation.summary.total)
    );
    Ok(())
}
