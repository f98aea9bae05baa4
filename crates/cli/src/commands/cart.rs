//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! tb-cli cart add classic-burger --quantity 2
//! tb-cli cart update classic-burger 1
//! tb-cli cart remove classic-burger
//! tb-cli cart show
//! tb-cli cart clear
//! ```
//!
//! Quantities set to zero or below remove the line, as the stepper buttons
//! on the cart page do.

use rust_decimal::Decimal;
use tracing::info;

use tasty_bites_cart::{CartStorage, CartStore, OrderSummary, Persisted};
use tasty_bites_core::{Catalog, LineItem, format_currency};

use super::{CommandResult, report};

/// Print the cart with its order summary.
pub fn show<S: CartStorage>(store: &CartStore<S>, delivery_fee: Decimal) -> CommandResult {
    if store.is_empty() {
        info!("Your cart is empty.");
        return Ok(());
    }

    info!("Cart ({} items)", store.item_count());
    for line in store.items() {
        let unit = line.item.effective_price();
        info!(
            "  {:<24} {:>3} × {:>8} = {:>9}",
            line.id(),
            line.quantity,
            unit,
            format_currency(line.line_total())
        );
    }

    let summary = OrderSummary::for_cart(store.cart(), delivery_fee);
    info!("  Subtotal:     {:>9}", format_currency(summary.subtotal));
    info!("  Delivery fee: {:>9}", format_currency(summary.delivery_fee));
    info!("  Total:        {:>9}", format_currency(summary.total));
    Ok(())
}

/// Add `quantity` units of a catalog item.
///
/// # Errors
///
/// Fails if the item is not on the menu or the quantity is zero.
pub fn add<S: CartStorage>(
    store: &mut CartStore<S>,
    catalog: &Catalog,
    id: &str,
    quantity: u32,
) -> CommandResult {
    let item = catalog
        .get(id)
        .ok_or_else(|| format!("Menu item not found: {id}"))?;

    let persisted = store.add_item(LineItem::new(item.clone(), quantity))?;
    report(&persisted);

    info!(
        "Added {quantity} × {} to your cart ({} items, {})",
        item.name,
        store.item_count(),
        format_currency(store.calculate_total())
    );
    Ok(())
}

/// Remove a line.
pub fn remove<S: CartStorage>(store: &mut CartStore<S>, id: &str) -> CommandResult {
    let persisted = store.remove_item(id);
    report(&persisted);

    if matches!(persisted, Persisted::Unchanged) {
        info!("{id} is not in your cart");
    } else {
        info!("Removed {id} from your cart");
    }
    Ok(())
}

/// Set a line's quantity.
pub fn update<S: CartStorage>(store: &mut CartStore<S>, id: &str, quantity: i64) -> CommandResult {
    let persisted = store.update_quantity(id, quantity);
    report(&persisted);

    match store.cart().get(id) {
        Some(line) => info!("{id} quantity is now {}", line.quantity),
        None if quantity <= 0 => info!("Removed {id} from your cart"),
        None => info!("{id} is not in your cart"),
    }
    Ok(())
}

/// Empty the cart.
pub fn clear<S: CartStorage>(store: &mut CartStore<S>) -> CommandResult {
    report(&store.clear_cart());
    info!("Cart cleared");
    Ok(())
}
