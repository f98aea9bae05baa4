//! Integration tests for browsing, filling a cart, and checking out.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use rust_decimal::Decimal;
use tasty_bites_cart::{
    CartStore, CheckoutError, CheckoutOptions, JsonFileStorage, MemoryStorage, OrderSummary,
    place_order,
};
use tasty_bites_core::{LineItem, MenuQuery};
use tasty_bites_integration_tests::{TempSlotDir, sample_catalog};

fn instant() -> CheckoutOptions {
    CheckoutOptions {
        submit_delay: Duration::ZERO,
        ..CheckoutOptions::default()
    }
}

// =============================================================================
// Catalog to Cart
// =============================================================================

#[test]
fn test_filtered_items_can_be_added() {
    let catalog = sample_catalog();
    let mut store = CartStore::open(MemoryStorage::new());

    for item in catalog.filter(&MenuQuery::category("burgers")) {
        assert!(store.add_item(LineItem::new(item.clone(), 1)).unwrap().is_durable());
    }

    assert_eq!(store.cart().len(), 2);
    // 12.50 + 15.99 * 0.9
    assert_eq!(store.calculate_total(), Decimal::new(26_891, 3));
}

#[test]
fn test_summary_matches_cart_page() {
    let catalog = sample_catalog();
    let mut store = CartStore::open(MemoryStorage::new());
    let pizza = catalog.get("margherita").unwrap().clone();
    assert!(store.add_item(LineItem::new(pizza, 3)).unwrap().is_durable());

    let summary = OrderSummary::for_cart(store.cart(), instant().delivery_fee);
    assert_eq!(summary.subtotal, Decimal::new(2400, 2));
    assert_eq!(summary.delivery_fee, Decimal::new(299, 2));
    assert_eq!(summary.total, Decimal::new(2699, 2));
}

// =============================================================================
// Checkout
// =============================================================================

#[tokio::test]
async fn test_checkout_empty_cart_is_rejected() {
    let mut store = CartStore::open(MemoryStorage::new());
    let err = place_order(&mut store, &instant()).await.unwrap_err();
    assert_eq!(err, CheckoutError::EmptyCart);
}

#[tokio::test]
async fn test_checkout_clears_persisted_cart() {
    let dir = TempSlotDir::new();
    let catalog = sample_catalog();

    let mut store = CartStore::open(JsonFileStorage::new(dir.slot()));
    let burger = catalog.get("classic-burger").unwrap().clone();
    assert!(store.add_item(LineItem::new(burger, 2)).unwrap().is_durable());

    let confirmation = place_order(&mut store, &instant()).await.unwrap();

    assert_eq!(confirmation.order_id.as_str().len(), 9);
    assert_eq!(confirmation.item_count, 2);
    assert_eq!(confirmation.summary.subtotal, Decimal::new(2500, 2));
    assert_eq!(confirmation.summary.total, Decimal::new(2799, 2));
    assert!(confirmation.estimated_delivery > confirmation.placed_at);

    assert!(store.is_empty());
    assert!(CartStore::open(JsonFileStorage::new(dir.slot())).is_empty());
}

#[tokio::test]
async fn test_order_ids_differ() {
    let catalog = sample_catalog();
    let burger = catalog.get("classic-burger").unwrap().clone();
    let mut store = CartStore::open(MemoryStorage::new());

    assert!(store.add_item(LineItem::new(burger.clone(), 1)).unwrap().is_durable());
    let first = place_order(&mut store, &instant()).await.unwrap();
    assert!(store.add_item(LineItem::new(burger, 1)).unwrap().is_durable());
    let second = place_order(&mut store, &instant()).await.unwrap();

    assert_ne!(first.order_id, second.order_id);
}
