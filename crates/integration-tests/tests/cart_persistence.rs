//! Integration tests for the file-backed cart slot.
//!
//! These tests open, mutate, and re-open a `CartStore` on a real JSON file
//! to check that every mutation survives a restart.

#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use tasty_bites_cart::{CartStorage, CartStore, JsonFileStorage, Persisted};
use tasty_bites_integration_tests::{TempSlotDir, line};

fn reopen(dir: &TempSlotDir) -> CartStore<JsonFileStorage> {
    CartStore::open(JsonFileStorage::new(dir.slot()))
}

// =============================================================================
// Restart Semantics
// =============================================================================

#[test]
fn test_fresh_slot_opens_empty() {
    let dir = TempSlotDir::new();
    let store = reopen(&dir);
    assert!(store.is_empty());
    assert_eq!(store.calculate_total(), Decimal::ZERO);
    assert!(!dir.slot().exists());
}

#[test]
fn test_every_mutation_survives_restart() {
    let dir = TempSlotDir::new();

    {
        let mut store = reopen(&dir);
        assert!(store.add_item(line("burger", 1250, None, 1)).unwrap().is_durable());
        assert!(store.add_item(line("burger", 1250, None, 2)).unwrap().is_durable());
    }
    let store = reopen(&dir);
    assert_eq!(store.cart().get("burger").unwrap().quantity, 3);
    assert_eq!(store.calculate_total(), Decimal::new(3750, 2));
    drop(store);

    {
        let mut store = reopen(&dir);
        assert!(store.update_quantity("burger", 1).is_durable());
    }
    assert_eq!(reopen(&dir).calculate_total(), Decimal::new(1250, 2));

    {
        let mut store = reopen(&dir);
        assert!(store.remove_item("burger").is_durable());
    }
    let store = reopen(&dir);
    assert!(store.is_empty());
    assert!(dir.slot().exists());
}

#[test]
fn test_round_trip_preserves_snapshots_and_order() {
    let dir = TempSlotDir::new();
    let mut store = reopen(&dir);

    assert!(store.add_item(line("shake", 550, None, 2)).unwrap().is_durable());
    assert!(store.add_item(line("burger", 1000, Some(20), 3)).unwrap().is_durable());
    assert!(store.add_item(line("fries", 399, Some(5), 1)).unwrap().is_durable());

    let restored = reopen(&dir);
    assert_eq!(restored.cart(), store.cart());

    let ids: Vec<&str> = restored.items().iter().map(|l| l.id().as_str()).collect();
    assert_eq!(ids, vec!["shake", "burger", "fries"]);

    let burger = restored.cart().get("burger").unwrap();
    assert_eq!(burger.item.discount.map(|d| d.percent()), Some(20));
    assert_eq!(burger.line_total(), Decimal::new(2400, 2));
}

#[test]
fn test_clear_cart_persists_empty_state() {
    let dir = TempSlotDir::new();
    let mut store = reopen(&dir);
    assert!(store.add_item(line("burger", 1250, None, 1)).unwrap().is_durable());

    assert!(matches!(store.clear_cart(), Persisted::Saved));
    assert!(reopen(&dir).is_empty());
}

#[test]
fn test_two_slots_are_independent() {
    let first_dir = TempSlotDir::new();
    let second_dir = TempSlotDir::new();

    let mut first = reopen(&first_dir);
    assert!(first.add_item(line("burger", 1250, None, 1)).unwrap().is_durable());

    assert!(reopen(&second_dir).is_empty());
    assert_eq!(reopen(&first_dir).item_count(), 1);
}

// =============================================================================
// Damaged Slots
// =============================================================================

#[test]
fn test_corrupt_slot_falls_back_to_empty_and_recovers() {
    let dir = TempSlotDir::new();
    std::fs::create_dir_all(dir.path()).unwrap();
    std::fs::write(dir.slot(), "{\"state\": {\"items\": [").unwrap();

    let mut store = reopen(&dir);
    assert!(store.is_empty());

    // the next write replaces the damaged slot
    assert!(store.add_item(line("burger", 1250, None, 1)).unwrap().is_durable());
    assert_eq!(reopen(&dir).item_count(), 1);
}

#[test]
fn test_damaged_lines_are_repaired_on_load() {
    let dir = TempSlotDir::new();
    std::fs::create_dir_all(dir.path()).unwrap();

    let item = serde_json::json!({
        "id": "burger", "name": "Burger", "description": "", "price": 10.0,
        "image": "", "category": "burgers", "tags": [], "featured": false,
        "prepTime": 10, "rating": 4.5, "reviews": 3
    });
    let with_quantity = |q: i64| {
        let mut value = item.clone();
        value["quantity"] = q.into();
        value
    };
    let slot = serde_json::json!({
        "state": { "items": [with_quantity(2), with_quantity(0), with_quantity(1)] },
        "version": 0
    });
    std::fs::write(dir.slot(), slot.to_string()).unwrap();

    let store = reopen(&dir);
    assert_eq!(store.cart().len(), 1);
    assert_eq!(store.item_count(), 3);
}

#[test]
fn test_newer_slot_version_is_not_loaded() {
    let dir = TempSlotDir::new();
    std::fs::create_dir_all(dir.path()).unwrap();
    std::fs::write(dir.slot(), r#"{"state":{"items":[]},"version":99}"#).unwrap();

    let storage = JsonFileStorage::new(dir.slot());
    assert!(storage.load().is_err());
    assert!(CartStore::open(storage).is_empty());
}
