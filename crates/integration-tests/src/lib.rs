//! Integration tests for Tasty Bites.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p tasty-bites-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - File-backed cart slot across restarts
//! - `checkout_flow` - Browse, fill the cart, and place an order
//!
//! This crate only holds shared fixtures; the tests live in `tests/`.

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use tasty_bites_core::{
    Catalog, CategoryId, Discount, LineItem, MenuItem, MenuItemId, Price, Rating,
};

/// A scratch directory under the system temp dir, removed on drop.
pub struct TempSlotDir {
    path: PathBuf,
}

impl TempSlotDir {
    #[must_use]
    pub fn new() -> Self {
        let path = std::env::temp_dir().join(format!("tasty-bites-it-{}", uuid::Uuid::new_v4()));
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of the cart slot file inside this directory.
    #[must_use]
    pub fn slot(&self) -> PathBuf {
        self.path.join("tasty-bites-cart.json")
    }
}

impl Default for TempSlotDir {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TempSlotDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

/// Build a menu item priced in cents with an optional percentage discount.
///
/// # Panics
///
/// Panics on a negative price or a discount above 100.
#[must_use]
#[allow(clippy::expect_used)]
pub fn menu_item(id: &str, category: &str, cents: i64, discount: Option<u8>) -> MenuItem {
    MenuItem {
        id: MenuItemId::new(id),
        name: id.replace('-', " "),
        description: format!("Freshly made {id}"),
        price: Price::from_cents(cents).expect("fixture price"),
        image: format!("https://img.test/{id}.jpg"),
        category: CategoryId::new(category),
        tags: vec![category.to_string()],
        featured: false,
        discount: discount.map(|d| Discount::new(d).expect("fixture discount")),
        prep_time: 15,
        rating: Rating::new(Decimal::new(45, 1)).expect("fixture rating"),
        reviews: 10,
    }
}

/// A cart line for `menu_item`.
#[must_use]
pub fn line(id: &str, cents: i64, discount: Option<u8>, quantity: u32) -> LineItem {
    LineItem::new(menu_item(id, "burgers", cents, discount), quantity)
}

/// Small two-category catalog.
///
/// # Panics
///
/// Never in practice; the fixture ids are unique.
#[must_use]
#[allow(clippy::expect_used)]
pub fn sample_catalog() -> Catalog {
    Catalog::new(
        vec![
            menu_item("classic-burger", "burgers", 1250, None),
            menu_item("double-burger", "burgers", 1599, Some(10)),
            menu_item("margherita", "pizza", 1000, Some(20)),
        ],
        Vec::new(),
    )
    .expect("fixture catalog")
}
