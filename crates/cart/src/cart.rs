//! The cart's item collection.
//!
//! `Cart` is plain data plus the state transitions; it knows nothing about
//! persistence. Lines are kept in insertion order and keyed by menu item id.
//!
//! # Invariants
//!
//! - at most one line per menu item id
//! - every line has `quantity >= 1`
//! - the total is derived on demand, never stored

use rust_decimal::Decimal;

use tasty_bites_core::{LineItem, MenuItem};

use crate::error::CartError;

/// One shopper's cart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Rebuild a cart from raw `(item, quantity)` pairs, restoring the
    /// invariants: non-positive quantities are dropped and repeated ids are
    /// merged into the first occurrence.
    ///
    /// Returns the cart and the number of raw lines that were dropped or
    /// merged.
    #[must_use]
    pub fn from_raw_lines(lines: impl IntoIterator<Item = (MenuItem, i64)>) -> (Self, usize) {
        let mut cart = Self::new();
        let mut repaired = 0;

        for (item, quantity) in lines {
            let Ok(quantity) = u32::try_from(quantity) else {
                repaired += 1;
                continue;
            };
            if quantity == 0 {
                repaired += 1;
                continue;
            }
            match cart.position(item.id.as_str()) {
                Some(index) => {
                    repaired += 1;
                    if let Some(line) = cart.items.get_mut(index) {
                        line.quantity = line.quantity.saturating_add(quantity);
                    }
                }
                None => cart.items.push(LineItem::new(item, quantity)),
            }
        }

        (cart, repaired)
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Look up a line by menu item id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|line| line.id().as_str() == id)
    }

    /// Whether a line exists for `id`.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// `Σ effective_price × quantity`; zero for an empty cart.
    ///
    /// [`Price`](tasty_bites_core::Price) bounds keep this far from
    /// `Decimal::MAX`.
    #[must_use]
    pub fn calculate_total(&self) -> Decimal {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Add a line, or increase the quantity of the existing line with the
    /// same id. An existing line keeps its price and discount snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] if `line.quantity` is zero or
    /// the merged quantity would overflow. The cart is left untouched.
    pub fn add_item(&mut self, line: LineItem) -> Result<(), CartError> {
        let invalid = || CartError::InvalidQuantity {
            id: line.id().clone(),
            quantity: i64::from(line.quantity),
        };

        if line.quantity == 0 {
            return Err(invalid());
        }

        match self.position(line.id().as_str()) {
            Some(index) => {
                let existing = self.items.get_mut(index).ok_or_else(invalid)?;
                existing.quantity = existing
                    .quantity
                    .checked_add(line.quantity)
                    .ok_or_else(invalid)?;
            }
            None => self.items.push(line),
        }
        Ok(())
    }

    /// Remove the line for `id`. Returns whether anything was removed.
    pub fn remove_item(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|line| line.id().as_str() != id);
        self.items.len() != before
    }

    /// Set the quantity of the line for `id`.
    ///
    /// A quantity of zero or less removes the line. Quantities above
    /// `u32::MAX` saturate. Returns whether the cart changed.
    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_item(id);
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        match self.items.iter_mut().find(|line| line.id().as_str() == id) {
            Some(line) if line.quantity != quantity => {
                line.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|line| line.id().as_str() == id)
    }
}
