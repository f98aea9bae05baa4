//! Cart store: the authoritative cart plus its persisted slot.
//!
//! Every mutation is applied to memory first and then the whole cart is
//! written to storage before the call returns. A failed write never rolls
//! the mutation back; it is logged and reported as [`Persisted::Degraded`].

use rust_decimal::Decimal;
use tracing::{debug, instrument, warn};

use tasty_bites_core::LineItem;

use crate::cart::Cart;
use crate::error::{CartError, PersistenceWarning};
use crate::storage::CartStorage;

/// Outcome of the write that follows a mutation.
#[derive(Debug)]
#[must_use = "a degraded write means the cart will not survive a restart"]
pub enum Persisted {
    /// The slot now holds the current cart.
    Saved,
    /// Nothing changed, so nothing was written.
    Unchanged,
    /// The write failed; the in-memory cart is still up to date.
    Degraded(PersistenceWarning),
}

impl Persisted {
    /// Whether the slot matches the in-memory cart.
    #[must_use]
    pub const fn is_durable(&self) -> bool {
        !matches!(self, Self::Degraded(_))
    }

    /// The write failure, if any.
    #[must_use]
    pub const fn warning(&self) -> Option<&PersistenceWarning> {
        match self {
            Self::Degraded(warning) => Some(warning),
            Self::Saved | Self::Unchanged => None,
        }
    }
}

/// One shopper's cart bound to a storage slot.
#[derive(Debug)]
pub struct CartStore<S> {
    cart: Cart,
    storage: S,
}

impl<S: CartStorage> CartStore<S> {
    /// Restore the cart from `storage`.
    ///
    /// An empty or missing slot gives an empty cart. An unreadable or
    /// corrupt slot is logged and also gives an empty cart; opening never
    /// fails.
    pub fn open(storage: S) -> Self {
        let cart = match storage.load() {
            Ok(Some(cart)) => {
                debug!(lines = cart.len(), "Restored cart from storage");
                cart
            }
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(error = %e, "Persisted cart unreadable, starting with an empty cart");
                Cart::new()
            }
        };
        Self { cart, storage }
    }

    /// Current cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// Sum of quantities, as shown on the cart badge.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.cart.item_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Total at effective (discounted) prices.
    #[must_use]
    pub fn calculate_total(&self) -> Decimal {
        self.cart.calculate_total()
    }

    /// Backing storage.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Add a line or increase the quantity of an existing one.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InvalidQuantity`] for a zero quantity or an
    /// overflowing merge; neither memory nor storage is touched.
    #[instrument(level = "debug", skip(self, line), fields(id = %line.id(), quantity = line.quantity))]
    pub fn add_item(&mut self, line: LineItem) -> Result<Persisted, CartError> {
        self.cart.add_item(line)?;
        debug!(lines = self.cart.len(), "Item added");
        Ok(self.persist())
    }

    /// Remove the line for `id`; absent ids are a no-op.
    #[instrument(level = "debug", skip(self))]
    pub fn remove_item(&mut self, id: &str) -> Persisted {
        if !self.cart.remove_item(id) {
            return Persisted::Unchanged;
        }
        debug!("Item removed");
        self.persist()
    }

    /// Set a line's quantity; zero or less removes it, absent ids are a no-op.
    #[instrument(level = "debug", skip(self))]
    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> Persisted {
        if !self.cart.update_quantity(id, quantity) {
            return Persisted::Unchanged;
        }
        debug!("Quantity updated");
        self.persist()
    }

    /// Empty the cart and write the empty state.
    #[instrument(level = "debug", skip(self))]
    pub fn clear_cart(&mut self) -> Persisted {
        self.cart.clear();
        debug!("Cart cleared");
        self.persist()
    }

    fn persist(&self) -> Persisted {
        match self.storage.save(&self.cart) {
            Ok(()) => Persisted::Saved,
            Err(e) => {
                warn!(error = %e, "Failed to persist cart, keeping in-memory state");
                Persisted::Degraded(PersistenceWarning(e))
            }
        }
    }
}
