//! Persisted cart slot.
//!
//! # Slot format
//!
//! One named slot holds the whole cart as JSON:
//!
//! ```json
//! { "state": { "items": [ { "id": "classic-burger", "price": 12.5, "quantity": 2, ... } ] }, "version": 0 }
//! ```
//!
//! Each item carries every menu item field plus `quantity`. The envelope
//! matches carts saved by the browser storefront, so existing slots keep
//! loading. Writes always serialize the whole cart.

mod file;
mod memory;

pub use file::JsonFileStorage;
pub use memory::MemoryStorage;

use serde::{Deserialize, Serialize};
use tracing::warn;

use tasty_bites_core::{LineItem, MenuItem};

use crate::cart::Cart;
use crate::error::StorageError;

/// Name of the slot the storefront has always used.
pub const SLOT_NAME: &str = "tasty-bites-cart";

/// Highest slot format version this build understands.
pub const FORMAT_VERSION: u32 = 0;

/// Backing store for one cart slot.
///
/// Implementations only move bytes; the slot format lives in [`encode`] and
/// [`decode`].
pub trait CartStorage {
    /// Read the slot. `Ok(None)` means nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot exists but cannot be read or parsed.
    fn load(&self) -> Result<Option<Cart>, StorageError>;

    /// Replace the slot contents with `cart`.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be encoded or the write fails.
    fn save(&self, cart: &Cart) -> Result<(), StorageError>;
}

impl<T: CartStorage + ?Sized> CartStorage for &T {
    fn load(&self) -> Result<Option<Cart>, StorageError> {
        (**self).load()
    }

    fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        (**self).save(cart)
    }
}

#[derive(Serialize)]
struct SlotRef<'a> {
    state: StateRef<'a>,
    version: u32,
}

#[derive(Serialize)]
struct StateRef<'a> {
    items: &'a [LineItem],
}

#[derive(Deserialize)]
struct Slot {
    state: State,
    #[serde(default)]
    version: u32,
}

#[derive(Deserialize)]
struct State {
    #[serde(default)]
    items: Vec<StoredLine>,
}

/// A line as found on disk. Quantity is signed so damaged slots can be
/// repaired instead of rejected.
#[derive(Deserialize)]
struct StoredLine {
    #[serde(flatten)]
    item: MenuItem,
    quantity: i64,
}

/// Serialize `cart` into the slot format.
///
/// # Errors
///
/// Returns [`StorageError::Serialize`] if encoding fails.
pub fn encode(cart: &Cart) -> Result<String, StorageError> {
    let slot = SlotRef {
        state: StateRef {
            items: cart.items(),
        },
        version: FORMAT_VERSION,
    };
    serde_json::to_string(&slot).map_err(StorageError::Serialize)
}

/// Parse the slot format back into a cart.
///
/// Lines with a non-positive quantity are dropped and repeated ids merged;
/// both are logged.
///
/// # Errors
///
/// Returns [`StorageError::Deserialize`] for malformed JSON and
/// [`StorageError::UnsupportedVersion`] for slots from a newer format.
pub fn decode(raw: &str) -> Result<Cart, StorageError> {
    let slot: Slot = serde_json::from_str(raw).map_err(StorageError::Deserialize)?;
    if slot.version > FORMAT_VERSION {
        return Err(StorageError::UnsupportedVersion {
            found: slot.version,
            supported: FORMAT_VERSION,
        });
    }

    let (cart, repaired) = Cart::from_raw_lines(
        slot.state
            .items
            .into_iter()
            .map(|line| (line.item, line.quantity)),
    );
    if repaired > 0 {
        warn!(repaired, "Repaired invalid lines in persisted cart");
    }
    Ok(cart)
}
