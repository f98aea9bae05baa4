//! Tasty Bites Cart - the shopper's cart and its persisted slot.
//!
//! # Architecture
//!
//! - [`Cart`] is the pure item collection: add, remove, update, clear, total.
//! - [`CartStore`] owns a `Cart` plus a [`CartStorage`] backend and writes the
//!   whole cart after every mutation.
//! - [`storage`] holds the slot format and the file and in-memory backends.
//! - [`checkout`] turns a non-empty cart into an [`OrderConfirmation`].
//!
//! There is no global state: build one `CartStore` per session.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod checkout;
pub mod error;
pub mod storage;
pub mod store;

pub use cart::Cart;
pub use checkout::{CheckoutOptions, OrderConfirmation, OrderSummary, place_order};
pub use error::{CartError, CheckoutError, PersistenceWarning, StorageError};
pub use storage::{CartStorage, JsonFileStorage, MemoryStorage};
pub use store::{CartStore, Persisted};
