//! Error types for the cart, its storage, and checkout.

use std::path::PathBuf;

use thiserror::Error;

use tasty_bites_core::MenuItemId;

/// Rejected cart mutation. Nothing is applied when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartError {
    /// The requested quantity is not a positive integer, or the resulting
    /// line quantity would overflow.
    #[error("invalid quantity {quantity} for item {id}")]
    InvalidQuantity {
        /// Item the mutation targeted.
        id: MenuItemId,
        /// Quantity that was requested.
        quantity: i64,
    },
}

/// Persisted slot read or write failure.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("storage I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Cart could not be encoded.
    #[error("failed to serialize cart: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Slot contents are not a valid cart.
    #[error("failed to parse persisted cart: {0}")]
    Deserialize(#[source] serde_json::Error),

    /// Slot was written by a newer format.
    #[error("unsupported persisted cart version {found} (supported up to {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Backend refused the write (e.g. quota exceeded).
    #[error("storage write rejected: {0}")]
    WriteRejected(String),
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// A failed write after an applied mutation.
///
/// The in-memory cart already reflects the mutation; only durability is lost.
#[derive(Debug, Error)]
#[error("cart changes were not persisted: {0}")]
pub struct PersistenceWarning(#[from] pub StorageError);

/// Checkout could not start.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// There is nothing to order.
    #[error("cannot check out an empty cart")]
    EmptyCart,
}
