//! In-process cart slot.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use super::{CartStorage, decode, encode};
use crate::cart::Cart;
use crate::error::StorageError;

/// Slot held in memory, encoded exactly as it would be on disk.
///
/// Clones share the same slot, so a test can keep a handle while a
/// `CartStore` owns another, and "restart" by opening a new store on it.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<String>>>,
    reject_writes: Arc<AtomicBool>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with raw slot contents, e.g. a corrupt payload.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.set_raw(Some(raw.into()));
        storage
    }

    /// Current raw slot contents.
    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Overwrite the raw slot contents.
    pub fn set_raw(&self, raw: Option<String>) {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = raw;
    }

    /// Make subsequent writes fail, as a full browser quota would.
    pub fn reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Cart>, StorageError> {
        self.raw().as_deref().map(decode).transpose()
    }

    fn save(&self, cart: &Cart) -> Result<(), StorageError> {
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(StorageError::WriteRejected("quota exceeded".to_string()));
        }
        let raw = encode(cart)?;
        self.set_raw(Some(raw));
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cart::tests::line;

    #[test]
    fn test_clones_share_slot() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();

        let mut cart = Cart::new();
        cart.add_item(line("fries", 399, None, 1)).unwrap();
        storage.save(&cart).unwrap();

        assert_eq!(handle.load().unwrap(), Some(cart));
    }

    #[test]
    fn test_rejected_write_keeps_previous_slot() {
        let storage = MemoryStorage::new();
        storage.save(&Cart::new()).unwrap();
        let before = storage.raw();

        storage.reject_writes(true);
        let mut cart = Cart::new();
        cart.add_item(line("fries", 399, None, 1)).unwrap();
        assert!(matches!(
            storage.save(&cart),
            Err(StorageError::WriteRejected(_))
        ));
        assert_eq!(storage.raw(), before);
    }
}
