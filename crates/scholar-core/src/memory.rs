//! In-memory session storage.

use std::sync::{Mutex, MutexGuard};

use crate::session::PersistedSession;
use crate::traits::SessionStorage;
use crate::Result;

/// Storage slot held in process memory.
///
/// The slot keeps the serialized JSON rather than the struct, so reads go
/// through the same serialization boundary as durable backends.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage pre-seeded with a raw blob, as if left by an earlier run.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(raw.into())),
        }
    }

    /// Returns the raw stored JSON, if any.
    pub fn raw(&self) -> Option<String> {
        self.slot().clone()
    }

    fn slot(&self) -> MutexGuard<'_, Option<String>> {
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Result<Option<PersistedSession>> {
        match self.slot().as_deref() {
            Some(raw) => Ok(Some(PersistedSession::from_json(raw)?)),
            None => Ok(None),
        }
    }

    fn save(&self, session: &PersistedSession) -> Result<()> {
        let raw = session.to_json()?;
        *self.slot() = Some(raw);
        Ok(())
    }

    fn remove(&self) -> Result<()> {
        *self.slot() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::error::StorageError;

    #[test]
    fn starts_empty() {
        let storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn remove_erases_slot() {
        let storage = MemoryStorage::new();
        storage.save(&PersistedSession::default()).unwrap();
        assert!(storage.raw().is_some());

        storage.remove().unwrap();
        assert!(storage.raw().is_none());
        storage.remove().unwrap();
    }

    #[test]
    fn corrupt_blob_is_reported() {
        let storage = MemoryStorage::with_raw("{not json");
        assert!(matches!(
            storage.load(),
            Err(Error::Storage(StorageError::Corrupt { .. }))
        ));
    }
}
