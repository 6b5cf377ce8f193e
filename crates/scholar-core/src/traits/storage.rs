//! Durable session storage trait.

use crate::Result;
use crate::session::PersistedSession;

/// A single named slot of durable client storage.
///
/// Only the [`PersistedSession`] projection is ever written here.
pub trait SessionStorage: Send + Sync {
    /// Read the slot. `Ok(None)` means nothing has been stored yet.
    fn load(&self) -> Result<Option<PersistedSession>>;

    /// Overwrite the slot.
    fn save(&self, session: &PersistedSession) -> Result<()>;

    /// Erase the slot entirely. Erasing an absent slot is not an error.
    fn remove(&self) -> Result<()>;
}
