//! scholar-file - Filesystem-backed session storage.

mod storage;

pub use storage::{DEFAULT_SLOT, FileStorage};
