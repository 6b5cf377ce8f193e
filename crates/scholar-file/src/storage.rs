//! Session slot stored as a JSON file.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use scholar_core::error::{Error, StorageError};
use scholar_core::{PersistedSession, Result, SessionStorage};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Name of the slot the session is stored under.
pub const DEFAULT_SLOT: &str = "auth-storage";

fn map_io(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
    move |err| {
        StorageError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
        .into()
    }
}

/// A named session slot kept as `<dir>/<slot>.json`.
///
/// Writes go to a temporary file that is renamed over the slot, so a reader
/// never sees a half-written blob. Writers and removers serialize on an
/// exclusive lock file next to the slot.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
    slot: String,
}

impl FileStorage {
    /// Storage for the default slot inside `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self::with_slot(dir, DEFAULT_SLOT)
    }

    pub fn with_slot(dir: impl AsRef<Path>, slot: impl Into<String>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            slot: slot.into(),
        }
    }

    /// Path of the slot file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", self.slot))
    }

    fn lock_path(&self) -> PathBuf {
        self.dir.join(format!("{}.lock", self.slot))
    }

    fn lock(&self) -> Result<File> {
        fs::create_dir_all(&self.dir).map_err(map_io(&self.dir))?;

        let lock_path = self.lock_path();
        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(map_io(&lock_path))?;

        lock_file.lock_exclusive().map_err(map_io(&lock_path))?;
        Ok(lock_file)
    }
}

/// Write `bytes` to a fresh file at `path` readable only by the owner.
fn write_private(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(map_io(path))?;

    #[cfg(unix)]
    {
        let mut perms = file.metadata().map_err(map_io(path))?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(path, perms).map_err(map_io(path))?;
    }

    file.write_all(bytes).map_err(map_io(path))?;
    file.sync_data().map_err(map_io(path))?;
    Ok(())
}

impl SessionStorage for FileStorage {
    fn load(&self) -> Result<Option<PersistedSession>> {
        let path = self.path();

        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&path).map_err(map_io(&path))?;
        PersistedSession::from_json(&raw).map(Some)
    }

    #[instrument(skip(self, session), fields(path = %self.path().display()))]
    fn save(&self, session: &PersistedSession) -> Result<()> {
        let raw = session.to_json()?;
        let lock = self.lock()?;

        let path = self.path();
        let tmp = self
            .dir
            .join(format!(".{}.{}.tmp", self.slot, Uuid::new_v4().simple()));

        let written = write_private(&tmp, raw.as_bytes())
            .and_then(|()| fs::rename(&tmp, &path).map_err(map_io(&path)));
        if let Err(e) = written {
            if let Err(cleanup) = fs::remove_file(&tmp) {
                warn!(tmp = %tmp.display(), error = %cleanup, "Failed to remove temp file");
            }
            return Err(e);
        }

        lock.unlock().map_err(map_io(&path))?;
        debug!("Saved session");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path().display()))]
    fn remove(&self) -> Result<()> {
        let lock = self.lock()?;
        let path = self.path();

        if path.exists() {
            fs::remove_file(&path).map_err(map_io(&path))?;
            debug!("Removed session");
        }

        lock.unlock().map_err(map_io(&path))?;
        Ok(())
    }
}
