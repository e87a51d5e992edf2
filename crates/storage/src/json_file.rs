use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use sifir_core::model::HallOfFameEntry;
use tracing::warn;

use crate::repository::{HallOfFameRepository, StorageError};

/// Namespaced key under which the hall of fame is persisted.
pub const STORAGE_KEY: &str = "sifir_master_hall_of_fame";

/// File-backed adapter persisting the entry sequence as one JSON document.
///
/// The document lives at `<dir>/<STORAGE_KEY>.json`. Writes replace the
/// whole value via a temp file and rename so a crash mid-write cannot
/// leave a truncated store behind.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `dir`. The directory is created if absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the directory cannot be created.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        Ok(Self {
            path: dir.join(format!("{STORAGE_KEY}.json")),
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HallOfFameRepository for JsonFileStore {
    fn load(&self) -> Result<Vec<HallOfFameEntry>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => {
                warn!(path = %self.path.display(), %err, "failed to read hall of fame");
                return Err(err.into());
            }
        };

        serde_json::from_str(&raw).map_err(|err| {
            warn!(path = %self.path.display(), %err, "hall of fame store is corrupt");
            StorageError::Serialization(err.to_string())
        })
    }

    fn save(&self, entries: &[HallOfFameEntry]) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(entries)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;

        let tmp = self.path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
