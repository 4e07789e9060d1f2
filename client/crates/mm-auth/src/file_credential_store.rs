use crate::{AuthError, AuthErrorResult, CredentialStore};

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use log::{debug, warn};

/// Token slot persisted as a small JSON object on disk.
///
/// The file holds `{ "<key>": "<token>" }`. A missing, unreadable or
/// corrupted file reads as "no token". Writes go through a temp file,
/// fsync and an atomic rename.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: Option<PathBuf>,
    key: String,
    write_lock: Mutex<()>,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            key: key.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Store for an environment with nowhere durable to write (no home or
    /// config directory). Always empty; writes fail with `NoStorage`.
    pub fn detached(key: impl Into<String>) -> Self {
        Self {
            path: None,
            key: key.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn read_slots(path: &Path) -> BTreeMap<String, String> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                warn!("Credential file unreadable at {path:?}: {e}");
                return BTreeMap::new();
            }
        };

        serde_json::from_str(&contents).unwrap_or_else(|e| {
            warn!("Credential file corrupted at {path:?}: {e}");
            BTreeMap::new()
        })
    }

    fn write_slots(path: &Path, slots: &BTreeMap<String, String>) -> AuthErrorResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|e| AuthError::storage(dir.to_path_buf(), e))?;
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("credentials.json"));
        let temp_path = path.with_file_name(format!("{file_name}.tmp.{}", std::process::id()));

        let json = serde_json::to_string_pretty(slots)?;

        {
            let mut file =
                fs::File::create(&temp_path).map_err(|e| AuthError::storage(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| AuthError::storage(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| AuthError::storage(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            AuthError::storage(path.to_path_buf(), e)
        })
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self) -> Option<String> {
        let path = self.path.as_deref()?;
        Self::read_slots(path)
            .remove(&self.key)
            .filter(|token| !token.is_empty())
    }

    fn set(&self, token: &str) -> AuthErrorResult<()> {
        let path = self.path.as_deref().ok_or_else(AuthError::no_storage)?;
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut slots = Self::read_slots(path);
        slots.insert(self.key.clone(), token.to_string());
        Self::write_slots(path, &slots)?;

        debug!("Stored credential in {path:?}");
        Ok(())
    }

    fn clear(&self) -> AuthErrorResult<()> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut slots = Self::read_slots(path);
        if slots.remove(&self.key).is_none() && !path.exists() {
            return Ok(());
        }

        if slots.is_empty() {
            match fs::remove_file(path) {
                Ok(()) => {}
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => return Err(AuthError::storage(path.to_path_buf(), e)),
            }
        } else {
            Self::write_slots(path, &slots)?;
        }

        debug!("Cleared credential in {path:?}");
        Ok(())
    }
}
