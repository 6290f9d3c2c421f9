use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::{error::AppError, profile::IdentityStore};

/// Durable home of the [`IdentityStore`]
///
/// There is no locking: two processes saving at the same time race and the
/// last rename wins. Saves go through a temporary file in the same directory,
/// so a reader sees either the old or the new store, never a torn one.
#[derive(Debug, Clone)]
pub struct ProfileStorage {
    path: PathBuf,
}

impl ProfileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the identity store
    ///
    /// A missing or blank file yields an empty store.
    pub fn load(&self) -> Result<IdentityStore, AppError> {
        let file_contents = match fs::read(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::debug!("no identity store at {}, starting empty", self.path.display());
                return Ok(IdentityStore::default());
            }
            Err(err) => return Err(err.into()),
        };

        if file_contents.iter().all(u8::is_ascii_whitespace) {
            return Ok(IdentityStore::default());
        }

        // Invalid UTF-8 is reported by serde_json, so it is a decode error too.
        let store: IdentityStore = serde_json::from_slice(&file_contents).map_err(|source| AppError::Decode {
            path: self.path.clone(),
            source,
        })?;
        log::debug!(
            "loaded {} global and {} local identities from {}",
            store.global.len(),
            store.local.len(),
            self.path.display()
        );
        Ok(store)
    }

    /// Saves the identity store, replacing the previous file atomically
    ///
    /// # Arguments
    /// * `store` - Complete store to write
    pub fn save(&self, store: &IdentityStore) -> Result<(), AppError> {
        let mut json: String = serde_json::to_string_pretty(store).map_err(AppError::Encode)?;
        json.push('\n');

        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let mut temp = NamedTempFile::new_in(parent)?;
        temp.write_all(json.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|err| AppError::Io(err.error))?;

        log::info!("saved identity store to {}", self.path.display());
        Ok(())
    }
}
