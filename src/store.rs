//! Files the app keeps on the device: installed versions, category watermarks and the
//! filtered category cache.

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::model::{CategoryListing, PathsConfig};
use crate::platform::{Backend, Storage};

mod versions;
mod watermarks;

pub use self::versions::{InstalledVersions, ScriptStatus};
pub use self::watermarks::{Watermark, Watermarks};

pub struct Store {
    storage: Box<dyn Storage>,
    backend: Backend,
    paths: PathsConfig,
}

impl Store {
    /// Uses the SD card when it carries the configuration marker, internal flash otherwise.
    pub fn detect(storage: Box<dyn Storage>, paths: PathsConfig) -> Self {
        let backend = match storage.read(Backend::Sd, &paths.sd_marker) {
            Ok(bytes) if !bytes.is_empty() => Backend::Sd,
            _ => Backend::Flash,
        };
        info!(backend = backend.label(), "storage backend selected");
        Self::with_backend(storage, backend, paths)
    }

    pub fn with_backend(storage: Box<dyn Storage>, backend: Backend, paths: PathsConfig) -> Self {
        Self {
            storage,
            backend,
            paths,
        }
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    pub fn paths(&self) -> &PathsConfig {
        &self.paths
    }

    /// An empty file counts as missing.
    pub fn read_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, StoreError> {
        let bytes = self
            .storage
            .read(self.backend, path)
            .map_err(|err| StoreError::from_io(path, err))?;
        if bytes.is_empty() {
            return Err(StoreError::NotFound(path.to_string()));
        }
        serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
            path: path.to_string(),
            source,
        })
    }

    pub fn write_json<T: Serialize>(&mut self, path: &str, value: &T) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(value).map_err(|source| StoreError::Parse {
            path: path.to_string(),
            source,
        })?;
        self.storage
            .write(self.backend, path, &bytes)
            .map_err(|err| StoreError::from_io(path, err))
    }

    pub fn read_listing(&self, slug: &str) -> Result<CategoryListing, StoreError> {
        self.read_json(&self.paths.cache_file(slug))
    }

    /// True when the cache file exists and is non-empty; its content is not validated.
    pub fn has_listing(&self, slug: &str) -> bool {
        matches!(
            self.storage.read(self.backend, &self.paths.cache_file(slug)),
            Ok(bytes) if !bytes.is_empty()
        )
    }

    pub fn write_listing(&mut self, slug: &str, listing: &CategoryListing) -> Result<(), StoreError> {
        let path = self.paths.cache_file(slug);
        self.write_json(&path, listing)
    }

    /// Removes every cached listing, then the cache directory if nothing else is left in it.
    pub fn clear_cache(&mut self) -> usize {
        let dir = self.paths.cache_dir();
        let entries = match self.storage.list(self.backend, &dir) {
            Ok(entries) => entries,
            Err(err) => {
                debug!(error = %err, "no cache directory to clear");
                return 0;
            }
        };

        let mut removed = 0;
        for name in entries.iter().filter(|name| name.contains(".json")) {
            match self.storage.remove(self.backend, &format!("{}{}", dir, name)) {
                Ok(true) => removed += 1,
                Ok(false) => {}
                Err(err) => warn!(file = %name, error = %err, "remove cache file"),
            }
        }

        if let Ok(rest) = self.storage.list(self.backend, &dir)
            && rest.is_empty()
        {
            let _ = self.storage.remove(self.backend, dir.trim_end_matches('/'));
        }
        info!(removed, "category cache cleared");
        removed
    }

    pub fn remove(&mut self, path: &str) -> Result<bool, StoreError> {
        self.storage
            .remove(self.backend, path)
            .map_err(|err| StoreError::from_io(path, err))
    }

    pub fn list(&self, dir: &str) -> Result<Vec<String>, StoreError> {
        self.storage
            .list(self.backend, dir)
            .map_err(|err| StoreError::from_io(dir, err))
    }
}
