use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::platform::{Backend, Storage};

/// Maps each backend onto a directory. Without an SD directory every SD access fails with
/// `NotFound`, which reads as "no card".
#[derive(Clone, Debug)]
pub struct FsStorage {
    flash: PathBuf,
    sd: Option<PathBuf>,
}

impl FsStorage {
    pub fn new(flash: impl Into<PathBuf>, sd: Option<PathBuf>) -> Self {
        Self {
            flash: flash.into(),
            sd,
        }
    }

    /// Host path of a device path. Parent-directory components are rejected.
    pub fn resolve(&self, backend: Backend, path: &str) -> io::Result<PathBuf> {
        let root = match backend {
            Backend::Flash => &self.flash,
            Backend::Sd => self.sd.as_ref().ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "no sd card directory configured")
            })?,
        };
        let rel = Path::new(path.trim_start_matches('/'));
        if rel.components().any(|c| matches!(c, Component::ParentDir)) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("path escapes storage root: {}", path),
            ));
        }
        Ok(root.join(rel))
    }
}

impl Storage for FsStorage {
    fn read(&self, backend: Backend, path: &str) -> io::Result<Vec<u8>> {
        fs::read(self.resolve(backend, path)?)
    }

    fn write(&mut self, backend: Backend, path: &str, bytes: &[u8]) -> io::Result<()> {
        write_atomic(&self.resolve(backend, path)?, bytes)
    }

    fn remove(&mut self, backend: Backend, path: &str) -> io::Result<bool> {
        let target = self.resolve(backend, path)?;
        let meta = match fs::symlink_metadata(&target) {
            Ok(meta) => meta,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(err) => return Err(err),
        };
        if meta.is_dir() {
            fs::remove_dir(&target)?;
        } else {
            fs::remove_file(&target)?;
        }
        Ok(true)
    }

    fn list(&self, backend: Backend, dir: &str) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(self.resolve(backend, dir)?)? {
            names.push(entry?.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes)?;
    fs::rename(&tmp, path)
}

#[cfg(test)]
#[path = "../tests/host/fs_storage_tests.rs"]
mod tests;
