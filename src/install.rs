//! Installing and deleting scripts on the device.
//!
//! Both operations work from the script's *current* remote metadata. Install commits the new
//! version only when every file arrived; delete forgets the script as soon as one file was
//! removed. Neither rolls back files it already touched.

use std::fmt;

use tracing::{info, warn};

use crate::error::{FetchError, InstallError};
use crate::model::{AppEntry, FileEntry, PathsConfig, ScriptMetadata};
use crate::platform::SaveTarget;
use crate::remote::CatalogClient;
use crate::store::{InstalledVersions, Store};

/// Step reached by a running install or delete, for the status lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Progress {
    Connecting,
    Installing,
    Downloaded { index: usize, total: usize },
    DownloadFailed { reason: String, source: String },
    Deleting,
    DeletingFile { index: usize, total: usize },
    Finalizing,
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Progress::Connecting => write!(f, "Connecting..."),
            Progress::Installing => write!(f, "Installing..."),
            Progress::Downloaded { index, total } => {
                write!(f, "Downloading {} of {}...", index, total)
            }
            Progress::DownloadFailed { reason, source } => {
                write!(f, "Download failed: {} for {}", reason, source)
            }
            Progress::Deleting => write!(f, "Deleting..."),
            Progress::DeletingFile { index, total } => {
                write!(f, "Deleting file {} of {}", index, total)
            }
            Progress::Finalizing => write!(f, "Finalizing deletion..."),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstallOutcome {
    Installed { files: usize },
    /// Files already written stay on disk; the installed version is unchanged.
    Incomplete { written: usize, failed: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted { removed: usize },
    NothingRemoved,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedFile {
    /// Path inside the repository at `metadata.commit`.
    pub repo_path: String,
    /// Path on the device.
    pub local_path: String,
}

/// `<themes or scripts root><metadata.category>`, without a trailing slash.
pub fn category_dir(meta: &ScriptMetadata, paths: &PathsConfig) -> String {
    let root = if meta.is_theme() {
        &paths.themes_dir
    } else {
        &paths.scripts_dir
    };
    format!("{}{}", root, meta.category)
}

pub fn resolve_file(meta: &ScriptMetadata, entry: &FileEntry, paths: &PathsConfig) -> ResolvedFile {
    let repo_path = format!("{}{}", meta.path, entry.source())
        .trim_start_matches('/')
        .to_string();
    let local_path = format!(
        "{}/{}",
        category_dir(meta, paths),
        entry.destination().trim_start_matches('/')
    );
    ResolvedFile {
        repo_path,
        local_path,
    }
}

pub fn install(
    app: &AppEntry,
    client: &mut CatalogClient,
    store: &mut Store,
    versions: &mut InstalledVersions,
    progress: &mut dyn FnMut(&Progress),
) -> Result<InstallOutcome, InstallError> {
    info!(slug = %app.slug, "install started");
    progress(&Progress::Connecting);
    if !client.connected() {
        return Err(InstallError::Offline);
    }
    progress(&Progress::Installing);

    let meta = client
        .fetch_metadata(&app.slug)
        .map_err(InstallError::Metadata)?;

    let total = meta.files.len();
    let mut written = 0;
    let mut failed = 0;
    for (i, entry) in meta.files.iter().enumerate() {
        let file = resolve_file(&meta, entry, store.paths());
        let url = client.file_url(&meta, &file.repo_path);
        let target = SaveTarget {
            backend: store.backend(),
            path: &file.local_path,
        };
        let reason = match client.save_file(&url, target) {
            Ok(saved) if saved.status == 200 => {
                info!(file = %file.repo_path, bytes = saved.length, to = %file.local_path, "file saved");
                written += 1;
                progress(&Progress::Downloaded {
                    index: i + 1,
                    total,
                });
                continue;
            }
            Ok(saved) => FetchError::Status(saved.status).to_string(),
            Err(err) => err.to_string(),
        };
        warn!(file = %file.repo_path, %reason, "file download failed");
        failed += 1;
        progress(&Progress::DownloadFailed {
            reason,
            source: entry.source().to_string(),
        });
    }

    if written == total && failed == 0 {
        versions.record(&app.slug, &meta.version, &meta.commit);
        if let Err(err) = store.save_versions(versions) {
            warn!(error = %err, "saving installed versions failed");
        }
        info!(slug = %app.slug, version = %meta.version, files = total, "install complete");
        Ok(InstallOutcome::Installed { files: total })
    } else {
        warn!(slug = %app.slug, written, failed, "install incomplete");
        Ok(InstallOutcome::Incomplete { written, failed })
    }
}

pub fn delete(
    app: &AppEntry,
    client: &mut CatalogClient,
    store: &mut Store,
    versions: &mut InstalledVersions,
    progress: &mut dyn FnMut(&Progress),
) -> Result<DeleteOutcome, InstallError> {
    info!(slug = %app.slug, "delete started");
    progress(&Progress::Deleting);
    if !client.connected() {
        return Err(InstallError::Offline);
    }

    let meta = client
        .fetch_metadata(&app.slug)
        .map_err(InstallError::Metadata)?;

    let total = meta.files.len();
    let mut removed = 0;
    for (i, entry) in meta.files.iter().enumerate() {
        progress(&Progress::DeletingFile {
            index: i + 1,
            total,
        });
        let file = resolve_file(&meta, entry, store.paths());
        match store.remove(&file.local_path) {
            Ok(true) => removed += 1,
            Ok(false) => info!(path = %file.local_path, "file already gone"),
            Err(err) => warn!(path = %file.local_path, error = %err, "remove failed"),
        }
    }
    progress(&Progress::Finalizing);

    if removed == 0 {
        warn!(slug = %app.slug, "no files removed");
        return Ok(DeleteOutcome::NothingRemoved);
    }

    let dir = category_dir(&meta, store.paths());
    match store.list(&dir) {
        Ok(entries) if entries.is_empty() => {
            if let Err(err) = store.remove(&dir) {
                warn!(%dir, error = %err, "remove empty category directory");
            }
        }
        Ok(_) => {}
        Err(err) => warn!(%dir, error = %err, "list category directory"),
    }

    versions.forget(&app.slug);
    if let Err(err) = store.save_versions(versions) {
        warn!(error = %err, "saving installed versions failed");
    }
    info!(slug = %app.slug, removed, "delete complete");
    Ok(DeleteOutcome::Deleted { removed })
}

#[cfg(test)]
#[path = "tests/install_tests.rs"]
mod tests;
