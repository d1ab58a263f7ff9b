use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::Store;
use crate::error::StoreError;
use crate::model::{AppEntry, InstalledVersion};

/// Slug → installed `{version, commit}`. A slug that is present is installed, whatever its version.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstalledVersions(BTreeMap<String, InstalledVersion>);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScriptStatus {
    NotInstalled,
    UpdateAvailable,
    UpToDate,
}

impl ScriptStatus {
    pub fn label(self) -> &'static str {
        match self {
            ScriptStatus::NotInstalled => "NOT INSTALLED",
            ScriptStatus::UpdateAvailable => "UPDATE AVAILABLE",
            ScriptStatus::UpToDate => "UP TO DATE",
        }
    }
}

impl InstalledVersions {
    pub fn version_of(&self, slug: &str) -> Option<&str> {
        self.0.get(slug).map(|rec| rec.version.as_str())
    }

    pub fn is_installed(&self, slug: &str) -> bool {
        self.0.contains_key(slug)
    }

    pub fn status(&self, app: &AppEntry) -> ScriptStatus {
        match self.version_of(&app.slug) {
            None => ScriptStatus::NotInstalled,
            Some(v) if v != app.version => ScriptStatus::UpdateAvailable,
            Some(_) => ScriptStatus::UpToDate,
        }
    }

    pub fn has_update(&self, app: &AppEntry) -> bool {
        self.status(app) == ScriptStatus::UpdateAvailable
    }

    pub fn get(&self, slug: &str) -> Option<&InstalledVersion> {
        self.0.get(slug)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.0.contains_key(slug)
    }

    pub fn record(&mut self, slug: &str, version: &str, commit: &str) {
        self.0.insert(
            slug.to_string(),
            InstalledVersion {
                version: version.to_string(),
                commit: commit.to_string(),
            },
        );
    }

    pub fn forget(&mut self, slug: &str) -> bool {
        self.0.remove(slug).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Store {
    /// Missing or unreadable files load as empty. The self entry is added (and saved) when absent.
    pub fn load_versions(&mut self, self_slug: &str, self_version: &str) -> InstalledVersions {
        let path = self.paths.installed_file();
        let mut versions = match self.read_json::<InstalledVersions>(&path) {
            Ok(v) => v,
            Err(StoreError::NotFound(_)) => InstalledVersions::default(),
            Err(err) => {
                warn!(error = %err, "installed versions unreadable; starting empty");
                InstalledVersions::default()
            }
        };

        if !versions.contains(self_slug) {
            versions.record(self_slug, self_version, "");
            if let Err(err) = self.save_versions(&versions) {
                warn!(error = %err, "save installed versions");
            }
        }
        info!(entries = versions.len(), "installed versions loaded");
        versions
    }

    pub fn save_versions(&mut self, versions: &InstalledVersions) -> Result<(), StoreError> {
        let path = self.paths.installed_file();
        self.write_json(&path, versions)
    }
}

#[cfg(test)]
#[path = "../tests/store/versions_tests.rs"]
mod tests;
