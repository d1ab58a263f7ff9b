use serde::{Deserialize, Serialize};

/// Category value that routes an install into the themes tree.
pub const THEMES_CATEGORY: &str = "Themes";

/// `repositories/<slug>/metadata.json`. Fetched only to install or delete.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptMetadata {
    pub owner: String,
    pub repo: String,
    pub commit: String,

    #[serde(default)]
    pub path: String,

    pub category: String,
    pub version: String,

    #[serde(default)]
    pub files: Vec<FileEntry>,
}

impl ScriptMetadata {
    pub fn is_theme(&self) -> bool {
        self.category == THEMES_CATEGORY
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileEntry {
    Bare(String),
    Mapped { source: String, destination: String },
}

impl FileEntry {
    /// Path inside the script's repository directory.
    pub fn source(&self) -> &str {
        match self {
            FileEntry::Bare(path) => path,
            FileEntry::Mapped { source, .. } => source,
        }
    }

    /// Path below the category directory on the device.
    pub fn destination(&self) -> &str {
        match self {
            FileEntry::Bare(path) => path,
            FileEntry::Mapped { destination, .. } => destination,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledVersion {
    #[serde(default)]
    pub version: String,

    #[serde(default)]
    pub commit: String,
}
