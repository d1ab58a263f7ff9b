//! Catalog, metadata and configuration types as they appear on the wire and on disk.

mod catalog;
mod config;
mod metadata;

pub use self::catalog::{
    AppEntry, Category, CategoryIndex, CategoryListing, UNKNOWN_VERSION, UPDATES_NAME,
    UPDATES_SLUG,
};
pub use self::config::{
    AppConfig, DEFAULT_CATALOG_URL, DEFAULT_RAW_URL, PathsConfig, TimingConfig, UrlRewrite,
};
pub use self::metadata::{FileEntry, InstalledVersion, ScriptMetadata, THEMES_CATEGORY};
