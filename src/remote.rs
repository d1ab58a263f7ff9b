//! Catalog HTTP surface: category index, per-category listings, script metadata and raw files.

use tracing::debug;

use crate::error::FetchError;
use crate::model::{AppConfig, CategoryIndex, CategoryListing, ScriptMetadata, UrlRewrite};
use crate::platform::{Network, SaveTarget, SavedFile};

mod http_client;
pub use self::http_client::{encode_spaces, rewrite_url};

pub struct CatalogClient {
    network: Box<dyn Network>,
    catalog_url: String,
    raw_url: String,
    rewrites: Vec<UrlRewrite>,
}

impl CatalogClient {
    pub fn new(network: Box<dyn Network>, config: &AppConfig) -> Self {
        Self {
            network,
            catalog_url: config.catalog_url.clone(),
            raw_url: config.raw_url.clone(),
            rewrites: config.rewrites.clone(),
        }
    }

    pub fn connected(&self) -> bool {
        self.network.connected()
    }

    pub fn fetch_index(&mut self) -> Result<CategoryIndex, FetchError> {
        let url = format!("{}releases/categories.json", self.catalog_url);
        self.get_json(&url)
    }

    pub fn fetch_listing(&mut self, slug: &str) -> Result<CategoryListing, FetchError> {
        let url = format!("{}releases/category-{}.json", self.catalog_url, slug);
        self.get_json(&url)
    }

    pub fn fetch_metadata(&mut self, slug: &str) -> Result<ScriptMetadata, FetchError> {
        let url = format!(
            "{}repositories/{}/metadata.json",
            self.catalog_url,
            encode_spaces(slug)
        );
        self.get_json(&url)
    }

    /// Location of one file of a script at the commit named by its metadata.
    pub fn file_url(&self, meta: &ScriptMetadata, repo_path: &str) -> String {
        encode_spaces(&format!(
            "{}{}/{}/{}/{}",
            self.raw_url, meta.owner, meta.repo, meta.commit, repo_path
        ))
    }

    /// Downloads straight to storage. A non-200 status is returned, not raised, so the caller
    /// can report it per file.
    pub fn save_file(&mut self, url: &str, target: SaveTarget<'_>) -> Result<SavedFile, FetchError> {
        let url = self.rewrite(url);
        debug!(%url, path = target.path, "download");
        Ok(self.network.save(&url, target)?)
    }
}
