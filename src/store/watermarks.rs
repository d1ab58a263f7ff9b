use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Store;
use crate::error::StoreError;

/// Last remote `lastUpdated` seen for a category whose listing was cached successfully.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Watermark {
    pub slug: String,

    #[serde(default, rename = "lastUpdated")]
    pub last_updated: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Watermarks {
    #[serde(default)]
    pub categories: Vec<Watermark>,
}

impl Watermarks {
    /// 0 for a category never cached.
    pub fn get(&self, slug: &str) -> i64 {
        self.categories
            .iter()
            .find(|w| w.slug == slug)
            .map(|w| w.last_updated)
            .unwrap_or(0)
    }

    pub fn set(&mut self, slug: &str, last_updated: i64) {
        match self.categories.iter_mut().find(|w| w.slug == slug) {
            Some(w) => w.last_updated = last_updated,
            None => self.categories.push(Watermark {
                slug: slug.to_string(),
                last_updated,
            }),
        }
    }
}

impl Store {
    pub fn load_watermarks(&self) -> Watermarks {
        match self.read_json(&self.paths.last_updated_file()) {
            Ok(w) => w,
            Err(err) => {
                debug!(error = %err, "no usable watermarks");
                Watermarks::default()
            }
        }
    }

    pub fn save_watermarks(&mut self, watermarks: &Watermarks) -> Result<(), StoreError> {
        let path = self.paths.last_updated_file();
        self.write_json(&path, watermarks)
    }
}

#[cfg(test)]
#[path = "../tests/store/watermarks_tests.rs"]
mod tests;
