use serde::{Deserialize, Deserializer, Serialize};

/// Slug of the synthetic category listing installed apps with a newer catalog version.
pub const UPDATES_SLUG: &str = "updates";
pub const UPDATES_NAME: &str = "Updates";

/// Version string the catalog uses when a script carries no version.
pub const UNKNOWN_VERSION: &str = "UNKNOWN";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub slug: String,

    #[serde(default)]
    pub count: usize,

    #[serde(default, rename = "lastUpdated")]
    pub last_updated: i64,
}

impl Category {
    pub fn updates(count: usize) -> Self {
        Self {
            name: UPDATES_NAME.to_string(),
            slug: UPDATES_SLUG.to_string(),
            count,
            last_updated: 0,
        }
    }

    pub fn is_updates(&self) -> bool {
        self.slug == UPDATES_SLUG
    }

    /// Theme categories are filtered by screen size instead of board.
    pub fn is_themes(&self) -> bool {
        self.slug == "themes" || self.name.to_lowercase().contains("theme")
    }
}

/// `releases/categories.json`, plus the local Updates entry once it has been derived.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryIndex {
    #[serde(default)]
    pub categories: Vec<Category>,

    #[serde(default, rename = "totalCategories")]
    pub total_categories: usize,
}

impl CategoryIndex {
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    /// Keeps `total_categories` in step with the sequence after a local edit.
    pub fn set_categories(&mut self, categories: Vec<Category>) {
        self.total_categories = categories.len();
        self.categories = categories;
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppEntry {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub slug: String,

    #[serde(default)]
    pub description: String,

    #[serde(default = "unknown_version")]
    pub version: String,

    /// Board patterns. A bare string is normalized to a single pattern at parse time.
    #[serde(
        default,
        rename = "supported-devices",
        deserialize_with = "one_or_many",
        skip_serializing_if = "Option::is_none"
    )]
    pub supported_devices: Option<Vec<String>>,

    #[serde(
        default,
        rename = "supported-screen-size",
        deserialize_with = "non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub supported_screen_size: Option<String>,

    /// Fields the store does not interpret, kept so the cache mirrors the catalog.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl AppEntry {
    pub fn has_known_version(&self) -> bool {
        self.version != UNKNOWN_VERSION
    }
}

/// `releases/category-<slug>.json` and the filtered copy kept in the cache.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryListing {
    #[serde(default)]
    pub apps: Vec<AppEntry>,

    #[serde(default)]
    pub count: usize,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl CategoryListing {
    pub fn from_apps(apps: Vec<AppEntry>) -> Self {
        Self {
            count: apps.len(),
            apps,
            extra: serde_json::Map::new(),
        }
    }
}

fn unknown_version() -> String {
    UNKNOWN_VERSION.to_string()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<OneOrMany>::deserialize(deserializer)?;
    Ok(match raw {
        None => None,
        Some(OneOrMany::One(pattern)) if pattern.is_empty() => None,
        Some(OneOrMany::One(pattern)) => Some(vec![pattern]),
        Some(OneOrMany::Many(patterns)) => Some(patterns),
    })
}

fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()))
}
