use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CATALOG_URL: &str =
    "https://raw.githubusercontent.com/BruceDevices/App-Store-Data/refs/heads/main/";
pub const DEFAULT_RAW_URL: &str = "https://raw.githubusercontent.com/";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Root of `releases/` and `repositories/`.
    pub catalog_url: String,

    /// Root that raw script files are served from (`<owner>/<repo>/<commit>/<path>`).
    pub raw_url: String,

    /// Applied in order to every outbound URL; the first match wins.
    pub rewrites: Vec<UrlRewrite>,

    pub title: String,

    pub paths: PathsConfig,

    /// Entry that must always exist in the installed-version map.
    pub self_slug: String,
    pub self_version: String,

    pub timing: TimingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            raw_url: DEFAULT_RAW_URL.to_string(),
            rewrites: vec![
                UrlRewrite {
                    from: DEFAULT_CATALOG_URL.to_string(),
                    to: "http://ghp.iceis.co.uk/service/main/".to_string(),
                },
                UrlRewrite {
                    from: DEFAULT_RAW_URL.to_string(),
                    to: "http://ghp.iceis.co.uk/service/manual/".to_string(),
                },
            ],
            title: "Bruce App Store".to_string(),
            paths: PathsConfig::default(),
            self_slug: "BruceDevices/App-Store/App Store".to_string(),
            self_version: "0.0.0".to_string(),
            timing: TimingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Reads a JSON config file. Fields it leaves out keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
        let cfg = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse config {}", path.display()))?;
        Ok(cfg)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlRewrite {
    pub from: String,
    pub to: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Holds `installed.json`, `lastUpdated.json` and `cache/`.
    pub data_dir: String,
    pub scripts_dir: String,
    pub themes_dir: String,
    /// Present on the SD card when the device is configured to use it.
    pub sd_marker: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: "/BruceAppStore/".to_string(),
            scripts_dir: "/BruceJS/".to_string(),
            themes_dir: "/Themes/".to_string(),
            sd_marker: "/bruce.conf".to_string(),
        }
    }
}

impl PathsConfig {
    pub fn installed_file(&self) -> String {
        format!("{}installed.json", self.data_dir)
    }

    pub fn last_updated_file(&self) -> String {
        format!("{}lastUpdated.json", self.data_dir)
    }

    pub fn cache_dir(&self) -> String {
        format!("{}cache/", self.data_dir)
    }

    pub fn cache_file(&self, slug: &str) -> String {
        format!("{}category-{}.json", self.cache_dir(), slug)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimingConfig {
    /// How long a popup stays up before the loop clears it.
    pub popup_ms: u64,
    /// Interval between one-character steps of scrolling text.
    pub scroll_tick_ms: u64,
    /// Sleep at the end of each main loop pass.
    pub loop_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            popup_ms: 3000,
            scroll_tick_ms: 100,
            loop_delay_ms: 50,
        }
    }
}
