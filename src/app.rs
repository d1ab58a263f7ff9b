//! The App Store screen: view state machine, dirty-flag renderer and the cooperative main loop.
//!
//! Everything runs on one thread. A pass of the loop handles at most one key, redraws the
//! regions whose flags are set, expires the popup and steps any scrolling text.

use tracing::{debug, info, warn};

use crate::catalog::{apply_cached_counts, rebuild_updates, refresh_all};
use crate::error::{FetchError, InstallError};
use crate::install::{self, DeleteOutcome, InstallOutcome, Progress};
use crate::model::{AppConfig, AppEntry, Category, CategoryIndex, CategoryListing, UPDATES_SLUG};
use crate::platform::{Bounds, Clock, DeviceProfile, Display, Key, Keypad, Rgb};
use crate::remote::CatalogClient;
use crate::render::{self, Metrics};
use crate::store::{InstalledVersions, ScriptStatus, Store};

mod actions;
mod draw;
mod event_loop;
mod nav;
mod popup;
mod scroll;
mod startup;
mod state;
mod status;

pub use self::event_loop::Peripherals;
pub use self::state::{ActionMenu, App, DirtyFlags, MenuAction, View};

const WIFI_REQUIRED: &str = "WiFi not connected. Connect via WiFi menu first.";
