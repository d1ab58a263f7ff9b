//! Keeping the on-device category cache in step with the remote catalog, and deriving the
//! Updates category from it.

use tracing::{debug, info, warn};

use crate::model::{AppEntry, Category, CategoryIndex, CategoryListing, UPDATES_SLUG};
use crate::platform::DeviceProfile;
use crate::remote::CatalogClient;
use crate::store::{InstalledVersions, Store};

mod compat;
mod refresh;
mod updates;

pub use self::compat::{filter_listing, is_compatible};
pub use self::refresh::{RefreshReport, apply_cached_counts, refresh_all};
pub use self::updates::rebuild_updates;
