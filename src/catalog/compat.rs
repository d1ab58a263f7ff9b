use regex::Regex;

use super::*;

/// Whether `app` belongs in the cache of a category on this device.
///
/// Theme categories only look at `supported-screen-size`, everything else only at
/// `supported-devices`. Apps that declare neither are always kept.
pub fn is_compatible(app: &AppEntry, themes: bool, device: &DeviceProfile) -> bool {
    if themes {
        return match &app.supported_screen_size {
            Some(size) => *size == device.resolution(),
            None => true,
        };
    }
    match &app.supported_devices {
        Some(patterns) => board_matches(patterns, &device.board),
        None => true,
    }
}

pub fn filter_listing(
    listing: CategoryListing,
    themes: bool,
    device: &DeviceProfile,
) -> CategoryListing {
    let before = listing.apps.len();
    let apps: Vec<AppEntry> = listing
        .apps
        .into_iter()
        .filter(|app| is_compatible(app, themes, device))
        .collect();
    debug!(before, after = apps.len(), themes, "filtered listing");
    CategoryListing {
        count: apps.len(),
        apps,
        extra: listing.extra,
    }
}

fn board_matches(patterns: &[String], board: &str) -> bool {
    patterns.iter().any(|pattern| match Regex::new(pattern) {
        Ok(re) => re.is_match(board),
        Err(err) => {
            warn!(%pattern, error = %err, "ignoring invalid device pattern");
            false
        }
    })
}

#[cfg(test)]
#[path = "../tests/catalog/compat_tests.rs"]
mod tests;
