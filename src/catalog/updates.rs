use std::collections::HashSet;

use super::*;

/// Rebuilds the Updates category from the cached listings.
///
/// Returns the apps that are installed with a version different from the catalog's, first
/// occurrence per slug, and rewrites `index` so that it starts with an Updates entry exactly
/// when that set is non-empty.
pub fn rebuild_updates(
    index: &mut CategoryIndex,
    store: &Store,
    versions: &InstalledVersions,
) -> CategoryListing {
    let mut seen = HashSet::new();
    let mut apps = Vec::new();

    for category in index.categories.iter().filter(|c| !c.is_updates()) {
        let listing = match store.read_listing(&category.slug) {
            Ok(listing) => listing,
            Err(err) => {
                debug!(slug = %category.slug, error = %err, "skipping category for updates");
                continue;
            }
        };
        for app in listing.apps {
            if versions.has_update(&app) && seen.insert(app.slug.clone()) {
                apps.push(app);
            }
        }
    }

    let updates = CategoryListing::from_apps(apps);

    let mut categories: Vec<Category> = index
        .categories
        .drain(..)
        .filter(|c| !c.is_updates())
        .collect();
    if updates.count > 0 {
        categories.insert(0, Category::updates(updates.count));
    }
    index.set_categories(categories);

    info!(updates = updates.count, "updates category rebuilt");
    updates
}
