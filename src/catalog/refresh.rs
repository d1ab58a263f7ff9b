use super::*;

/// What happened to each category during [`refresh_all`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RefreshReport {
    pub downloaded: Vec<String>,
    pub current: Vec<String>,
    /// Slug and a human-readable reason. The watermark of these slugs did not move.
    pub failed: Vec<(String, String)>,
}

impl RefreshReport {
    pub fn download_count(&self) -> usize {
        self.downloaded.len()
    }
}

/// Brings every cached category listing up to date with `index`.
///
/// A listing is downloaded when the remote `lastUpdated` is newer than the stored watermark or
/// when no cache file exists for it. A category's watermark only advances after its filtered
/// listing has been written. Failures are recorded per category and never stop the loop.
pub fn refresh_all(
    index: &CategoryIndex,
    store: &mut Store,
    client: &mut CatalogClient,
    device: &DeviceProfile,
    progress: &mut dyn FnMut(&Category),
) -> RefreshReport {
    let mut marks = store.load_watermarks();
    let mut report = RefreshReport::default();

    for category in &index.categories {
        if category.slug.is_empty() || category.slug == UPDATES_SLUG {
            continue;
        }
        progress(category);

        let stored = marks.get(&category.slug);
        let newer = category.last_updated > stored;
        if !newer && store.has_listing(&category.slug) {
            debug!(
                slug = %category.slug,
                stored,
                remote = category.last_updated,
                "category up to date"
            );
            report.current.push(category.slug.clone());
            continue;
        }

        info!(
            slug = %category.slug,
            stored,
            remote = category.last_updated,
            "downloading category listing"
        );
        let listing = match client.fetch_listing(&category.slug) {
            Ok(listing) => listing,
            Err(err) => {
                warn!(slug = %category.slug, error = %err, "category download failed");
                report.failed.push((category.slug.clone(), err.to_string()));
                continue;
            }
        };

        let filtered = filter_listing(listing, category.is_themes(), device);
        if let Err(err) = store.write_listing(&category.slug, &filtered) {
            warn!(slug = %category.slug, error = %err, "saving category cache failed");
            report.failed.push((category.slug.clone(), err.to_string()));
            continue;
        }

        marks.set(&category.slug, category.last_updated);
        if let Err(err) = store.save_watermarks(&marks) {
            warn!(error = %err, "saving watermarks failed");
        }
        info!(slug = %category.slug, apps = filtered.count, "category cached");
        report.downloaded.push(category.slug.clone());
    }

    report
}

/// Replaces the remote app counts with the filtered counts of the cached listings.
pub fn apply_cached_counts(index: &mut CategoryIndex, store: &Store) {
    for category in index.categories.iter_mut().filter(|c| !c.is_updates()) {
        if let Ok(listing) = store.read_listing(&category.slug) {
            category.count = listing.count;
        }
    }
}
