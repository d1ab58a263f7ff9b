use super::*;

impl App {
    /// Loads installed versions, fetches the category index and brings the cache up to date.
    /// Failures end up in the popup; the app then shows whatever categories it has.
    pub fn startup(&mut self, display: &mut dyn Display, clock: &dyn Clock) {
        self.versions = self
            .store
            .load_versions(&self.config.self_slug, &self.config.self_version);
        self.set_status(display, "Launching", "Fetching categories...", false);
        self.blocked = true;

        if !self.client.connected() {
            warn!("offline at startup");
            self.show_popup(display, WIFI_REQUIRED);
        } else {
            match self.client.fetch_index() {
                Ok(index) => {
                    info!(categories = index.len(), "category index fetched");
                    self.catalog = index;
                    self.view = View::Categories;
                    self.refresh_catalog(display);
                }
                Err(FetchError::Status(status)) => {
                    warn!(status, "category index request failed");
                    self.show_popup(display, &format!("Failed Loading Scripts (HTTP {})", status));
                }
                Err(err) => {
                    warn!(error = %err, "category index request failed");
                    self.show_popup(display, &format!("Network error: {}", err));
                }
            }
        }

        self.dirty.categories = true;
        self.set_status(display, "", "", false);
        self.arm_popup_clear(clock);
    }

    fn refresh_catalog(&mut self, display: &mut dyn Display) {
        let status = &mut self.status;
        let report = refresh_all(
            &self.catalog,
            &mut self.store,
            &mut self.client,
            &self.device,
            &mut |category: &Category| {
                status.show(
                    display,
                    "Launching",
                    &format!("Processing {}...", category.name),
                    false,
                    false,
                )
            },
        );
        info!(
            downloaded = report.download_count(),
            current = report.current.len(),
            failed = report.failed.len(),
            "category cache refreshed"
        );

        apply_cached_counts(&mut self.catalog, &self.store);
        self.refresh_updates();
    }
}
