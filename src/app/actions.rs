use super::*;

impl App {
    pub(super) fn select_category(&mut self, display: &mut dyn Display, clock: &dyn Clock) {
        let Some(category) = self.catalog.get(self.current).cloned() else {
            return;
        };
        info!(slug = %category.slug, "open category");
        self.last_category_index = self.current;
        self.view = View::Scripts;
        self.current = 0;
        self.reset_scroll();

        self.scripts = self.load_category(&category, display);
        self.selected_category = Some(category);
        self.set_status(display, "", "", false);
        self.dirty.scripts = true;
        self.blocked = true;
        self.arm_popup_clear(clock);
    }

    fn load_category(&mut self, category: &Category, display: &mut dyn Display) -> Vec<AppEntry> {
        if category.slug == UPDATES_SLUG {
            if !self.client.connected() {
                self.show_popup(display, WIFI_REQUIRED);
                return Vec::new();
            }
            return self.updates.apps.clone();
        }

        match self.store.read_listing(&category.slug) {
            Ok(listing) => listing.apps,
            Err(err) if err.is_not_found() => {
                warn!(slug = %category.slug, "category not cached");
                self.show_popup(display, "Category data not available. Please restart app.");
                Vec::new()
            }
            Err(err) => {
                warn!(slug = %category.slug, error = %err, "category cache unreadable");
                self.show_popup(display, "Error loading category data. Please restart app.");
                Vec::new()
            }
        }
    }

    pub(super) fn go_back(&mut self, display: &mut dyn Display) {
        let m = Metrics::of(display);
        render::clear_below(display, &m, m.title_height() + 1);
        self.view = View::Categories;
        // The Updates entry may have come or gone while the category was open.
        self.current = self
            .last_category_index
            .min(self.catalog.len().saturating_sub(1));
        self.scripts.clear();
        self.selected_category = None;
        self.reset_scroll();
        self.dirty.categories = true;
    }

    pub(super) fn show_action_menu(&mut self) {
        let Some(app) = self.scripts.get(self.current) else {
            return;
        };
        let options = MenuAction::options_for(self.versions.status(app));
        self.menu = Some(ActionMenu {
            options,
            selected: 0,
        });
        self.dirty.menu = true;
    }

    pub(super) fn hide_menu(&mut self) {
        self.menu = None;
        self.dirty.scripts = true;
    }

    pub(super) fn execute_menu_action(&mut self, display: &mut dyn Display, clock: &dyn Clock) {
        let action = self.menu.as_ref().and_then(ActionMenu::selected_action);
        self.hide_menu();
        let Some(app) = self.scripts.get(self.current).cloned() else {
            return;
        };
        match action {
            Some(MenuAction::Install | MenuAction::Update | MenuAction::Reinstall) => {
                self.run_install(&app, display, clock)
            }
            Some(MenuAction::Delete) => self.run_delete(&app, display, clock),
            Some(MenuAction::Back) | None => {}
        }
    }

    fn run_install(&mut self, app: &AppEntry, display: &mut dyn Display, clock: &dyn Clock) {
        self.downloading = true;
        self.blocked = true;

        let status = &mut self.status;
        let result = install::install(
            app,
            &mut self.client,
            &mut self.store,
            &mut self.versions,
            &mut |step: &Progress| status.progress(display, &app.name, step),
        );

        match result {
            Ok(InstallOutcome::Installed { .. }) => {
                self.refresh_updates();
                self.set_status(display, "", "", false);
                self.repaint_scripts(display);
                self.show_popup(display, "Installed successfully!");
            }
            Ok(InstallOutcome::Incomplete { written, failed }) => {
                let message = format!(
                    "Install incomplete: {} of {} files failed",
                    failed,
                    written + failed
                );
                self.repaint_scripts(display);
                self.show_popup(display, &message);
            }
            Err(InstallError::Offline) => {
                self.repaint_scripts(display);
                self.set_status(display, "Error", "WiFi not connected", false);
            }
            Err(InstallError::Metadata(err)) => {
                self.repaint_scripts(display);
                self.show_popup(display, &metadata_message(&err));
            }
        }

        self.downloading = false;
        self.arm_popup_clear(clock);
    }

    fn run_delete(&mut self, app: &AppEntry, display: &mut dyn Display, clock: &dyn Clock) {
        self.downloading = true;
        self.blocked = true;

        let status = &mut self.status;
        let result = install::delete(
            app,
            &mut self.client,
            &mut self.store,
            &mut self.versions,
            &mut |step: &Progress| status.progress(display, &app.name, step),
        );

        match result {
            Ok(DeleteOutcome::Deleted { .. }) => {
                self.refresh_updates();
                self.set_status(display, "", "", false);
                self.repaint_scripts(display);
                self.show_popup(display, "Deleted successfully!");
            }
            Ok(DeleteOutcome::NothingRemoved) => {
                self.repaint_scripts(display);
                self.show_popup(display, "Failed to delete script files");
            }
            Err(err) => {
                self.repaint_scripts(display);
                self.show_popup(display, &format!("Error deleting script: {}", err));
            }
        }

        self.downloading = false;
        self.arm_popup_clear(clock);
    }

    /// Draws the script page now, so whatever is drawn after it stays on top when the loop
    /// renders this pass.
    fn repaint_scripts(&mut self, display: &mut dyn Display) {
        self.dirty.scripts = true;
        self.draw_scripts(display);
    }

    /// Re-derives the Updates category after the installed versions changed.
    pub(super) fn refresh_updates(&mut self) {
        self.updates = rebuild_updates(&mut self.catalog, &self.store, &self.versions);
    }
}

fn metadata_message(err: &FetchError) -> String {
    match err {
        FetchError::Status(status) => format!("Failed Loading Metadata (HTTP {})", status),
        other => format!("Network error: {}", other),
    }
}
