use super::*;

impl App {
    /// Redraws every region whose flag is set. With no flag set nothing is drawn.
    /// A showing popup is drawn again over anything redrawn beneath it.
    pub fn render(&mut self, display: &mut dyn Display) {
        let redraw = self.dirty.any();
        self.draw_categories(display);
        self.draw_scripts(display);
        self.draw_action_menu(display);

        if redraw && !self.popup.message.is_empty() {
            let m = Metrics::of(display);
            render::draw_popup(display, &m, &self.popup.message);
        }
    }

    pub(super) fn draw_categories(&mut self, display: &mut dyn Display) {
        if !self.dirty.categories {
            return;
        }
        self.dirty.categories = false;
        if self.view != View::Categories {
            return;
        }

        let m = Metrics::of(display);
        if self.catalog.is_empty() {
            render::draw_row(display, &m, "No categories available", 1, 6, Rgb::RED);
            render::draw_row(display, &m, "Check network connection", 1, 7, Rgb::WHITE);
            return;
        }
        if self.menu.is_some() {
            return;
        }
        let Some(category) = self.catalog.get(self.current) else {
            return;
        };

        let position = format!("{} of {}", self.current + 1, self.catalog.len());
        render::draw_row(display, &m, &position, 1, 3, Rgb::WHITE);

        let (name, color) = if category.is_updates() {
            (format!("* {} *", category.name), Rgb::ORANGE)
        } else {
            (category.name.clone(), Rgb::GREEN)
        };
        render::draw_row(display, &m, &name, 2, 5, color);
        render::draw_row(display, &m, &count_label(category), 1, 7, Rgb::WHITE);
    }

    pub(super) fn draw_scripts(&mut self, display: &mut dyn Display) {
        if !self.dirty.scripts {
            return;
        }
        self.dirty.scripts = false;
        if self.view != View::Scripts {
            return;
        }

        let m = Metrics::of(display);
        render::clear_below(display, &m, m.title_height() + 1);
        if self.scripts.is_empty() {
            render::draw_row(display, &m, "No apps in category", 1, 4, Rgb::RED);
            render::draw_row(display, &m, "Press ESC to go back", 1, 6, Rgb::WHITE);
            return;
        }
        if self.menu.is_some() {
            return;
        }
        let Some(app) = self.scripts.get(self.current) else {
            return;
        };

        if let Some(category) = &self.selected_category {
            let header = format!(
                "{}      {} of {}",
                category.name,
                self.current + 1,
                self.scripts.len()
            );
            render::draw_row(display, &m, &header, 1, 2, Rgb::WHITE);
        }

        render::draw_marquee(display, &m, &app.name, self.scroll.name, m.name_y(), 2, Rgb::GREEN);
        render::draw_marquee(
            display,
            &m,
            &app.description,
            self.scroll.description,
            m.description_y(),
            1,
            Rgb::WHITE,
        );

        let status = self.versions.status(app);
        render::draw_row(display, &m, status.label(), 1, 7, status_color(status));

        if app.has_known_version() {
            render::draw_row(display, &m, &format!("Available: {}", app.version), 1, 8, Rgb::GREY);
            if let Some(installed) = self.versions.version_of(&app.slug) {
                render::draw_row(display, &m, &format!("Installed: {}", installed), 1, 9, Rgb::GREY);
            }
        }
    }

    pub(super) fn draw_action_menu(&mut self, display: &mut dyn Display) {
        if !self.dirty.menu {
            return;
        }
        self.dirty.menu = false;
        let Some(menu) = &self.menu else {
            return;
        };
        if self.scripts.is_empty() {
            return;
        }
        let m = Metrics::of(display);
        render::draw_menu(display, &m, &menu.labels(), menu.selected);
    }
}

fn count_label(category: &Category) -> String {
    let n = category.count;
    let plural = if n == 1 { "" } else { "s" };
    if category.is_updates() {
        format!("{} Update{} Available", n, plural)
    } else if category.name == "Theme" {
        format!("{} theme{}", n, plural)
    } else {
        format!("{} App{}", n, plural)
    }
}

fn status_color(status: ScriptStatus) -> Rgb {
    match status {
        ScriptStatus::NotInstalled => Rgb::YELLOW,
        ScriptStatus::UpdateAvailable => Rgb::ORANGE,
        ScriptStatus::UpToDate => Rgb::GREEN,
    }
}
