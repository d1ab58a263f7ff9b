use super::*;

impl App {
    pub(super) fn reset_scroll(&mut self) {
        self.scroll.name = 0;
        self.scroll.description = 0;
    }

    /// Steps the name and description of the shown script when they are too long to fit,
    /// redrawing only the band each one occupies.
    pub(super) fn tick_scroll(&mut self, display: &mut dyn Display, now: u64) {
        if !self.popup.message.is_empty()
            || self.menu.is_some()
            || self.view != View::Scripts
            || self.downloading
            || now.saturating_sub(self.scroll.last_tick) <= self.config.timing.scroll_tick_ms
        {
            return;
        }
        let Some(app) = self.scripts.get(self.current) else {
            return;
        };
        self.scroll.last_tick = now;

        let m = Metrics::of(display);
        let description_len = app.description.chars().count();
        if description_len > m.max_chars {
            self.scroll.description =
                render::next_scroll_offset(self.scroll.description, description_len);
            let y = m.description_y();
            display.fill_rect(Bounds::new(0, y - 10, m.width, 20), Rgb::BLACK);
            render::draw_marquee(display, &m, &app.description, self.scroll.description, y, 1, Rgb::WHITE);
        }

        let name_len = app.name.chars().count();
        if name_len > m.max_chars {
            self.scroll.name = render::next_scroll_offset(self.scroll.name, name_len);
            let y = m.name_y();
            display.fill_rect(Bounds::new(0, y - 15, m.width, 30), Rgb::BLACK);
            render::draw_marquee(display, &m, &app.name, self.scroll.name, y, 2, Rgb::GREEN);
        }
    }
}

#[cfg(test)]
#[path = "../tests/app/scroll_tests.rs"]
mod tests;
