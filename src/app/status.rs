use super::*;

/// Title plus the two progress lines used during startup and long operations.
/// Each part is only redrawn when it changes.
#[derive(Debug)]
pub(super) struct StatusLines {
    title: String,
    title_shown: bool,
    line1: String,
    line2: String,
}

impl StatusLines {
    pub(super) fn new(title: String) -> Self {
        Self {
            title,
            title_shown: false,
            line1: String::new(),
            line2: String::new(),
        }
    }

    pub(super) fn lines(&self) -> (&str, &str) {
        (&self.line1, &self.line2)
    }

    /// `force` blanks everything below the title first. The title is skipped while the
    /// action menu covers the screen.
    pub(super) fn show(
        &mut self,
        display: &mut dyn Display,
        line1: &str,
        line2: &str,
        force: bool,
        menu_open: bool,
    ) {
        let m = Metrics::of(display);
        if force {
            render::clear_below(display, &m, m.title_height());
        }
        if !menu_open && !self.title_shown {
            render::draw_row(display, &m, &self.title, 2, 1, Rgb::PURPLE);
            self.title_shown = true;
        }
        if line1 != self.line1 {
            render::draw_row(display, &m, line1, 1, 4, Rgb::CYAN);
            self.line1 = line1.to_string();
        }
        if line2 != self.line2 {
            render::draw_row(display, &m, line2, 1, 6, Rgb::WHITE);
            self.line2 = line2.to_string();
        }
    }

    pub(super) fn progress(
        &mut self,
        display: &mut dyn Display,
        script: &str,
        step: &Progress,
    ) {
        let text = step.to_string();
        match step {
            Progress::Connecting | Progress::Deleting => self.show(display, script, &text, true, false),
            Progress::DownloadFailed { .. } => self.show(display, "Error", &text, false, false),
            _ => self.show(display, script, &text, false, false),
        }
    }
}

impl App {
    pub(super) fn set_status(&mut self, display: &mut dyn Display, line1: &str, line2: &str, force: bool) {
        let menu_open = self.menu.is_some();
        self.status.show(display, line1, line2, force, menu_open);
    }
}
