use super::*;

impl App {
    /// Sets the popup text. The box is drawn only when the text changes to something non-empty;
    /// an empty string just forgets the message.
    pub(super) fn show_popup(&mut self, display: &mut dyn Display, message: &str) {
        if self.popup.message == message {
            return;
        }
        self.popup.message = message.to_string();
        if message.is_empty() {
            return;
        }
        info!(%message, "popup");
        let m = Metrics::of(display);
        render::draw_popup(display, &m, message);
    }

    pub(super) fn arm_popup_clear(&mut self, clock: &dyn Clock) {
        self.popup.clear_at = clock.now_ms() + self.config.timing.popup_ms;
    }

    pub(super) fn check_popup_clear(&mut self, now: u64) {
        if self.popup.clear_at > 0 && now >= self.popup.clear_at && !self.popup.message.is_empty() {
            debug!("popup expired");
            self.popup.message.clear();
            self.mark_view_dirty();
        }
    }

    pub(super) fn dismiss_popup(&mut self) {
        self.popup.message.clear();
        self.popup.clear_at = 0;
        self.mark_view_dirty();
    }

    pub(super) fn mark_view_dirty(&mut self) {
        match self.view {
            View::Categories => self.dirty.categories = true,
            View::Scripts => self.dirty.scripts = true,
        }
    }
}
