use super::*;

/// Index after one step through a list of `len` entries, wrapping at both ends.
/// `None` for an empty list.
pub(super) fn wrap_step(current: usize, len: usize, forward: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(if forward {
        (current + 1) % len
    } else {
        (current % len + len - 1) % len
    })
}

impl App {
    pub(super) fn navigate(&mut self, forward: bool) {
        let len = match self.view {
            View::Categories => self.catalog.len(),
            View::Scripts => self.scripts.len(),
        };
        let Some(next) = wrap_step(self.current, len, forward) else {
            return;
        };
        self.current = next;
        match self.view {
            View::Categories => self.dirty.categories = true,
            View::Scripts => {
                self.reset_scroll();
                self.dirty.scripts = true;
            }
        }
    }

    pub(super) fn navigate_menu(&mut self, forward: bool) {
        let Some(menu) = self.menu.as_mut() else {
            return;
        };
        if let Some(next) = wrap_step(menu.selected, menu.options.len(), forward) {
            menu.selected = next;
            self.dirty.menu = true;
        }
    }

    /// Applies one key press to the state machine.
    pub fn handle_key(&mut self, key: Key, display: &mut dyn Display, clock: &dyn Clock) {
        debug!(?key, view = ?self.view, menu = self.menu.is_some(), "key");
        if key == Key::Escape {
            if self.menu.is_some() {
                self.hide_menu();
            } else if self.view == View::Scripts {
                self.go_back(display);
            } else {
                info!("exit requested");
                self.quit = true;
            }
            return;
        }

        if !self.popup.message.is_empty() {
            self.dismiss_popup();
            return;
        }

        if self.menu.is_some() {
            match key {
                Key::Next => self.navigate_menu(true),
                Key::Prev => self.navigate_menu(false),
                Key::Select => self.execute_menu_action(display, clock),
                Key::Escape => {}
            }
            return;
        }

        match key {
            Key::Next => self.navigate(true),
            Key::Prev => self.navigate(false),
            Key::Select => match self.view {
                View::Categories if !self.catalog.is_empty() => self.select_category(display, clock),
                View::Scripts if !self.scripts.is_empty() => self.show_action_menu(),
                _ => {}
            },
            Key::Escape => {}
        }
    }
}

#[cfg(test)]
#[path = "../tests/app/nav_tests.rs"]
mod tests;
