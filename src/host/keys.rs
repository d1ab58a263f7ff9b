use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::warn;

use crate::platform::{Key, Keypad};

/// Reads key presses from the terminal without blocking.
#[derive(Debug, Default)]
pub struct TerminalKeypad;

impl Keypad for TerminalKeypad {
    fn poll(&mut self) -> Option<Key> {
        loop {
            match event::poll(Duration::ZERO) {
                Ok(true) => {}
                Ok(false) => return None,
                Err(err) => {
                    warn!(error = %err, "poll terminal events");
                    return None;
                }
            }
            match event::read() {
                Ok(Event::Key(k)) if k.kind == KeyEventKind::Press => {
                    if let Some(key) = map_key(k) {
                        return Some(key);
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    warn!(error = %err, "read terminal event");
                    return None;
                }
            }
        }
    }

    fn discard_pending(&mut self) {
        while let Ok(true) = event::poll(Duration::ZERO) {
            if event::read().is_err() {
                break;
            }
        }
    }
}

pub fn map_key(k: KeyEvent) -> Option<Key> {
    if k.modifiers.contains(KeyModifiers::CONTROL) && k.code == KeyCode::Char('c') {
        return Some(Key::Escape);
    }
    match k.code {
        KeyCode::Down | KeyCode::Right | KeyCode::Tab | KeyCode::Char('j') => Some(Key::Next),
        KeyCode::Up | KeyCode::Left | KeyCode::BackTab | KeyCode::Char('k') => Some(Key::Prev),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Key::Select),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => Some(Key::Escape),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../tests/host/keys_tests.rs"]
mod tests;
