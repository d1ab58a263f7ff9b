//! Pixel layout shared by every screen region, plus the popup and action-menu boxes.

use crate::platform::{Align, Baseline, Bounds, Display, Rgb, TextStyle};

mod text;
mod widgets;

pub use self::text::{next_scroll_offset, scroll_window, wrap_lines};
pub use self::widgets::{draw_menu, draw_popup, menu_bounds, popup_bounds};

/// Rows in the text grid below the title.
pub const GRID_ROWS: i32 = 9;

/// Base glyph cell; text size `n` scales it by `n`.
pub const GLYPH_W: i32 = 6;
pub const GLYPH_H: i32 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metrics {
    pub width: i32,
    pub height: i32,
    /// 1 on wide screens, 0 otherwise; added to every text size.
    pub font_scale: i32,
    /// Characters of size-1 text that fit across the screen.
    pub max_chars: usize,
}

impl Metrics {
    pub fn new(width: i32, height: i32) -> Self {
        let font_scale = if width > 300 { 1 } else { 0 };
        let max_chars = (width / (GLYPH_W * (font_scale + 1))).max(0) as usize;
        Self {
            width,
            height,
            font_scale,
            max_chars,
        }
    }

    pub fn of(display: &dyn Display) -> Self {
        Self::new(display.width(), display.height())
    }

    pub fn title_height(&self) -> i32 {
        GLYPH_H * (2 + self.font_scale)
    }

    /// Baseline of grid row `row` (1-based). Row 1 is the title.
    pub fn row_y(&self, row: i32) -> i32 {
        let top = self.title_height();
        if row <= 1 {
            return top;
        }
        (self.height - top - 4) * (row - 1) / (GRID_ROWS - 1) + top + 4
    }

    pub fn name_y(&self) -> i32 {
        self.height * 4 / 10
    }

    pub fn description_y(&self) -> i32 {
        self.height * 5 / 10 + (self.font_scale + 1) * 3 + 3
    }

    pub fn text_size(&self, size: i32) -> u8 {
        (size + self.font_scale).clamp(1, u8::MAX as i32) as u8
    }

    /// Height in pixels of a line of text drawn at `size`.
    pub fn line_height(&self, size: i32) -> i32 {
        GLYPH_H * (size + self.font_scale)
    }
}

/// Clears a full-width band above the row's baseline and draws `text` centred on it.
pub fn draw_row(display: &mut dyn Display, m: &Metrics, text: &str, size: i32, row: i32, color: Rgb) {
    let y = m.row_y(row);
    let band = m.line_height(size);
    display.fill_rect(Bounds::new(0, y - band, m.width, band), Rgb::BLACK);
    display.draw_text(
        text,
        m.width / 2,
        y,
        TextStyle {
            size: m.text_size(size),
            color,
            align: Align::Center,
            baseline: Baseline::Bottom,
        },
    );
}

/// Blanks everything from `top` down.
pub fn clear_below(display: &mut dyn Display, m: &Metrics, top: i32) {
    display.fill_rect(Bounds::new(0, top, m.width, m.height), Rgb::BLACK);
}

/// Draws one line that is centred when it fits and scrolls from the left edge when it does not.
pub fn draw_marquee(
    display: &mut dyn Display,
    m: &Metrics,
    text: &str,
    offset: usize,
    y: i32,
    size: i32,
    color: Rgb,
) {
    let mut style = TextStyle {
        size: m.text_size(size),
        color,
        align: Align::Center,
        baseline: Baseline::Middle,
    };
    if text.chars().count() > m.max_chars {
        style.align = Align::Left;
        display.draw_text(&scroll_window(text, offset, m.max_chars), 0, y, style);
    } else {
        display.draw_text(text, m.width / 2, y, style);
    }
}

#[cfg(test)]
#[path = "tests/render/metrics_tests.rs"]
mod tests;
