use std::io::{self, IsTerminal, Stdout};

use anyhow::{Context, Result};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier};

use crate::platform::{Align, Baseline, Bounds, Display, Rgb, TextStyle};
use crate::render::{GLYPH_H, GLYPH_W};

/// A pixel display drawn into terminal cells, one cell per size-1 glyph.
///
/// Drawing only touches an off-screen buffer; `flush` hands it to ratatui, which writes the
/// cells that changed since the last frame.
pub struct TerminalDisplay {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    canvas: Buffer,
    width: i32,
    height: i32,
}

impl TerminalDisplay {
    /// Switches the terminal to raw mode and the alternate screen until the display is dropped.
    pub fn enter(width: i32, height: i32) -> Result<Self> {
        if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
            anyhow::bail!("the app store requires an interactive terminal (TTY)");
        }

        let mut stdout = io::stdout();
        enable_raw_mode().context("enable raw mode")?;
        execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("create terminal")?;
        terminal.clear().ok();
        terminal.hide_cursor().ok();

        Ok(Self {
            terminal,
            canvas: Buffer::empty(canvas_area(width, height)),
            width,
            height,
        })
    }

    /// Cells whose centre lies inside `b`, as (first col, first row, last col, last row).
    fn cells(&self, b: Bounds) -> Option<(u16, u16, u16, u16)> {
        let area = self.canvas.area;
        if area.width == 0 || area.height == 0 || b.w <= 0 || b.h <= 0 {
            return None;
        }
        let c0 = div_ceil_nonneg(b.x - GLYPH_W / 2, GLYPH_W);
        let r0 = div_ceil_nonneg(b.y - GLYPH_H / 2, GLYPH_H);
        let c1 = (b.x + b.w - 1 - GLYPH_W / 2).div_euclid(GLYPH_W);
        let r1 = (b.y + b.h - 1 - GLYPH_H / 2).div_euclid(GLYPH_H);
        let c1 = c1.min(area.width as i32 - 1);
        let r1 = r1.min(area.height as i32 - 1);
        if c0 > c1 || r0 > r1 {
            return None;
        }
        Some((c0 as u16, r0 as u16, c1 as u16, r1 as u16))
    }

    fn put(&mut self, col: u16, row: u16, symbol: &str, fg: Color, bold: bool) {
        if let Some(cell) = self.canvas.cell_mut((col, row)) {
            cell.set_symbol(symbol).set_fg(fg).set_bg(Color::Black);
            if bold {
                cell.modifier.insert(Modifier::BOLD);
            } else {
                cell.modifier = Modifier::empty();
            }
        }
    }
}

impl Drop for TerminalDisplay {
    fn drop(&mut self) {
        disable_raw_mode().ok();
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen).ok();
        self.terminal.show_cursor().ok();
    }
}

impl Display for TerminalDisplay {
    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn fill_rect(&mut self, bounds: Bounds, color: Rgb) {
        let Some((c0, r0, c1, r1)) = self.cells(bounds) else {
            return;
        };
        for row in r0..=r1 {
            for col in c0..=c1 {
                if let Some(cell) = self.canvas.cell_mut((col, row)) {
                    cell.reset();
                    cell.set_bg(color_of(color));
                }
            }
        }
    }

    fn draw_rect(&mut self, bounds: Bounds, color: Rgb) {
        let Some((c0, r0, c1, r1)) = self.cells(bounds) else {
            return;
        };
        let fg = color_of(color);
        for col in c0..=c1 {
            self.put(col, r0, "─", fg, false);
            self.put(col, r1, "─", fg, false);
        }
        for row in r0..=r1 {
            self.put(c0, row, "│", fg, false);
            self.put(c1, row, "│", fg, false);
        }
        self.put(c0, r0, "┌", fg, false);
        self.put(c1, r0, "┐", fg, false);
        self.put(c0, r1, "└", fg, false);
        self.put(c1, r1, "┘", fg, false);
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, style: TextStyle) {
        let size = style.size.max(1) as i32;
        let chars = text.chars().count() as i32;
        let box_w = chars * GLYPH_W * size;
        let box_h = GLYPH_H * size;
        let left = match style.align {
            Align::Left => x,
            Align::Center => x - box_w / 2,
            Align::Right => x - box_w,
        };
        let top = match style.baseline {
            Baseline::Top => y,
            Baseline::Middle => y - box_h / 2,
            Baseline::Bottom => y - box_h,
        };

        // One cell per character regardless of size, centred in the box the glyphs would fill.
        let start = left + (box_w - chars * GLYPH_W) / 2;
        let row = (top + box_h / 2).div_euclid(GLYPH_H);
        if row < 0 || row >= self.canvas.area.height as i32 {
            return;
        }
        let fg = color_of(style.color);
        let mut col = start.div_euclid(GLYPH_W);
        let mut buf = [0u8; 4];
        for ch in text.chars() {
            if col >= 0 && col < self.canvas.area.width as i32 {
                self.put(col as u16, row as u16, ch.encode_utf8(&mut buf), fg, size > 1);
            }
            col += 1;
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        let canvas = &self.canvas;
        self.terminal.draw(|frame| {
            let area = frame.area().intersection(canvas.area);
            let buf = frame.buffer_mut();
            for row in area.top()..area.bottom() {
                for col in area.left()..area.right() {
                    buf[(col, row)] = canvas[(col, row)].clone();
                }
            }
        })?;
        Ok(())
    }
}

fn canvas_area(width: i32, height: i32) -> Rect {
    let cols = (width.max(0) / GLYPH_W).min(u16::MAX as i32) as u16;
    let rows = (height.max(0) / GLYPH_H).min(u16::MAX as i32) as u16;
    Rect::new(0, 0, cols, rows)
}

fn div_ceil_nonneg(n: i32, d: i32) -> i32 {
    if n <= 0 { 0 } else { (n + d - 1) / d }
}

fn color_of(c: Rgb) -> Color {
    Color::Rgb(c.0, c.1, c.2)
}
