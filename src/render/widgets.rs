use super::*;

/// Popup box for already-wrapped `lines`, centred on the screen.
pub fn popup_bounds(m: &Metrics, lines: &[String]) -> Bounds {
    let scale = m.font_scale + 1;
    let longest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as i32;
    let h = lines.len() as i32 * scale * GLYPH_H + 20;
    let w = (m.width - 20).min(longest * GLYPH_W * scale + 40);
    Bounds::new((m.width - w) / 2, m.height / 2 - h / 2, w, h)
}

pub fn draw_popup(display: &mut dyn Display, m: &Metrics, message: &str) {
    let lines = wrap_lines(message, m.max_chars);
    let bounds = popup_bounds(m, &lines);
    display.fill_rect(bounds, Rgb::BLACK);
    display.draw_rect(bounds, Rgb::ORANGE);

    let style = TextStyle {
        size: m.text_size(1),
        color: Rgb::ORANGE,
        align: Align::Center,
        baseline: Baseline::Middle,
    };
    let step = (m.font_scale + 1) * GLYPH_H;
    for (i, line) in lines.iter().enumerate() {
        display.draw_text(line, m.width / 2, bounds.y + 18 + i as i32 * step, style);
    }
}

pub fn menu_bounds(m: &Metrics, options: usize) -> Bounds {
    let h = options as i32 * 16 + 24;
    let w = (m.width - 40).min(200);
    Bounds::new((m.width - w) / 2, (m.height - h) / 2, w, h)
}

pub fn draw_menu(display: &mut dyn Display, m: &Metrics, options: &[&str], selected: usize) {
    let bounds = menu_bounds(m, options.len());
    display.fill_rect(bounds, Rgb::BLACK);
    display.draw_rect(bounds, Rgb::WHITE);

    let step = (m.font_scale + 1) * 10;
    for (k, label) in options.iter().enumerate() {
        let (prefix, color) = if k == selected {
            ("> ", Rgb::GREEN)
        } else {
            ("  ", Rgb::GREY)
        };
        display.draw_text(
            &format!("{}{}", prefix, label),
            bounds.x + 10,
            bounds.y + 16 + k as i32 * step,
            TextStyle {
                size: m.text_size(1),
                color,
                align: Align::Left,
                baseline: Baseline::Middle,
            },
        );
    }
}

#[cfg(test)]
#[path = "../tests/render/widgets_tests.rs"]
mod tests;
