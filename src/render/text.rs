/// Separator between the end of a scrolling text and its next repetition.
const SCROLL_GAP: &str = "    ";

/// Splits on newlines, then greedily packs words into lines of at most `max_chars`.
/// A word longer than `max_chars` gets a line of its own.
pub fn wrap_lines(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for segment in text.split('\n') {
        if segment.chars().count() <= max_chars {
            lines.push(segment.to_string());
            continue;
        }
        let mut current = String::new();
        for word in segment.split(' ') {
            let extra = if current.is_empty() { 0 } else { 1 };
            if current.chars().count() + extra + word.chars().count() <= max_chars {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
            } else if current.is_empty() {
                lines.push(word.to_string());
            } else {
                lines.push(std::mem::replace(&mut current, word.to_string()));
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

/// The `max_chars` visible characters of `text` scrolled left by `offset`, wrapping around
/// through a four-space gap.
pub fn scroll_window(text: &str, offset: usize, max_chars: usize) -> String {
    let padded: Vec<char> = text.chars().chain(SCROLL_GAP.chars()).collect();
    let start = offset % padded.len();
    padded
        .iter()
        .chain(padded.iter())
        .skip(start)
        .take(max_chars)
        .collect()
}

/// Next offset of a scrolling text: one step further, back to 0 once past `len + 10`.
pub fn next_scroll_offset(offset: usize, len: usize) -> usize {
    let next = offset + 1;
    if next > len + 10 { 0 } else { next }
}

#[cfg(test)]
#[path = "../tests/render/text_tests.rs"]
mod tests;
