//! Formatting utilities used for CLI outputs.

use super::colors::RESET;
use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*m").expect("valid ANSI pattern"));

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}{}", s, RESET)
}

/// Display width, ignoring colour escapes.
pub fn visible_width(s: &str) -> usize {
    ANSI.replace_all(s, "").width()
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    format!("{}{}", s, " ".repeat(pad))
}

pub fn center(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_width(s));
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(pad - left))
}

/// Cut plain text to `width` columns, ending with "…" when shortened.
pub fn truncate(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    let mut out = String::new();
    for c in s.chars() {
        if out.width() + 1 >= width {
            break;
        }
        out.push(c);
    }
    out.push('…');
    out
}
