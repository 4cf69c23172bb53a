//! Formatting utilities used for CLI and export outputs.

use chrono::Duration;
use unicode_width::UnicodeWidthStr;

/// Terminal column width of `s` (wide glyphs count double).
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// `02h 25m` style rendering of a session length.
pub fn duration2readable(d: Duration) -> String {
    let mins = d.num_minutes().max(0);
    format!("{:02}h {:02}m", mins / 60, mins % 60)
}
