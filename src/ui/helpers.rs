//! Shared rendering utilities.
//!
//! All components write into one frame buffer; these helpers cover cursor
//! movement, padded lines and match highlighting. Text arguments are expected
//! to be sanitized already, see [`PlainText`](crate::ui::text::PlainText).

use crate::ui::theme::Theme;
use std::fmt::Write as _;

/// Moves the cursor to `row`/`col` (both 1-indexed).
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    let _ = write!(out, "\u{1b}[{row};{col}H");
}

/// Writes `text` centered in a line of `cols` columns.
///
/// `text` is cut to `cols` characters first.
pub fn write_centered(out: &mut String, text: &str, cols: usize) {
    let text: String = text.chars().take(cols).collect();
    let len = text.chars().count();
    let padding = cols.saturating_sub(len) / 2;

    out.push_str(&" ".repeat(padding));
    out.push_str(&text);
    out.push_str(&" ".repeat(cols.saturating_sub(padding + len)));
}

/// Writes `text` with the character ranges in `ranges` highlighted.
///
/// Ranges are `(start, end)` character indices, end exclusive, sorted and
/// non-overlapping. After each highlighted section the base style is
/// restored: selection colors when `is_selected`, plain text otherwise.
pub fn write_highlighted(
    out: &mut String,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        out.extend(&chars[current_pos..start]);

        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());

        if is_selected {
            out.push_str(&Theme::fg(&theme.colors.selection_fg));
            out.push_str(&Theme::bg(&theme.colors.selection_bg));
        }

        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
}

/// Wraps `label` in an OSC 8 hyperlink to `target`.
///
/// `target` must be a serialized [`url::Url`], which never contains control
/// characters.
pub fn write_hyperlink(out: &mut String, target: &str, label: &str) {
    let _ = write!(out, "\u{1b}]8;;{target}\u{1b}\\{label}\u{1b}]8;;\u{1b}\\");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_ansi(s: &str) -> String {
        let mut plain = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c.is_ascii_alphabetic() {
                        break;
                    }
                }
            } else {
                plain.push(c);
            }
        }
        plain
    }

    #[test]
    fn centered_text_fills_line() {
        let mut out = String::new();
        write_centered(&mut out, "abc", 9);
        assert_eq!(out, "   abc   ");

        let mut out = String::new();
        write_centered(&mut out, "abcdef", 4);
        assert_eq!(out, "abcd");
    }

    #[test]
    fn highlighting_keeps_text_intact() {
        let theme = Theme::default();
        let mut out = String::new();
        write_highlighted(&mut out, "Jöhn Jones", &[(0, 2), (5, 7)], &theme, false);

        assert!(out.contains(&Theme::bg(&theme.colors.match_highlight_bg)));
        assert_eq!(strip_ansi(&out), "Jöhn Jones");
    }

    #[test]
    fn out_of_range_highlights_are_clamped() {
        let theme = Theme::default();
        let mut out = String::new();
        write_highlighted(&mut out, "Ann", &[(1, 10), (20, 30)], &theme, true);
        assert_eq!(strip_ansi(&out), "Ann");
    }

    #[test]
    fn hyperlink_wraps_label() {
        let mut out = String::new();
        write_hyperlink(&mut out, "https://example.com/a.jpg", "AB");
        assert_eq!(
            out,
            "\u{1b}]8;;https://example.com/a.jpg\u{1b}\\AB\u{1b}]8;;\u{1b}\\"
        );
    }
}
