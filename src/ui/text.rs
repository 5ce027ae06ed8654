//! Display-safe text.
//!
//! Everything shown in a card comes from a remote service and is untrusted.
//! A terminal interprets control characters (ESC, CSI, OSC, BEL, CR, ...) as
//! commands, so printing such a string verbatim would let the remote data
//! move the cursor, rewrite other panes' content or inject hyperlinks.
//! [`PlainText`] is the only way card text reaches the frame: its constructor
//! escapes every character that a terminal could act on, so the value is
//! always shown as data.

use std::fmt;

/// Text that is safe to write into a terminal frame verbatim.
///
/// Control characters (C0, DEL, C1) and Unicode bidirectional formatting
/// characters are replaced by their `\u{..}` escape. All other characters,
/// including markup-like `<`, `>` and `&`, are kept as they are.
///
/// # Example
///
/// ```
/// use userdeck::ui::PlainText;
///
/// let text = PlainText::new("<b>Eve</b>\u{1b}[2J");
/// assert_eq!(text.as_str(), "<b>Eve</b>\\u{1b}[2J");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlainText(String);

impl PlainText {
    /// Escapes `raw` into display-safe text.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let mut escaped = String::with_capacity(raw.len());
        for c in raw.chars() {
            if c.is_control() || is_bidi_format(c) {
                escaped.extend(c.escape_unicode());
            } else {
                escaped.push(c);
            }
        }
        Self(escaped)
    }

    /// Returns the escaped text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters, used as the display width.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// Returns the first `max` characters.
    #[must_use]
    pub fn truncated(&self, max: usize) -> &str {
        match self.0.char_indices().nth(max) {
            Some((byte_idx, _)) => &self.0[..byte_idx],
            None => &self.0,
        }
    }
}

impl fmt::Display for PlainText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unicode characters that reorder surrounding text when displayed.
const fn is_bidi_format(c: char) -> bool {
    matches!(
        c,
        '\u{061c}' | '\u{200e}' | '\u{200f}' | '\u{202a}'..='\u{202e}' | '\u{2066}'..='\u{2069}'
    )
}

/// Finds case-insensitive occurrences of `term` in `text`.
///
/// Returns non-overlapping `(start, end)` character ranges (exclusive end).
/// Returns no ranges when `term` is blank or when lower-casing would change
/// the character count of either string, since ranges could not be mapped back.
#[must_use]
pub fn match_ranges(text: &str, term: &str) -> Vec<(usize, usize)> {
    let term = term.trim();
    if term.is_empty() {
        return vec![];
    }

    let haystack: Vec<char> = text.to_lowercase().chars().collect();
    let needle: Vec<char> = term.to_lowercase().chars().collect();
    if haystack.len() != text.chars().count() || needle.len() != term.chars().count() {
        return vec![];
    }

    let mut ranges = Vec::new();
    let mut start = 0;
    while start + needle.len() <= haystack.len() {
        if haystack[start..start + needle.len()] == needle[..] {
            ranges.push((start, start + needle.len()));
            start += needle.len();
        } else {
            start += 1;
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_markup_like_text_literal() {
        let text = PlainText::new("<b>Bob</b> & <img src=x onerror=alert(1)>");
        assert_eq!(text.as_str(), "<b>Bob</b> & <img src=x onerror=alert(1)>");
    }

    #[test]
    fn escapes_terminal_control_sequences() {
        let text = PlainText::new("Eve\u{1b}]8;;http://evil\u{7}\r\nX\u{9b}31m");
        assert!(!text.as_str().chars().any(char::is_control));
        assert_eq!(
            text.as_str(),
            "Eve\\u{1b}]8;;http://evil\\u{7}\\u{d}\\u{a}X\\u{9b}31m"
        );
    }

    #[test]
    fn escapes_bidi_overrides() {
        let text = PlainText::new("abc\u{202e}fed");
        assert_eq!(text.as_str(), "abc\\u{202e}fed");
    }

    #[test]
    fn keeps_non_ascii_letters() {
        let text = PlainText::new("Jürgen Øster 李");
        assert_eq!(text.as_str(), "Jürgen Øster 李");
        assert_eq!(text.char_len(), 14);
        assert_eq!(text.truncated(6), "Jürgen");
    }

    #[test]
    fn finds_case_insensitive_ranges() {
        assert_eq!(match_ranges("John Jones", "jo"), vec![(0, 2), (5, 7)]);
        assert_eq!(match_ranges("John Jones", "N J"), vec![(3, 6)]);
        assert_eq!(match_ranges("John Jones", "  "), vec![]);
        assert_eq!(match_ranges("John Jones", "xyz"), vec![]);
    }
}
