//! User card renderer.
//!
//! Each card takes [`CARD_HEIGHT`] rows:
//!
//! ```text
//! ▌ [AB] Ada Byron
//! ▌      ada@example.com
//! ▌      London, United Kingdom
//!
//! ```
//!
//! The initials badge links to the avatar image when a link target is set.

use crate::ui::helpers::{position_cursor, write_highlighted, write_hyperlink};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CardItem, CARD_HEIGHT};

const ACCENT_BAR: &str = "▌ ";

/// Columns taken by the accent bar and the badge, `"▌ [AB] "`.
const TEXT_INDENT: usize = 7;

/// Renders `cards` one below the other starting at `row`.
///
/// Returns the row after the last card.
pub fn render_cards(out: &mut String, row: usize, cards: &[CardItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for card in cards {
        current_row = render_card(out, current_row, card, theme, cols);
    }
    current_row
}

fn render_card(out: &mut String, row: usize, card: &CardItem, theme: &Theme, cols: usize) -> usize {
    let text_width = cols.saturating_sub(TEXT_INDENT);

    // Name line with the badge.
    begin_line(out, row, card, theme);
    let badge = format!("[{:<2}]", card.initials);
    match &card.link {
        Some(target) => write_hyperlink(out, target, &badge),
        None => out.push_str(&badge),
    }
    out.push(' ');
    out.push_str(Theme::bold());
    restore_base(out, card, theme, &theme.colors.text_normal);
    let name = card.name.truncated(text_width);
    let ranges: Vec<(usize, usize)> = card
        .highlight_ranges
        .iter()
        .map(|&(start, end)| (start, end.min(name.chars().count())))
        .filter(|&(start, end)| start < end)
        .collect();
    write_highlighted(out, name, &ranges, theme, card.is_selected);
    pad_line(out, TEXT_INDENT + name.chars().count(), cols);
    out.push_str(Theme::reset());

    for (offset, detail) in [&card.email, &card.location].into_iter().enumerate() {
        begin_line(out, row + 1 + offset, card, theme);
        out.push_str("     ");
        restore_base(out, card, theme, &theme.colors.text_dim);
        let detail = detail.truncated(text_width);
        out.push_str(detail);
        pad_line(out, TEXT_INDENT + detail.chars().count(), cols);
        out.push_str(Theme::reset());
    }

    row + CARD_HEIGHT
}

/// Positions the cursor and draws the accent bar in the card's base style.
fn begin_line(out: &mut String, row: usize, card: &CardItem, theme: &Theme) {
    position_cursor(out, row, 1);
    restore_base(out, card, theme, &theme.colors.card_accent);
    out.push_str(ACCENT_BAR);
}

fn restore_base(out: &mut String, card: &CardItem, theme: &Theme, fg: &str) {
    if card.is_selected {
        out.push_str(&Theme::fg(&theme.colors.selection_fg));
        out.push_str(&Theme::bg(&theme.colors.selection_bg));
    } else {
        out.push_str(&Theme::fg(fg));
    }
}

fn pad_line(out: &mut String, used: usize, cols: usize) {
    out.push_str(&" ".repeat(cols.saturating_sub(used)));
}
