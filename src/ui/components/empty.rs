//! Placeholder component renderer.
//!
//! Shown in the list area instead of cards: before the first load, while
//! loading, after a failure and when no user matches.

use crate::ui::helpers::{position_cursor, write_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the two-line placeholder starting one row below `row`.
///
/// Returns the next available row.
pub fn render_placeholder(out: &mut String, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let message_row = row + 1;

    position_cursor(out, message_row, 1);
    out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    write_centered(out, &empty.message, cols);
    out.push_str(Theme::reset());

    if empty.subtitle.is_empty() {
        return message_row + 1;
    }

    position_cursor(out, message_row + 1, 1);
    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    write_centered(out, &empty.subtitle, cols);
    out.push_str(Theme::reset());

    message_row + 2
}
