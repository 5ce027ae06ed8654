//! Status line component renderer.
//!
//! Shows the status message on the left and the load trigger on the right.
//! The trigger is drawn dimmed while it is disabled.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusInfo;

/// Renders the status line at `row`.
///
/// Returns the next available row.
pub fn render_status_line(out: &mut String, row: usize, status: &StatusInfo, theme: &Theme, cols: usize) -> usize {
    let label_len = status.trigger.label.chars().count();
    let text_room = cols.saturating_sub(label_len + 2);
    let text: String = status.text.chars().take(text_room).collect();
    let text_len = text.chars().count();

    position_cursor(out, row, 1);
    out.push(' ');
    out.push_str(&Theme::fg(theme.status_color(status.kind)));
    out.push_str(&text);
    out.push_str(Theme::reset());

    let gap = cols.saturating_sub(1 + text_len + label_len);
    out.push_str(&" ".repeat(gap));

    if label_len + 1 <= cols {
        if status.trigger.enabled {
            out.push_str(Theme::bold());
            out.push_str(&Theme::fg(&theme.colors.card_accent));
        } else {
            out.push_str(Theme::dim());
            out.push_str(&Theme::fg(&theme.colors.text_dim));
        }
        out.push_str(&status.trigger.label);
        out.push_str(Theme::reset());
    }

    row + 1
}
