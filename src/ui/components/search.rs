//! Search bar component renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the 3-line bordered search box at `row`.
///
/// ```text
/// [margin] ┌─────────────┐ [margin]
/// [margin] │ Search: ... │ [margin]
/// [margin] └─────────────┘ [margin]
/// ```
///
/// The term is cut from the left when it does not fit, so the end being typed
/// stays visible. A block cursor follows the term while typing.
///
/// Returns the next available row (row + 3).
pub fn render_search_bar(out: &mut String, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let margin = " ".repeat(SEARCH_BOX_MARGIN);

    position_cursor(out, row, 1);
    out.push_str(&margin);
    out.push_str(&Theme::fg(&theme.colors.search_bar_border));
    out.push('┌');
    out.push_str(&"─".repeat(inner_width));
    out.push('┐');
    out.push_str(Theme::reset());

    let prefix = format!(" {}: ", search.label);
    let cursor = if search.typing { "█" } else { "" };
    let room = inner_width
        .saturating_sub(prefix.chars().count())
        .saturating_sub(cursor.chars().count());
    let query = search.query.as_str();
    let skip = search.query.char_len().saturating_sub(room);
    let visible: String = query.chars().skip(skip).collect();

    let used = prefix.chars().count() + visible.chars().count() + cursor.chars().count();
    let padding = inner_width.saturating_sub(used);

    position_cursor(out, row + 1, 1);
    out.push_str(&margin);
    out.push_str(&Theme::fg(&theme.colors.search_bar_border));
    out.push('│');
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&prefix);
    out.push_str(&visible);
    out.push_str(cursor);
    out.push_str(&" ".repeat(padding));
    out.push_str(&Theme::fg(&theme.colors.search_bar_border));
    out.push('│');
    out.push_str(Theme::reset());

    position_cursor(out, row + 2, 1);
    out.push_str(&margin);
    out.push_str(&Theme::fg(&theme.colors.search_bar_border));
    out.push('└');
    out.push_str(&"─".repeat(inner_width));
    out.push('┘');
    out.push_str(Theme::reset());

    row + 3
}
