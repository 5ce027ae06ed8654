//! Composable UI component renderers.
//!
//! Each component writes one part of the frame into the shared buffer and
//! returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`status`]: Status message and load trigger
//! - [`search`]: Search input box
//! - [`card_list`]: User cards
//! - [`empty`]: Placeholder in place of cards
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Status line]
//! [Border]
//! [Search Bar - 3 lines, search mode only]
//! [Cards or placeholder]
//! [Border]
//! [Footer]
//! ```

mod card_list;
mod empty;
mod footer;
mod header;
mod search;
mod status;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BodyView, UIViewModel};

use card_list::render_cards;
use empty::render_placeholder;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use status::render_status_line;

/// Renders a horizontal border line at `row`.
///
/// Returns the next available row.
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders the full layout for `vm` into `out`.
///
/// Reserves 6 rows of chrome (blank, header, status, 2 borders, footer), plus
/// 3 for the search bar in search mode.
pub fn render_layout(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(out, current_row, &vm.header, theme, cols);
    current_row = render_status_line(out, current_row, &vm.status, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(out, current_row, search, theme, cols);
    }

    match &vm.body {
        BodyView::Placeholder(empty) => {
            render_placeholder(out, current_row, empty, theme, cols);
        }
        BodyView::Cards(cards) => {
            render_cards(out, current_row, cards, theme, cols);
        }
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(out, border_row, &theme.colors.border, cols);
    render_footer(out, footer_start, &vm.footer, theme, cols);
}
