//! View model types representing renderable UI state.
//!
//! View models are computed from `AppState` by `AppState::compute_viewmodel()`
//! and consumed by the renderer. They hold display-ready data only: every
//! string taken from a user record is already [`PlainText`].

use crate::app::StatusKind;
use crate::ui::text::PlainText;

/// Rows taken by one card: name, email, location and a spacer.
pub const CARD_HEIGHT: usize = 4;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Title bar.
    pub header: HeaderInfo,

    /// Status line with the load trigger.
    pub status: StatusInfo,

    /// Search bar, present in search mode.
    pub search_bar: Option<SearchBarInfo>,

    /// Cards or a placeholder.
    pub body: BodyView,

    /// Keybinding hints.
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

/// Status line display information.
#[derive(Debug, Clone)]
pub struct StatusInfo {
    /// Localized status message.
    pub text: String,
    /// Visual class selecting the status color.
    pub kind: StatusKind,
    /// The load trigger shown at the end of the status line.
    pub trigger: TriggerInfo,
}

/// The load trigger "button".
#[derive(Debug, Clone)]
pub struct TriggerInfo {
    pub label: String,
    /// `false` while a load is in flight.
    pub enabled: bool,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Localized label in front of the query.
    pub label: String,
    /// Current search term.
    pub query: PlainText,
    /// Whether keystrokes currently edit the term.
    pub typing: bool,
}

/// Content of the list area.
#[derive(Debug, Clone)]
pub enum BodyView {
    /// Placeholder message instead of cards.
    Placeholder(EmptyState),
    /// The visible window of cards.
    Cards(Vec<CardItem>),
}

/// Placeholder message display information.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message (e.g., "No users found.").
    pub message: String,

    /// Secondary explanatory text, may be empty.
    pub subtitle: String,
}

/// Display information for one card.
#[derive(Debug, Clone)]
pub struct CardItem {
    /// Avatar badge text.
    pub initials: String,
    /// Hyperlink target of the badge, if links are enabled and the URL is valid.
    pub link: Option<String>,
    pub name: PlainText,
    pub email: PlainText,
    pub location: PlainText,
    /// Whether this card is currently selected.
    pub is_selected: bool,
    /// Character ranges of `name` matching the search term.
    pub highlight_ranges: Vec<(usize, usize)>,
}
