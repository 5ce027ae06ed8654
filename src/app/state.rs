//! Application state management and view model computation.
//!
//! [`AppState`] is the single owner of everything the pane shows: the
//! directory store, the list content derived from it, the search term, the
//! status line and the load gate. The store is written only when a load
//! completes successfully. Filtering reads it and replaces the list content.
//!
//! # Example
//!
//! ```rust
//! use userdeck::app::AppState;
//! use userdeck::ui::{Locale, Theme};
//!
//! let state = AppState::new("https://randomuser.me/api/".into(), Theme::default(), Locale::En);
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.status.trigger.enabled);
//! ```

use super::filter;
use super::load::LoadGate;
use super::modes::{InputMode, SearchFocus};
use super::status::Status;
use super::store::DirectoryStore;
use super::Action;
use crate::domain::Result;
use crate::fetcher::{decode_response, FetchRequest};
use crate::ui::cards::{render_users, ListView, UserCard};
use crate::ui::text::{match_ranges, PlainText};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BodyView, CardItem, FooterInfo, HeaderInfo, SearchBarInfo, StatusInfo, TriggerInfo,
    UIViewModel, CARD_HEIGHT,
};
use crate::ui::Locale;

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// Most recently loaded batch.
    pub store: DirectoryStore,

    /// What the list area currently shows. Replaced as a whole.
    pub list: ListView,

    /// Zero-based index of the selected card.
    pub selected_index: usize,

    /// Current input handling mode.
    pub input_mode: InputMode,

    /// Current search term, untrimmed as typed.
    pub search_query: String,

    /// What the status line reports.
    pub status: Status,

    /// In-flight guard for loads; the trigger is disabled while it is busy.
    pub load_gate: LoadGate,

    /// Whether the host granted web access.
    pub web_access: bool,

    /// Directory service endpoint, without the batch size parameter.
    pub endpoint: String,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Language of all user-visible text.
    pub locale: Locale,

    /// Whether avatar badges link to the avatar image.
    pub avatar_links: bool,
}

impl AppState {
    /// Creates an empty state: nothing loaded, normal mode, trigger enabled.
    ///
    /// Web access is assumed missing until the host reports the permission
    /// result.
    #[must_use]
    pub fn new(endpoint: String, theme: Theme, locale: Locale) -> Self {
        Self {
            store: DirectoryStore::default(),
            list: ListView::Idle,
            selected_index: 0,
            input_mode: InputMode::Normal,
            search_query: String::new(),
            status: Status::Idle,
            load_gate: LoadGate::default(),
            web_access: false,
            endpoint,
            theme,
            locale,
            avatar_links: true,
        }
    }

    /// Returns `true` if the load trigger accepts input.
    #[must_use]
    pub const fn trigger_enabled(&self) -> bool {
        !self.load_gate.is_busy()
    }

    /// Moves selection down by one card, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        let count = self.list.card_count();
        if count == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % count;
    }

    /// Moves selection up by one card, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        let count = self.list.card_count();
        if count == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = count - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the selected card, if cards are shown.
    #[must_use]
    pub fn selected_card(&self) -> Option<&UserCard> {
        match &self.list {
            ListView::Cards(cards) => cards.get(self.selected_index),
            _ => None,
        }
    }

    /// Starts a load if the trigger is enabled.
    ///
    /// Shows the loading state and returns the request for the plugin shim
    /// to issue. Returns `Ok(None)` when a load is already in flight (the
    /// trigger is disabled) or web access has not been granted.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured endpoint cannot form a request URL.
    /// The failure state is shown before returning and the gate stays free.
    pub fn begin_load(&mut self) -> Result<Option<Action>> {
        if self.load_gate.is_busy() {
            tracing::debug!("load already in flight, trigger disabled");
            return Ok(None);
        }
        if !self.web_access {
            tracing::warn!("load requested without web access permission");
            self.status = Status::NoWebAccess;
            return Ok(None);
        }

        let request = match FetchRequest::new(&self.endpoint, self.load_gate.next_id()) {
            Ok(request) => request,
            Err(e) => {
                self.show_failure();
                return Err(e);
            }
        };

        let Some(load_id) = self.load_gate.acquire() else {
            return Ok(None);
        };
        debug_assert_eq!(load_id, request.load_id);

        tracing::debug!(load_id = load_id, url = %request.url, "load started");
        self.status = Status::Loading;
        self.list = ListView::Loading;
        self.selected_index = 0;

        Ok(Some(Action::FetchUsers(request)))
    }

    /// Finishes the load `load_id` with the host's response.
    ///
    /// The gate is released before the response is inspected, so the trigger
    /// is enabled again whatever the outcome. On success the store is
    /// replaced and all records are shown; on failure the store is kept and
    /// the failure placeholder is shown.
    ///
    /// Returns `false` without touching the state if `load_id` is not the
    /// load in flight.
    #[tracing::instrument(level = "info", skip(self, body), fields(body_len = body.len()))]
    pub fn complete_load(&mut self, load_id: u64, status: u16, body: &[u8]) -> bool {
        let Some(ticket) = self.load_gate.release(load_id) else {
            tracing::debug!(load_id = load_id, "ignoring response for a load not in flight");
            return false;
        };
        drop(ticket);

        match decode_response(status, body) {
            Ok(records) => {
                self.store.replace(records);
                self.list = render_users(self.store.records());
                self.status = Status::Loaded {
                    count: self.store.len(),
                };
                self.selected_index = 0;
                tracing::info!(load_id = load_id, count = self.store.len(), "users loaded");
            }
            Err(e) => {
                tracing::error!(load_id = load_id, error = %e, "loading users failed");
                self.show_failure();
            }
        }
        true
    }

    /// Re-derives the list from the store and the current search term.
    ///
    /// Returns `false` and leaves the list untouched while the store is
    /// empty.
    pub fn apply_filter(&mut self) -> bool {
        let _span = tracing::debug_span!(
            "apply_filter",
            total = self.store.len(),
            query_len = self.search_query.len()
        )
        .entered();

        let Some(view) = filter::filter(&self.search_query, self.store.records()) else {
            tracing::debug!("store empty, nothing to filter");
            return false;
        };

        let total = self.store.len();
        let shown = view.len();
        self.list = render_users(view);
        self.status = if self.search_query.trim().is_empty() {
            Status::Showing { count: total }
        } else {
            Status::Filtered { shown, total }
        };

        self.selected_index = self.selected_index.min(shown.saturating_sub(1));

        tracing::debug!(shown = shown, "filter applied");
        true
    }

    fn show_failure(&mut self) {
        self.status = Status::Failed;
        self.list = ListView::Failed;
        self.selected_index = 0;
    }

    /// Computes a renderable view model for a pane of `rows` x `cols`.
    ///
    /// Cards are windowed around the selected card when they do not all fit.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, _cols: usize) -> UIViewModel {
        UIViewModel {
            header: HeaderInfo {
                title: format!(" {} ", self.locale.title()),
            },
            status: self.compute_status(),
            search_bar: self.compute_search_bar(),
            body: self.compute_body(rows),
            footer: FooterInfo {
                keybindings: self.locale.keybindings(self.input_mode).to_string(),
            },
        }
    }

    fn compute_status(&self) -> StatusInfo {
        let enabled = self.trigger_enabled();
        StatusInfo {
            text: self.locale.status(self.status),
            kind: self.status.kind(),
            trigger: TriggerInfo {
                label: self.locale.trigger_label(enabled).to_string(),
                enabled,
            },
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        match self.input_mode {
            InputMode::Normal => None,
            InputMode::Search(focus) => Some(SearchBarInfo {
                label: self.locale.search_label().to_string(),
                query: PlainText::new(&self.search_query),
                typing: focus == SearchFocus::Typing,
            }),
        }
    }

    fn compute_body(&self, rows: usize) -> BodyView {
        let cards = match &self.list {
            ListView::Cards(cards) => cards,
            other => return BodyView::Placeholder(self.locale.placeholder(other)),
        };

        let per_page = (self.calculate_available_rows(rows) / CARD_HEIGHT).max(1);

        let mut visible_start = self.selected_index.saturating_sub(per_page / 2);
        let visible_end = (visible_start + per_page).min(cards.len());
        if visible_end - visible_start < per_page && cards.len() >= per_page {
            visible_start = visible_end.saturating_sub(per_page);
        }

        let highlight = self.input_mode.is_search() && !self.search_query.trim().is_empty();

        let items = cards[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, card)| CardItem {
                initials: card.avatar.initials(),
                link: if self.avatar_links {
                    card.avatar.src.clone()
                } else {
                    None
                },
                name: card.name.clone(),
                email: card.email.clone(),
                location: card.location.clone(),
                is_selected: visible_start + relative_idx == self.selected_index,
                highlight_ranges: if highlight {
                    match_ranges(card.name.as_str(), &self.search_query)
                } else {
                    vec![]
                },
            })
            .collect();

        BodyView::Cards(items)
    }

    /// Rows left for cards after the header, status line, borders, footer
    /// and, in search mode, the search bar.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(6),
            InputMode::Search(_) => total_rows.saturating_sub(9),
        }
    }
}
