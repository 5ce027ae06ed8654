//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point for everything that happens to
//! the plugin: key presses mapped by the shim, the permission result and web
//! responses from the host. It mutates [`AppState`] and returns whether the
//! pane needs a re-render together with the actions the shim must execute.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`
//! - **Loading**: `LoadUsers`, `Submit`, `WebResponse`
//! - **Search**: `SearchMode`, `FocusSearchBar`, `ExitSearch`, `Char`, `Backspace`, `Escape`
//! - **System**: `PermissionsResult`, `CloseFocus`
//!
//! # Example
//!
//! ```rust
//! use userdeck::app::{handle_event, AppState, Event};
//! use userdeck::ui::{Locale, Theme};
//!
//! let mut state = AppState::new("https://randomuser.me/api/".into(), Theme::default(), Locale::En);
//! let (render, actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(actions.is_empty());
//! # Ok::<(), userdeck::UserdeckError>(())
//! ```

use super::modes::{InputMode, SearchFocus};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::fetcher::FetchRequest;
use std::collections::BTreeMap;

/// Events triggered by user input or the Zellij host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves selection down by one card (wraps to top).
    KeyDown,
    /// Moves selection up by one card (wraps to bottom).
    KeyUp,
    /// Hides the plugin pane.
    CloseFocus,
    /// Activates the load trigger. Ignored while the trigger is disabled.
    LoadUsers,
    /// Enter key.
    ///
    /// Loads a batch while nothing is loaded; otherwise moves focus from the
    /// search term to the results.
    Submit,
    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search term again (from navigating focus).
    FocusSearchBar,
    /// Exits search mode and clears the search term.
    ExitSearch,
    /// Appends a character to the search term.
    Char(char),
    /// Removes the last character from the search term.
    Backspace,
    /// Clears the search term and returns to normal mode.
    Escape,

    /// Reports whether the host granted web access.
    PermissionsResult {
        granted: bool,
    },

    /// Response of a web request issued for [`Action::FetchUsers`].
    WebResponse {
        /// HTTP status reported by the host.
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
        /// Context map echoed back from the request.
        context: BTreeMap<String, String>,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// The boolean is `true` when the pane must be re-rendered.
///
/// # Errors
///
/// Returns an error if a load cannot be started because the configured
/// endpoint is invalid. The state already shows the failure in that case.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?EventKind(event)).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::LoadUsers => start_load(state),
        Event::Submit => {
            if state.store.is_empty() {
                return start_load(state);
            }

            match state.input_mode {
                InputMode::Search(SearchFocus::Typing) if state.search_query.is_empty() => {
                    state.input_mode = InputMode::Normal;
                    state.apply_filter();
                    Ok((true, vec![]))
                }
                InputMode::Search(SearchFocus::Typing) => {
                    state.input_mode = InputMode::Search(SearchFocus::Navigating);
                    Ok((true, vec![]))
                }
                _ => Ok((false, vec![])),
            }
        }
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.search_query = String::new();
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::ExitSearch | Event::Escape => {
            tracing::debug!(query_len = state.search_query.len(), "exiting search mode");
            let was_search = state.input_mode.is_search();
            state.input_mode = InputMode::Normal;
            if state.search_query.is_empty() {
                return Ok((was_search, vec![]));
            }

            state.search_query = String::new();
            state.apply_filter();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !state.input_mode.is_search() {
                return Ok((false, vec![]));
            }

            state.search_query.push(*c);
            tracing::trace!(char = %c, "search term updated");
            state.apply_filter();

            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !state.input_mode.is_search() {
                return Ok((false, vec![]));
            }

            state.search_query.pop();
            state.apply_filter();

            Ok((true, vec![]))
        }
        Event::PermissionsResult { granted } => {
            tracing::info!(granted = granted, "web access permission result");
            state.web_access = *granted;
            Ok((true, vec![]))
        }
        Event::WebResponse { status, body, context } => {
            let Some(load_id) = FetchRequest::load_id_from_context(context) else {
                tracing::debug!("ignoring web response without a load id");
                return Ok((false, vec![]));
            };

            Ok((state.complete_load(load_id, *status, body), vec![]))
        }
    }
}

fn start_load(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    let status_before = state.status;
    match state.begin_load()? {
        Some(action) => Ok((true, vec![action])),
        None => Ok((state.status != status_before, vec![])),
    }
}

/// Span field for events that leaves out response bodies.
struct EventKind<'a>(&'a Event);

impl std::fmt::Debug for EventKind<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Event::WebResponse { status, body, .. } => f
                .debug_struct("WebResponse")
                .field("status", status)
                .field("body_len", &body.len())
                .finish(),
            other => std::fmt::Debug::fmt(other, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Status;
    use crate::ui::{Locale, Theme};

    fn state() -> AppState {
        let mut state = AppState::new(
            crate::fetcher::DEFAULT_ENDPOINT.to_string(),
            Theme::default(),
            Locale::En,
        );
        state.web_access = true;
        state
    }

    fn response(load_id: u64, status: u16, body: &str) -> Event {
        Event::WebResponse {
            status,
            body: body.as_bytes().to_vec(),
            context: BTreeMap::from([
                ("request".to_string(), "users".to_string()),
                ("load_id".to_string(), load_id.to_string()),
            ]),
        }
    }

    const ONE_USER: &str = r#"{"results":[{
        "name":{"first":"Mia","last":"Wong"},
        "email":"mia@example.com",
        "picture":{"medium":"https://example.com/m.jpg"},
        "location":{"city":"Oslo","country":"Norway"}
    }]}"#;

    #[test]
    fn submit_loads_only_while_nothing_is_loaded() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        let [Action::FetchUsers(request)] = actions.as_slice() else {
            panic!("expected one fetch, got {actions:?}");
        };

        handle_event(&mut state, &response(request.load_id, 200, ONE_USER)).unwrap();
        assert_eq!(state.store.len(), 1);

        let (_, actions) = handle_event(&mut state, &Event::Submit).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn submit_moves_focus_to_results() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::LoadUsers).unwrap();
        let Action::FetchUsers(request) = &actions[0] else {
            panic!("expected fetch");
        };
        handle_event(&mut state, &response(request.load_id, 200, ONE_USER)).unwrap();

        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('m')).unwrap();
        handle_event(&mut state, &Event::Submit).unwrap();
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));

        handle_event(&mut state, &Event::Escape).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.search_query, "");
        assert_eq!(state.status, Status::Showing { count: 1 });
    }

    #[test]
    fn escape_keeps_loading_state_while_reload_in_flight() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::LoadUsers).unwrap();
        let [Action::FetchUsers(request)] = actions.as_slice() else {
            panic!("expected one fetch, got {actions:?}");
        };
        handle_event(&mut state, &response(request.load_id, 200, ONE_USER)).unwrap();

        handle_event(&mut state, &Event::LoadUsers).unwrap();
        let (render, _) = handle_event(&mut state, &Event::Escape).unwrap();

        assert!(!render);
        assert_eq!(state.status, Status::Loading);
        assert_eq!(state.list, crate::ui::ListView::Loading);
        assert!(!state.trigger_enabled());
    }

    #[test]
    fn escape_keeps_failure_after_failed_reload() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::LoadUsers).unwrap();
        let [Action::FetchUsers(first)] = actions.as_slice() else {
            panic!("expected one fetch, got {actions:?}");
        };
        handle_event(&mut state, &response(first.load_id, 200, ONE_USER)).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::LoadUsers).unwrap();
        let [Action::FetchUsers(second)] = actions.as_slice() else {
            panic!("expected one fetch, got {actions:?}");
        };
        handle_event(&mut state, &response(second.load_id, 500, "oops")).unwrap();

        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::ExitSearch).unwrap();
        handle_event(&mut state, &Event::Escape).unwrap();

        assert_eq!(state.input_mode, InputMode::Normal);
        assert_eq!(state.status, Status::Failed);
        assert_eq!(state.list, crate::ui::ListView::Failed);
    }

    #[test]
    fn chars_ignored_outside_search_mode() {
        let mut state = state();
        let (render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert_eq!(state.search_query, "");
    }

    #[test]
    fn permission_result_toggles_web_access() {
        let mut state = state();
        handle_event(&mut state, &Event::PermissionsResult { granted: false }).unwrap();
        assert!(!state.web_access);

        let (render, actions) = handle_event(&mut state, &Event::LoadUsers).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.status, Status::NoWebAccess);
    }

    #[test]
    fn foreign_responses_are_ignored() {
        let mut state = state();
        handle_event(&mut state, &Event::LoadUsers).unwrap();

        let event = Event::WebResponse {
            status: 200,
            body: ONE_USER.as_bytes().to_vec(),
            context: BTreeMap::new(),
        };
        let (render, _) = handle_event(&mut state, &event).unwrap();
        assert!(!render);
        assert!(!state.trigger_enabled());
    }

    #[test]
    fn event_kind_hides_body() {
        let rendered = format!("{:?}", EventKind(&response(1, 200, ONE_USER)));
        assert!(rendered.contains("body_len"));
        assert!(!rendered.contains("Mia"));
    }
}
