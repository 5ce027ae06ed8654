//! Zellij plugin wrapper and entry point.
//!
//! This is the thin integration layer between the userdeck library and the
//! Zellij plugin system. It maps host events to library events, executes the
//! returned actions through the host API and delegates rendering.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key`, `WebRequestResult` and `PermissionRequestResult`
//! 3. **Permission**: Request `WebAccess`; loads are refused until it is granted
//! 4. **Update**: Map events, delegate to `handle_event`, execute actions
//! 5. **Render**: Call the library renderer
//!
//! # Event Mapping
//!
//! - `Key(..)` → see keybindings below
//! - `WebRequestResult` → `Event::WebResponse { status, body, context }`
//! - `PermissionRequestResult` → `Event::PermissionsResult { granted }`
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`: Move down
//! - `Ctrl+p`: Move up
//! - `Enter`: Load users while none are loaded; otherwise focus results
//!
//! In normal mode:
//! - `r`: Load a new batch of users
//! - `j`/`Down`: Move down
//! - `k`/`Up`: Move up
//! - `/`: Enter search mode
//! - `q`: Close plugin
//!
//! In search mode:
//! - Characters: Edit the search term
//! - `Backspace`: Delete the last character
//! - `Esc`: Exit search and show all users
//! - `/`: Return to the search term

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use userdeck::{handle_event, Action, Config, Event, InputMode, SearchFocus};

register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: userdeck::app::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: userdeck::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        userdeck::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(endpoint = %config.endpoint, language = ?config.language, "parsed configuration");
        self.app = userdeck::initialize(&config);

        tracing::debug!("requesting permissions");
        request_permission(&[PermissionType::WebAccess]);

        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Returns `true` if the plugin UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", otel.name = %format!("plugin_update::{event_name}"), event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                tracing::debug!(status = status, body_len = body.len(), "web request result");
                Event::WebResponse { status, body, context }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(permissions) => {
                Event::PermissionsResult {
                    granted: matches!(permissions, PermissionStatus::Granted),
                }
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    Self::execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                // The state already shows the failure.
                tracing::error!(error = %e, "error handling event");
                true
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        userdeck::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyDown);
        }
        if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
            return Some(Event::KeyUp);
        }

        let typing = self.app.input_mode == InputMode::Search(SearchFocus::Typing);

        Some(match key.bare_key {
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Char('j') if !typing => Event::KeyDown,
            BareKey::Char('k') if !typing => Event::KeyUp,
            BareKey::Esc => match self.app.input_mode {
                InputMode::Search(_) => Event::ExitSearch,
                InputMode::Normal => Event::Escape,
            },
            BareKey::Enter => Event::Submit,
            BareKey::Char('q') if self.app.input_mode == InputMode::Normal => Event::CloseFocus,
            BareKey::Char('r') if self.app.input_mode == InputMode::Normal => Event::LoadUsers,
            BareKey::Char('/') => match self.app.input_mode {
                InputMode::Normal => Event::SearchMode,
                InputMode::Search(_) => Event::FocusSearchBar,
            },
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::FetchUsers(request) => {
                tracing::debug!(url = %request.url, load_id = request.load_id, "issuing web request");
                web_request(
                    &request.url,
                    HttpVerb::Get,
                    BTreeMap::new(),
                    vec![],
                    request.context(),
                );
            }
        }
    }
}
