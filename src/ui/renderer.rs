//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: `AppState` → `UIViewModel`
//! 2. **Component Rendering**: `UIViewModel` → one ANSI frame
//!
//! The frame is built as a `String` and printed in one go, which keeps the
//! layout testable without a terminal.

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    print!("{}", render_frame(state, rows, cols));
}

/// Builds the complete frame for a pane of `rows` x `cols`.
///
/// # Example
///
/// ```rust
/// use userdeck::app::AppState;
/// use userdeck::ui::{render_frame, Locale, Theme};
///
/// let state = AppState::new("https://randomuser.me/api/".into(), Theme::default(), Locale::En);
/// let frame = render_frame(&state, 24, 80);
/// assert!(frame.contains("User Directory"));
/// assert!(frame.contains("No users loaded"));
/// ```
#[must_use]
pub fn render_frame(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);

    let mut out = String::new();
    components::render_layout(&mut out, &viewmodel, &state.theme, cols, rows);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handle_event, Action, Event};
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

    fn load(state: &mut AppState, body: &str) {
        let (_, actions) = handle_event(state, &Event::LoadUsers).unwrap();
        let Some(Action::FetchUsers(request)) = actions.into_iter().next() else {
            panic!("expected fetch");
        };
        state.complete_load(request.load_id, 200, body.as_bytes());
    }

    #[test]
    fn idle_frame_shows_placeholder_and_trigger() {
        let frame = render_frame(&state(), 24, 80);
        assert!(frame.contains("Press r to load users"));
        assert!(frame.contains("[ r: Load users ]"));
    }

    #[test]
    fn loading_frame_shows_disabled_trigger() {
        let mut state = state();
        handle_event(&mut state, &Event::LoadUsers).unwrap();

        let frame = render_frame(&state, 24, 80);
        assert!(frame.contains("Loading..."));
        assert!(frame.contains("[ loading… ]"));
    }

    #[test]
    fn cards_show_name_email_and_location() {
        let mut state = state();
        load(
            &mut state,
            r#"{"results":[{"name":{"first":"Ada","last":"Byron"},"email":"ada@example.com",
                "picture":{"medium":"https://example.com/ada.jpg"},
                "location":{"city":"London","country":"United Kingdom"}}]}"#,
        );

        let frame = render_frame(&state, 24, 80);
        assert!(frame.contains("Ada Byron"));
        assert!(frame.contains("ada@example.com"));
        assert!(frame.contains("London, United Kingdom"));
        assert!(frame.contains("\u{1b}]8;;https://example.com/ada.jpg\u{1b}\\[AB]"));
        assert!(frame.contains("1 users loaded"));
    }

    #[test]
    fn markup_in_names_is_shown_verbatim() {
        let mut state = state();
        load(
            &mut state,
            r#"{"results":[{"name":{"first":"<img src=x>","last":"Doe"},"email":"e@example.com",
                "picture":{"medium":"https://example.com/a.jpg"},
                "location":{"city":"A","country":"B"}}]}"#,
        );

        let frame = render_frame(&state, 24, 80);
        assert!(frame.contains("<img src=x> Doe"));
    }

    #[test]
    fn narrow_pane_does_not_panic() {
        let mut state = state();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        let frame = render_frame(&state, 3, 4);
        assert!(!frame.is_empty());
    }
}
