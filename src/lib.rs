//! Userdeck: a Zellij plugin showing a directory of users as filterable cards.
//!
//! Userdeck fetches a batch of ten random users from a public directory
//! service, shows each as a card (avatar badge, name, email, city and country)
//! and narrows the cards by name as you type.
//!
//! - One batch per load, replacing the previous one
//! - Case-insensitive substring filtering on `"{first} {last}"`
//! - At most one load in flight; the trigger is disabled meanwhile
//! - Remote text is always shown as literal characters
//! - English and German wording
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, load gate, store, filter         │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                      │
//! ┌───────────────────┐              ┌───────────────────┐
//! │ Fetcher (fetcher/)│              │ UI Layer (ui/)    │
//! │ - Request URL     │              │ - Cards, locale   │
//! │ - Payload decode  │              │ - Rendering       │
//! └───────────────────┘              └───────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/): user record, errors              │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/userdeck.wasm" {
//!         endpoint "https://randomuser.me/api/"
//!         theme "catppuccin-mocha"
//!         language "de"
//!         avatar_links "true"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use userdeck::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! state.web_access = true;
//!
//! let (_render, actions) = handle_event(&mut state, &Event::LoadUsers)?;
//! assert_eq!(actions.len(), 1);
//!
//! // A second press while the request is in flight does nothing.
//! let (_render, actions) = handle_event(&mut state, &Event::LoadUsers)?;
//! assert!(actions.is_empty());
//! # Ok::<(), userdeck::UserdeckError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod fetcher;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus};
pub use domain::{Result, UserRecord, UserdeckError};
pub use ui::{Locale, Theme};

use std::collections::BTreeMap;
use url::Url;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory service endpoint. `results=10` is appended per request.
    ///
    /// Default: [`fetcher::DEFAULT_ENDPOINT`]
    pub endpoint: String,

    /// Built-in theme name.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. Takes precedence over `theme_name`.
    pub theme_file: Option<String>,

    /// Language of all user-visible text. Default: English.
    pub language: Locale,

    /// Whether avatar badges link to the avatar image. Default: `true`
    pub avatar_links: bool,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: fetcher::DEFAULT_ENDPOINT.to_string(),
            theme_name: None,
            theme_file: None,
            language: Locale::default(),
            avatar_links: true,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unknown keys are ignored. Values that do not parse fall back to their
    /// defaults:
    ///
    /// - `endpoint`: must be an absolute `http`/`https` URL
    /// - `language`: `en` or `de` (region suffixes like `de-AT` are accepted)
    /// - `avatar_links`: `true`/`false`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use userdeck::{Config, Locale};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("language".to_string(), "de".to_string());
    /// map.insert("endpoint".to_string(), "ftp://example.com".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.language, Locale::De);
    /// assert_eq!(config.endpoint, "https://randomuser.me/api/");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let endpoint = config
            .get("endpoint")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .and_then(|s| match Url::parse(s) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => Some(s.to_string()),
                _ => {
                    tracing::debug!(endpoint = %s, "invalid endpoint, using default");
                    None
                }
            })
            .unwrap_or(defaults.endpoint);

        let language = config
            .get("language")
            .and_then(|code| {
                let locale = Locale::from_code(code);
                if locale.is_none() {
                    tracing::debug!(language = %code, "unsupported language, using default");
                }
                locale
            })
            .unwrap_or(defaults.language);

        let avatar_links = config
            .get("avatar_links")
            .and_then(|s| s.trim().parse::<bool>().ok())
            .unwrap_or(defaults.avatar_links);

        Self {
            endpoint,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            language,
            avatar_links,
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Creates the application state for `config`.
///
/// The theme comes from `theme_file`, then `theme_name`, then the default;
/// a theme that fails to load falls back to the default.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing userdeck plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    let mut state = AppState::new(config.endpoint.clone(), theme, config.language);
    state.avatar_links = config.avatar_links;
    state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config.endpoint, fetcher::DEFAULT_ENDPOINT);
        assert_eq!(config.language, Locale::En);
        assert!(config.avatar_links);
        assert_eq!(config.trace_level, None);
    }

    #[test]
    fn parses_all_keys() {
        let config = Config::from_zellij(&map(&[
            ("endpoint", "http://localhost:8080/api/"),
            ("theme", "catppuccin-latte"),
            ("language", "de-AT"),
            ("avatar_links", "false"),
            ("trace_level", "debug"),
        ]));

        assert_eq!(config.endpoint, "http://localhost:8080/api/");
        assert_eq!(config.theme_name.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.language, Locale::De);
        assert!(!config.avatar_links);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
    }

    #[test]
    fn bad_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("endpoint", "not a url"),
            ("language", "fr"),
            ("avatar_links", "maybe"),
        ]));
        assert_eq!(config.endpoint, fetcher::DEFAULT_ENDPOINT);
        assert_eq!(config.language, Locale::En);
        assert!(config.avatar_links);
    }

    #[test]
    fn initialize_falls_back_to_default_theme() {
        let config = Config {
            theme_name: Some("no-such-theme".into()),
            avatar_links: false,
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.theme.name, Theme::default().name);
        assert!(!state.avatar_links);
        assert!(state.trigger_enabled());
    }
}
