//! Input mode state types.
//!
//! The plugin operates in one of two input modes:
//! - **Normal**: navigation and commands (`r` load, `/` search, `q` close)
//! - **Search**: the search bar owns the keyboard, with typing or result
//!   navigation focus
//!
//! # Example
//!
//! ```rust
//! use userdeck::app::modes::{InputMode, SearchFocus};
//!
//! let input_mode = InputMode::Search(SearchFocus::Typing);
//! assert!(input_mode.is_search());
//! ```

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Keystrokes edit the search term; every change re-filters.
    Typing,

    /// Keystrokes move between the filtered cards.
    Navigating,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and whether the search bar is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    Normal,

    /// Search bar is visible, with a [`SearchFocus`].
    Search(SearchFocus),
}

impl InputMode {
    /// Returns `true` in either search focus.
    #[must_use]
    pub const fn is_search(self) -> bool {
        matches!(self, Self::Search(_))
    }
}
