//! User-visible wording.
//!
//! Every string the pane shows comes from [`Locale`], so the rest of the crate
//! deals in states ([`Status`], [`ListView`], [`InputMode`]) and never in text.

use crate::app::{InputMode, SearchFocus, Status};
use crate::ui::cards::ListView;
use crate::ui::viewmodel::EmptyState;

/// Supported UI languages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    De,
}

impl Locale {
    /// Parses a language code such as `en`, `de` or `de-AT`.
    ///
    /// Returns `None` for unsupported languages.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_ascii_lowercase();
        let primary = code.split(['-', '_']).next().unwrap_or_default();
        match primary {
            "en" | "english" => Some(Self::En),
            "de" | "german" | "deutsch" => Some(Self::De),
            _ => None,
        }
    }

    /// Header title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::En => "User Directory",
            Self::De => "User Verzeichnis",
        }
    }

    /// Label in front of the search term.
    #[must_use]
    pub const fn search_label(self) -> &'static str {
        match self {
            Self::En => "Search",
            Self::De => "Suche",
        }
    }

    /// Status line text.
    ///
    /// # Example
    ///
    /// ```
    /// use userdeck::app::Status;
    /// use userdeck::ui::Locale;
    ///
    /// assert_eq!(Locale::En.status(Status::Filtered { shown: 3, total: 10 }), "3 of 10 users");
    /// assert_eq!(Locale::De.status(Status::Loaded { count: 10 }), "10 User geladen");
    /// ```
    #[must_use]
    pub fn status(self, status: Status) -> String {
        match (self, status) {
            (Self::En, Status::Idle) => "No users loaded".to_string(),
            (Self::En, Status::Loading) => "Loading…".to_string(),
            (Self::En, Status::Loaded { count }) => format!("{count} users loaded"),
            (Self::En, Status::Showing { count }) => format!("{count} users shown"),
            (Self::En, Status::Filtered { shown, total }) => format!("{shown} of {total} users"),
            (Self::En, Status::Failed) => "Loading failed".to_string(),
            (Self::En, Status::NoWebAccess) => "Web access not granted".to_string(),

            (Self::De, Status::Idle) => "Noch keine User geladen".to_string(),
            (Self::De, Status::Loading) => "Lade User…".to_string(),
            (Self::De, Status::Loaded { count }) => format!("{count} User geladen"),
            (Self::De, Status::Showing { count }) => format!("{count} User angezeigt"),
            (Self::De, Status::Filtered { shown, total }) => format!("{shown} von {total} User"),
            (Self::De, Status::Failed) => "Fehler beim Laden!".to_string(),
            (Self::De, Status::NoWebAccess) => "Kein Webzugriff erlaubt".to_string(),
        }
    }

    /// Placeholder shown instead of cards.
    ///
    /// A card list never needs a placeholder; it maps to the empty-result
    /// wording so the function stays total.
    #[must_use]
    pub fn placeholder(self, list: &ListView) -> EmptyState {
        let (message, subtitle) = match (self, list) {
            (Self::En, ListView::Idle) => ("Press r to load users", "Fetches 10 random users"),
            (Self::En, ListView::Loading) => ("Loading...", ""),
            (Self::En, ListView::Empty | ListView::Cards(_)) => {
                ("No users found.", "Try a different name")
            }
            (Self::En, ListView::Failed) => ("Loading failed. Please try again.", "Press r to retry"),

            (Self::De, ListView::Idle) => ("Drücke r, um User zu laden", "Lädt 10 zufällige User"),
            (Self::De, ListView::Loading) => ("Laden...", ""),
            (Self::De, ListView::Empty | ListView::Cards(_)) => {
                ("Keine User gefunden.", "Anderen Namen versuchen")
            }
            (Self::De, ListView::Failed) => (
                "Fehler beim Laden. Bitte erneut versuchen.",
                "r drücken zum Wiederholen",
            ),
        };

        EmptyState {
            message: message.to_string(),
            subtitle: subtitle.to_string(),
        }
    }

    /// Label of the load trigger, depending on whether it is enabled.
    #[must_use]
    pub const fn trigger_label(self, enabled: bool) -> &'static str {
        match (self, enabled) {
            (Self::En, true) => "[ r: Load users ]",
            (Self::En, false) => "[ loading… ]",
            (Self::De, true) => "[ r: User laden ]",
            (Self::De, false) => "[ lädt… ]",
        }
    }

    /// Keybinding hints for the footer.
    #[must_use]
    pub const fn keybindings(self, mode: InputMode) -> &'static str {
        match (self, mode) {
            (Self::En, InputMode::Normal) => {
                "r: load  /: search  j/k or Ctrl+n/p: navigate  q: quit"
            }
            (Self::En, InputMode::Search(SearchFocus::Typing)) => {
                "ESC: exit search  Enter: load/results  Ctrl+n/p: navigate  Type to filter"
            }
            (Self::En, InputMode::Search(SearchFocus::Navigating)) => {
                "ESC: exit search  /: edit query  j/k or Ctrl+n/p: navigate"
            }
            (Self::De, InputMode::Normal) => {
                "r: laden  /: suchen  j/k oder Ctrl+n/p: navigieren  q: beenden"
            }
            (Self::De, InputMode::Search(SearchFocus::Typing)) => {
                "ESC: Suche beenden  Enter: laden/Ergebnisse  Ctrl+n/p: navigieren  Tippen zum Filtern"
            }
            (Self::De, InputMode::Search(SearchFocus::Navigating)) => {
                "ESC: Suche beenden  /: Suchbegriff  j/k oder Ctrl+n/p: navigieren"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_language_codes() {
        assert_eq!(Locale::from_code("en"), Some(Locale::En));
        assert_eq!(Locale::from_code(" DE "), Some(Locale::De));
        assert_eq!(Locale::from_code("de-AT"), Some(Locale::De));
        assert_eq!(Locale::from_code("en_GB"), Some(Locale::En));
        assert_eq!(Locale::from_code("fr"), None);
    }

    #[test]
    fn english_status_texts() {
        let en = Locale::En;
        assert_eq!(en.status(Status::Loading), "Loading…");
        assert_eq!(en.status(Status::Loaded { count: 10 }), "10 users loaded");
        assert_eq!(en.status(Status::Showing { count: 10 }), "10 users shown");
        assert_eq!(en.status(Status::Failed), "Loading failed");
    }

    #[test]
    fn german_matches_the_original_wording() {
        let de = Locale::De;
        assert_eq!(de.status(Status::Showing { count: 4 }), "4 User angezeigt");
        assert_eq!(de.status(Status::Filtered { shown: 3, total: 10 }), "3 von 10 User");
        assert_eq!(de.placeholder(&ListView::Empty).message, "Keine User gefunden.");
        assert_eq!(
            de.placeholder(&ListView::Failed).message,
            "Fehler beim Laden. Bitte erneut versuchen."
        );
    }
}
