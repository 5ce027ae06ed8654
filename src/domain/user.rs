//! User record model.
//!
//! A [`UserRecord`] is one entry of the directory service's `results` array.
//! Records are immutable once received: they are displayed or excluded from a
//! filtered view, never edited. Fields the plugin does not display are ignored
//! during deserialization.

use serde::{Deserialize, Serialize};

/// Given and family name of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub first: String,
    pub last: String,
}

/// Avatar image references. Only the medium size is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Picture {
    pub medium: String,
}

/// City and country of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub country: String,
}

/// One user as returned by the directory service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: Name,
    pub email: String,
    pub picture: Picture,
    pub location: Location,
}

impl UserRecord {
    /// Returns the display name, `"{first} {last}"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use userdeck::domain::{Location, Name, Picture, UserRecord};
    ///
    /// let user = UserRecord {
    ///     name: Name { first: "Ada".into(), last: "Lovelace".into() },
    ///     email: "ada@example.com".into(),
    ///     picture: Picture { medium: "https://example.com/ada.jpg".into() },
    ///     location: Location { city: "London".into(), country: "United Kingdom".into() },
    /// };
    /// assert_eq!(user.display_name(), "Ada Lovelace");
    /// ```
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
    }

    /// Returns the location line, `"{city}, {country}"`.
    #[must_use]
    pub fn location_line(&self) -> String {
        format!("{}, {}", self.location.city, self.location.country)
    }
}
