//! Card descriptors for the user list.
//!
//! [`render_users`] turns user records into the list content shown in the
//! pane. Every textual field becomes [`PlainText`] here, so nothing
//! downstream ever handles raw remote strings. The avatar URL only survives
//! as a validated hyperlink target.

use crate::domain::UserRecord;
use crate::ui::text::PlainText;
use url::Url;

/// Avatar reference of a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    /// Image URL, present only if it is a well-formed `http`/`https` URL.
    pub src: Option<String>,
    /// Alternative text, the user's display name.
    pub alt: PlainText,
}

impl Avatar {
    fn new(src: &str, alt: PlainText) -> Self {
        let src = match Url::parse(src) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Some(String::from(url)),
            Ok(url) => {
                tracing::debug!(scheme = %url.scheme(), "dropping avatar with unsupported scheme");
                None
            }
            Err(e) => {
                tracing::debug!(error = %e, "dropping unparseable avatar url");
                None
            }
        };
        Self { src, alt }
    }

    /// Two-letter badge shown in place of the image.
    ///
    /// Built from the first character of the first and last word of the alt
    /// text, upper-cased.
    #[must_use]
    pub fn initials(&self) -> String {
        let mut words = self.alt.as_str().split_whitespace();
        let first = words.next().and_then(|w| w.chars().next());
        let last = words.last().and_then(|w| w.chars().next());

        first
            .into_iter()
            .chain(last)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// Display-safe descriptor of one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserCard {
    pub avatar: Avatar,
    /// `"{first} {last}"`.
    pub name: PlainText,
    pub email: PlainText,
    /// `"{city}, {country}"`.
    pub location: PlainText,
}

impl UserCard {
    /// Builds the card for one record.
    #[must_use]
    pub fn from_record(record: &UserRecord) -> Self {
        let name = PlainText::new(&record.display_name());
        Self {
            avatar: Avatar::new(&record.picture.medium, name.clone()),
            name,
            email: PlainText::new(&record.email),
            location: PlainText::new(&record.location_line()),
        }
    }
}

/// Content of the list area.
///
/// Each variant replaces the previous content completely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListView {
    /// Nothing has been loaded yet.
    #[default]
    Idle,
    /// A load is in flight.
    Loading,
    /// A load or filter produced no records.
    Empty,
    /// The last load failed.
    Failed,
    /// One card per record, in input order.
    Cards(Vec<UserCard>),
}

impl ListView {
    /// Number of cards shown.
    #[must_use]
    pub fn card_count(&self) -> usize {
        match self {
            Self::Cards(cards) => cards.len(),
            _ => 0,
        }
    }
}

/// Converts records into list content.
///
/// Empty input yields [`ListView::Empty`]; otherwise one card per record in
/// input order, without sorting.
pub fn render_users<'a, I>(records: I) -> ListView
where
    I: IntoIterator<Item = &'a UserRecord>,
{
    let cards: Vec<UserCard> = records.into_iter().map(UserCard::from_record).collect();

    tracing::debug!(card_count = cards.len(), "user cards rendered");

    if cards.is_empty() {
        ListView::Empty
    } else {
        ListView::Cards(cards)
    }
}
