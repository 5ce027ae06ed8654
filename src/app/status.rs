//! Status line model.
//!
//! [`Status`] records what the status line reports; the wording lives in
//! [`Locale`](crate::ui::Locale) so the same state can be shown in every
//! supported language.

/// What the status line currently reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Status {
    /// Nothing has been loaded yet.
    #[default]
    Idle,
    /// A load is in flight.
    Loading,
    /// A load succeeded with `count` records.
    Loaded { count: usize },
    /// The whole store is shown after the search term was cleared.
    Showing { count: usize },
    /// A search term selected `shown` of `total` records.
    Filtered { shown: usize, total: usize },
    /// The last load failed.
    Failed,
    /// The load trigger was used before web access was granted.
    NoWebAccess,
}

/// Visual class of a status, mapped to a theme color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Neutral,
    Loading,
    Success,
    Error,
}

impl Status {
    /// Returns the visual class of this status.
    #[must_use]
    pub const fn kind(self) -> StatusKind {
        match self {
            Self::Idle => StatusKind::Neutral,
            Self::Loading => StatusKind::Loading,
            Self::Loaded { .. } | Self::Showing { .. } | Self::Filtered { .. } => {
                StatusKind::Success
            }
            Self::Failed | Self::NoWebAccess => StatusKind::Error,
        }
    }
}
