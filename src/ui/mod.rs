//! User interface rendering layer with component-based architecture.
//!
//! This module turns application state into ANSI-styled frames through
//! composable components, and owns everything that touches user-visible text:
//! sanitizing remote strings, card descriptors, wording and theming.
//!
//! # Architecture
//!
//! ```text
//! UserRecord → render_users → ListView ─┐
//!                                       AppState → compute_viewmodel → UIViewModel → render
//! ```
//!
//! # Modules
//!
//! - [`cards`]: Card descriptors built from user records
//! - [`components`]: Composable component renderers
//! - [`helpers`]: Shared rendering utilities (cursor, highlighting, links)
//! - [`locale`]: User-visible wording in English and German
//! - [`renderer`]: Top-level rendering coordinator
//! - [`text`]: Display-safe text and search match ranges
//! - [`theme`]: Color schemes and ANSI escape sequence generation
//! - [`viewmodel`]: View model types representing renderable UI state

pub mod cards;
pub mod components;
pub mod helpers;
pub mod locale;
pub mod renderer;
pub mod text;
pub mod theme;
pub mod viewmodel;

pub use cards::{render_users, Avatar, ListView, UserCard};
pub use locale::Locale;
pub use renderer::{render, render_frame};
pub use text::PlainText;
pub use theme::Theme;
pub use viewmodel::{
    BodyView, CardItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, StatusInfo,
    TriggerInfo, UIViewModel,
};
