//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the fetcher and
//! UI layers. It follows a unidirectional data flow:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Host
//!                           ↑                                 ↓
//!                           └──────── Web responses ──────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`filter`]: Name filter over the directory store
//! - [`handler`]: Event processing and state transitions
//! - [`load`]: Single-flight guard for loads
//! - [`modes`]: Input mode types
//! - [`state`]: Central application state and view model computation
//! - [`status`]: Status line model
//! - [`store`]: The most recently loaded batch
//!
//! # Example
//!
//! ```rust
//! use userdeck::app::{handle_event, AppState, Event};
//! use userdeck::ui::{Locale, Theme};
//!
//! let mut state = AppState::new("https://randomuser.me/api/".into(), Theme::default(), Locale::En);
//! let (_render, actions) = handle_event(&mut state, &Event::LoadUsers)?;
//! // Web access has not been granted yet.
//! assert!(actions.is_empty());
//! # Ok::<(), userdeck::UserdeckError>(())
//! ```

pub mod actions;
pub mod filter;
pub mod handler;
pub mod load;
pub mod modes;
pub mod state;
pub mod status;
pub mod store;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use load::LoadGate;
pub use modes::{InputMode, SearchFocus};
pub use state::AppState;
pub use status::{Status, StatusKind};
pub use store::DirectoryStore;
