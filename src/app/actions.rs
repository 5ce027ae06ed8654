//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! plugin shim executes them in order; they are the only way the library
//! reaches the Zellij host.
//!
//! # Example
//!
//! ```rust
//! use userdeck::app::Action;
//! use userdeck::fetcher::FetchRequest;
//!
//! let request = FetchRequest::new("https://randomuser.me/api/", 1)?;
//! let actions = vec![Action::FetchUsers(request)];
//! # Ok::<(), userdeck::UserdeckError>(())
//! ```

use crate::fetcher::FetchRequest;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user presses `q` in normal mode.
    CloseFocus,

    /// Issues the GET request for one user batch through the host.
    ///
    /// The response comes back as a `WebResponse` event carrying the
    /// request's context.
    FetchUsers(FetchRequest),
}
