//! Directory service client.
//!
//! Zellij plugins cannot open sockets themselves, so loading a batch is split
//! across the host boundary:
//!
//! ```text
//! handle_event(LoadUsers) → Action::FetchUsers(FetchRequest)
//!        plugin shim      → web_request(url, GET, context)
//!        Zellij host      → Event::WebRequestResult(status, body, context)
//! handle_event(WebResponse) → decode_response(status, body)
//! ```
//!
//! # Modules
//!
//! - [`decode`]: Status validation and payload parsing

pub mod decode;

pub use decode::decode_response;

use crate::domain::{Result, UserdeckError};
use std::collections::BTreeMap;
use thiserror::Error;
use url::Url;

/// Default directory service endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://randomuser.me/api/";

/// Number of records requested per load. There is no second page.
pub const BATCH_SIZE: usize = 10;

/// Context key identifying requests issued by this plugin.
const CONTEXT_REQUEST_KEY: &str = "request";

/// Context value for user batch requests.
const CONTEXT_REQUEST_USERS: &str = "users";

/// Context key carrying the load identifier.
const CONTEXT_LOAD_ID_KEY: &str = "load_id";

/// Failures of a single load.
///
/// All variants are handled identically by the application layer; they are
/// kept apart for diagnostics.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The host could not complete the request and reported no HTTP status.
    #[error("transport failure (host reported status {status})")]
    Transport {
        /// Raw status value delivered by the host.
        status: u16,
    },

    /// The server answered with a non-success status code.
    #[error("HTTP error: {code}")]
    HttpStatus {
        /// HTTP status code.
        code: u16,
    },

    /// The body is not valid JSON or has no `results` array.
    #[error("invalid payload: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A GET request for one batch of users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Full request URL including the `results` query parameter.
    pub url: String,

    /// Identifier of the load this request belongs to.
    pub load_id: u64,
}

impl FetchRequest {
    /// Builds the request for `endpoint`, appending `results=10`.
    ///
    /// Existing query parameters on the endpoint are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`UserdeckError::Config`] if `endpoint` is not an absolute URL.
    ///
    /// # Example
    ///
    /// ```
    /// use userdeck::fetcher::FetchRequest;
    ///
    /// let request = FetchRequest::new("https://randomuser.me/api/", 1)?;
    /// assert_eq!(request.url, "https://randomuser.me/api/?results=10");
    /// # Ok::<(), userdeck::UserdeckError>(())
    /// ```
    pub fn new(endpoint: &str, load_id: u64) -> Result<Self> {
        let mut url = Url::parse(endpoint)
            .map_err(|e| UserdeckError::Config(format!("endpoint {endpoint:?}: {e}")))?;
        url.query_pairs_mut()
            .append_pair("results", &BATCH_SIZE.to_string());

        Ok(Self {
            url: url.into(),
            load_id,
        })
    }

    /// Returns the context map attached to the host request.
    ///
    /// Zellij echoes it back with the response, which lets the handler match
    /// the response to the load that issued it.
    #[must_use]
    pub fn context(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (CONTEXT_REQUEST_KEY.to_string(), CONTEXT_REQUEST_USERS.to_string()),
            (CONTEXT_LOAD_ID_KEY.to_string(), self.load_id.to_string()),
        ])
    }

    /// Extracts the load identifier from a response context.
    ///
    /// Returns `None` when the context does not belong to a user batch request.
    #[must_use]
    pub fn load_id_from_context(context: &BTreeMap<String, String>) -> Option<u64> {
        if context.get(CONTEXT_REQUEST_KEY).map(String::as_str) != Some(CONTEXT_REQUEST_USERS) {
            return None;
        }
        context.get(CONTEXT_LOAD_ID_KEY)?.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_batch_size_to_endpoint() {
        let request = FetchRequest::new(DEFAULT_ENDPOINT, 7).unwrap();
        assert_eq!(request.url, "https://randomuser.me/api/?results=10");
        assert_eq!(request.load_id, 7);
    }

    #[test]
    fn keeps_existing_query_parameters() {
        let request = FetchRequest::new("https://example.com/users?nat=de", 1).unwrap();
        assert_eq!(request.url, "https://example.com/users?nat=de&results=10");
    }

    #[test]
    fn rejects_relative_endpoint() {
        let err = FetchRequest::new("api/users", 1).unwrap_err();
        assert!(matches!(err, UserdeckError::Config(_)));
    }

    #[test]
    fn context_round_trips_load_id() {
        let request = FetchRequest::new(DEFAULT_ENDPOINT, 42).unwrap();
        assert_eq!(FetchRequest::load_id_from_context(&request.context()), Some(42));
    }

    #[test]
    fn foreign_context_is_not_matched() {
        let context = BTreeMap::from([("load_id".to_string(), "1".to_string())]);
        assert_eq!(FetchRequest::load_id_from_context(&context), None);
        assert_eq!(FetchRequest::load_id_from_context(&BTreeMap::new()), None);
    }
}
