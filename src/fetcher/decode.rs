//! Response validation and payload parsing.

use super::FetchError;
use crate::domain::UserRecord;
use serde::Deserialize;

/// Top-level shape of the directory service response.
///
/// Elements are kept as raw JSON so that one malformed record does not
/// reject the whole batch.
#[derive(Deserialize)]
struct Envelope {
    results: Vec<serde_json::Value>,
}

/// Validates a host response and parses it into user records.
///
/// # Errors
///
/// - [`FetchError::Transport`] if `status` is not an HTTP status code
/// - [`FetchError::HttpStatus`] for any non-2xx status
/// - [`FetchError::Parse`] if `body` is not JSON or lacks a `results` array
///
/// Elements of `results` that do not have the user record shape are skipped
/// with a warning; the remaining records keep their order.
pub fn decode_response(status: u16, body: &[u8]) -> Result<Vec<UserRecord>, FetchError> {
    if !(100..=599).contains(&status) {
        return Err(FetchError::Transport { status });
    }
    if !(200..300).contains(&status) {
        return Err(FetchError::HttpStatus { code: status });
    }

    let envelope: Envelope = serde_json::from_slice(body)?;
    let received = envelope.results.len();

    let records: Vec<UserRecord> = envelope
        .results
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(index = index, error = %e, "skipping malformed user record");
                None
            }
        })
        .collect();

    tracing::debug!(
        received = received,
        decoded = records.len(),
        "user batch decoded"
    );

    Ok(records)
}
