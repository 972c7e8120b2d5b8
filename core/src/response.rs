//! Interpretation of raw responses.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::ScoreError;
use crate::http::HttpResponse;
use crate::types::ErrorResponse;

/// Turn a raw response into the expected payload or a `ScoreError`.
///
/// Any status other than 200 is an error, even when the body would decode
/// as `T`. A body that fails to decode as `ErrorResponse`, or carries an
/// empty description, falls back to `ScoreError::Status`.
pub fn parse_response<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ScoreError> {
    if response.status != 200 {
        return Err(status_error(response));
    }
    Ok(serde_json::from_slice(&response.body)?)
}

fn status_error(response: &HttpResponse) -> ScoreError {
    let description = decode_error_body(&response.body)
        .and_then(|payload| payload.error)
        .filter(|error| !error.is_empty());

    warn!(status = response.status, error = ?description, "score API request failed");
    match description {
        Some(error) => ScoreError::Api(error),
        None => ScoreError::Status(response.status),
    }
}

/// Only a JSON object counts as an error payload, not the `["..."]` form.
fn decode_error_body(body: &[u8]) -> Option<ErrorResponse> {
    let object = serde_json::from_slice::<Map<String, Value>>(body).ok()?;
    serde_json::from_value(Value::Object(object)).ok()
}
