//! # Response Mapping
//!
//! Turns non-success HTTP responses from the shift-request API back into
//! [`ShiftError`] values. The server answers failures with a JSON body of the
//! form `{"error": "<message>"}`; the status code selects the variant.
//!
//! A `401 Unauthorized` always maps to [`ShiftError::Authentication`], which
//! callers treat as "the session is gone, log in again".

use reqwest::{Response, StatusCode};
use serde::Deserialize;
use shiftboard_core::errors::{ShiftError, ShiftResult};
use tracing::warn;

/// Error payload returned by the API.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Extracts the message from an error body, falling back to a generic text
/// when the body is empty or not the expected JSON.
pub fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|parsed| parsed.error)
        .ok()
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| format!("request failed with status {}", status.as_u16()))
}

/// Passes successful responses through and converts the rest into errors.
pub async fn check_status(response: Response) -> ShiftResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    // A body that cannot be read still yields a status-based error.
    let body = response.text().await.unwrap_or_default();
    let message = error_message(status, &body);

    if status == StatusCode::UNAUTHORIZED {
        warn!("Authentication failed, a new login is required");
    } else {
        warn!(status = status.as_u16(), error = %message, "API request failed");
    }

    Err(ShiftError::from_status(status.as_u16(), message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_from_json_body() {
        let message = error_message(StatusCode::BAD_REQUEST, r#"{"error": "bad hour"}"#);
        assert_eq!(message, "bad hour");
    }

    #[test]
    fn fallback_for_plain_text() {
        let message = error_message(StatusCode::BAD_GATEWAY, "<html>upstream</html>");
        assert_eq!(message, "request failed with status 502");
    }

    #[test]
    fn fallback_for_blank_message() {
        let message = error_message(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error": " "}"#);
        assert_eq!(message, "request failed with status 500");
    }
}
