//! Maps raw HTTP failures onto [`ClashDetectionError`]
//!
//! Rules are applied in order, first match wins:
//! 1. no status code (absent or 0) => `Unknown`
//! 2. status 401 => `Unauthorized` with a fixed message (the gateway sends a malformed body)
//! 3. `error.code` looked up exactly, `Unrecognized` otherwise
//! 4. every `error.details[]` entry resolved on its own
//! 5. message composed from `error.message` plus numbered detail lines

use super::types::{ClashDetectionError, ErrorCode, ErrorDetail, RawResponse};
use serde_json::Value;
use std::fmt::Write as _;

/// Message used when nothing better is available
pub const DEFAULT_ERROR_MESSAGE: &str = "Unknown error occurred";

/// Message used for every 401 response
pub const UNAUTHORIZED_MESSAGE: &str =
    "The user is unauthorized. Please provide valid authentication credentials.";

impl ClashDetectionError {
    /// Parse a failed response. Never fails; always yields a well-formed error.
    pub fn parse(response: &RawResponse) -> Self {
        let status = match response.status_code {
            None | Some(0) => return Self::new(ErrorCode::Unknown, DEFAULT_ERROR_MESSAGE),
            Some(status) => status,
        };

        if status == 401 {
            return Self::new(ErrorCode::Unauthorized, UNAUTHORIZED_MESSAGE);
        }

        let error = response.body.as_ref().and_then(|body| body.get("error"));

        let code = ErrorCode::resolve(error.and_then(|e| e.get("code")).and_then(Value::as_str));
        let details = error
            .and_then(|e| e.get("details"))
            .and_then(Value::as_array)
            .map(|details| details.iter().map(parse_detail).collect::<Vec<_>>());
        let message = format_message(
            error.and_then(|e| e.get("message")).and_then(Value::as_str),
            details.as_deref(),
        );

        Self {
            code,
            message,
            details,
        }
    }
}

fn parse_detail(detail: &Value) -> ErrorDetail {
    ErrorDetail {
        code: ErrorCode::resolve(detail.get("code").and_then(Value::as_str)),
        message: detail
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        target: detail
            .get("target")
            .and_then(Value::as_str)
            .map(str::to_string),
    }
}

fn format_message(message: Option<&str>, details: Option<&[ErrorDetail]>) -> String {
    let mut result = message.unwrap_or(DEFAULT_ERROR_MESSAGE).to_string();

    let Some(details) = details.filter(|d| !d.is_empty()) else {
        return result;
    };

    result.push_str(" Details:\n");
    for (i, detail) in details.iter().enumerate() {
        // Writing to a String cannot fail
        let _ = write!(result, "{}. {}: {}", i + 1, detail.code, detail.message);
        if let Some(target) = detail.target.as_deref().filter(|t| !t.is_empty()) {
            let _ = write!(result, " Target: {target}.");
        }
        result.push('\n');
    }

    result
}
