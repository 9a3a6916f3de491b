//! Safe-call adapter: the single point where raw transport outcomes become
//! [`ApiResult`] values.
//!
//! # Normalization policy
//! 1. Successful envelope with data → `Success(data)`.
//! 2. Successful envelope without data → `Success(default)` when a default
//!    was supplied, else `Success(T::default())`. Never an error: endpoints
//!    like password-reset legitimately succeed with no payload.
//! 3. Envelope declaring failure → `Error` with the backend message or
//!    [`SERVER_ERROR_FALLBACK`], no code.
//! 4. HTTP-status failure → message extracted from the JSON body, falling
//!    back to the status's canonical reason, then [`REQUEST_FAILED`];
//!    carries the status code and the original cause.
//! 5. Connectivity failure → fixed [`SERVER_UNREACHABLE`], no code.
//! 6. Anything else → the error's own message or [`UNKNOWN_ERROR`].
//!
//! Success detection runs before error classification, and the
//! status/connectivity/other order matters: the later arms are broader and
//! would otherwise swallow the specific cases.

use std::future::Future;

use crate::envelope::Envelope;
use crate::error::TransportError;
use crate::result::{ApiError, ApiResult};

/// Shown when the envelope declares failure without a message.
pub const SERVER_ERROR_FALLBACK: &str = "An error occurred on the server";
/// Shown for an HTTP-status failure with no extractable message.
pub const REQUEST_FAILED: &str = "Request failed";
/// Shown for every connectivity-level failure, regardless of its own text.
pub const SERVER_UNREACHABLE: &str = "Unable to reach the server";
/// Shown for an unclassified failure whose own message is empty.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Run a transport call and normalize its outcome, using `T::default()` as
/// the empty-success payload.
pub async fn safe_api_call<T, F, Fut>(call: F) -> ApiResult<T>
where
    T: Default,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Envelope<T>, TransportError>>,
{
    safe_api_call_or(None, call).await
}

/// Run a transport call and normalize its outcome, preferring `default` over
/// `T::default()` when the envelope succeeds without a payload.
pub async fn safe_api_call_or<T, F, Fut>(default: Option<T>, call: F) -> ApiResult<T>
where
    T: Default,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Envelope<T>, TransportError>>,
{
    match call().await {
        Ok(envelope) => from_envelope(envelope, default),
        Err(err) => from_transport_error(err),
    }
}

fn from_envelope<T: Default>(envelope: Envelope<T>, default: Option<T>) -> ApiResult<T> {
    if !envelope.success {
        let message = envelope
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| SERVER_ERROR_FALLBACK.to_string());
        return ApiResult::Error(ApiError {
            code: None,
            message,
            cause: None,
        });
    }
    match envelope.data {
        Some(data) => ApiResult::Success(data),
        None => ApiResult::Success(default.unwrap_or_default()),
    }
}

fn from_transport_error<T>(err: TransportError) -> ApiResult<T> {
    let (code, message) = match &err {
        TransportError::Status { code, body } => {
            let message = extract_message(body)
                .or_else(|| canonical_reason(*code))
                .unwrap_or_else(|| REQUEST_FAILED.to_string());
            (Some(*code), message)
        }
        TransportError::Connectivity(_) => (None, SERVER_UNREACHABLE.to_string()),
        other => {
            let text = other.to_string();
            let message = if text.is_empty() {
                UNKNOWN_ERROR.to_string()
            } else {
                text
            };
            (None, message)
        }
    };
    ApiResult::Error(ApiError {
        code,
        message,
        cause: Some(err),
    })
}

/// Best-effort extraction of a `"message"` field from an error body.
fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")?
        .as_str()
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

fn canonical_reason(code: u16) -> Option<String> {
    reqwest::StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .map(str::to_string)
}
