//! Outcome type for every remote operation.
//!
//! # Design
//! Only the safe-call adapter produces `ApiResult` values; repositories and
//! UI code transform and inspect them. There is no implicit unwrapping —
//! callers either `match` or use the consuming accessors. Errors are opaque
//! to `map`: once a call has failed, no transform touches it.

use crate::error::TransportError;

/// Error half of an [`ApiResult`].
///
/// `message` is always non-empty and suitable for direct display. `code` is
/// set only when the failure came from an HTTP status response; envelope and
/// connectivity failures deliberately carry no code.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub code: Option<u16>,
    pub message: String,
    pub cause: Option<TransportError>,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            cause: None,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} (HTTP {code})", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Result of a remote operation: a payload or a displayable error.
///
/// Remote calls never raise past the safe-call adapter; this type is the
/// only channel failure information travels through.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResult<T> {
    Success(T),
    Error(ApiError),
}

impl<T> ApiResult<T> {
    /// Transform the payload of a `Success`; an `Error` passes through
    /// untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResult<U> {
        match self {
            ApiResult::Success(data) => ApiResult::Success(f(data)),
            ApiResult::Error(err) => ApiResult::Error(err),
        }
    }

    /// Run `f` on the payload if this is a `Success`, then return the
    /// instance unchanged. Enables inspection chains.
    pub fn on_success(self, f: impl FnOnce(&T)) -> Self {
        if let ApiResult::Success(data) = &self {
            f(data);
        }
        self
    }

    /// Run `f` on the error if this is an `Error`, then return the instance
    /// unchanged.
    pub fn on_error(self, f: impl FnOnce(&ApiError)) -> Self {
        if let ApiResult::Error(err) = &self {
            f(err);
        }
        self
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResult::Success(_))
    }

    /// Consume into the payload, discarding error information.
    pub fn success(self) -> Option<T> {
        match self {
            ApiResult::Success(data) => Some(data),
            ApiResult::Error(_) => None,
        }
    }

    /// Consume into the error, discarding the payload.
    pub fn error(self) -> Option<ApiError> {
        match self {
            ApiResult::Success(_) => None,
            ApiResult::Error(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_error() -> ApiError {
        ApiError {
            code: Some(500),
            message: "boom".to_string(),
            cause: None,
        }
    }

    #[test]
    fn map_composes() {
        let chained = ApiResult::Success(2).map(|v| v + 1).map(|v| v * 10);
        let fused = ApiResult::Success(2).map(|v| (v + 1) * 10);
        assert_eq!(chained, fused);
        assert_eq!(chained, ApiResult::Success(30));
    }

    #[test]
    fn map_short_circuits_on_error() {
        let err: ApiResult<i32> = ApiResult::Error(sample_error());
        let mapped = err.clone().map(|v| v + 1);
        assert_eq!(mapped, err);
    }

    #[test]
    fn on_success_runs_only_for_success_and_preserves_value() {
        let mut seen = None;
        let result = ApiResult::Success(7).on_success(|v| seen = Some(*v));
        assert_eq!(seen, Some(7));
        assert_eq!(result, ApiResult::Success(7));

        let mut touched = false;
        let err: ApiResult<i32> = ApiResult::Error(sample_error());
        let back = err.clone().on_success(|_| touched = true);
        assert!(!touched);
        assert_eq!(back, err);
    }

    #[test]
    fn on_error_runs_only_for_error_and_preserves_value() {
        let mut seen = None;
        let err: ApiResult<i32> = ApiResult::Error(sample_error());
        let back = err.clone().on_error(|e| seen = Some(e.message.clone()));
        assert_eq!(seen.as_deref(), Some("boom"));
        assert_eq!(back, err);

        let mut touched = false;
        let ok = ApiResult::Success(1).on_error(|_| touched = true);
        assert!(!touched);
        assert_eq!(ok, ApiResult::Success(1));
    }

    #[test]
    fn accessors_discriminate() {
        assert_eq!(ApiResult::Success(3).success(), Some(3));
        assert_eq!(ApiResult::Success(3).error(), None);
        let err: ApiResult<i32> = ApiResult::Error(sample_error());
        assert!(err.clone().success().is_none());
        assert_eq!(err.error().map(|e| e.code), Some(Some(500)));
    }

    #[test]
    fn display_includes_code_when_present() {
        assert_eq!(sample_error().to_string(), "boom (HTTP 500)");
        assert_eq!(ApiError::new("plain").to_string(), "plain");
    }
}
