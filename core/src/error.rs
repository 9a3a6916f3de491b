//! Transport-level failure classification.
//!
//! # Design
//! The transport is the only producer of these values and the safe-call
//! adapter is the only consumer; everything above the adapter sees
//! [`crate::ApiResult`] instead. Underlying client errors are stringified at
//! the boundary so the enum stays `Clone + PartialEq` and results remain
//! directly comparable in tests.

use thiserror::Error;

/// Failures raised by [`crate::Transport`] before an envelope is available.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    /// The server answered with a non-2xx status. `body` is the raw response
    /// text; the adapter extracts a display message from it best-effort.
    #[error("HTTP {code}")]
    Status { code: u16, body: String },

    /// No response reached the client (DNS failure, refused connection,
    /// timeout).
    #[error("connection failed: {0}")]
    Connectivity(String),

    /// A 2xx response whose body could not be decoded as an envelope.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// Anything else (request building, mid-stream body failure).
    #[error("{0}")]
    Unexpected(String),
}
