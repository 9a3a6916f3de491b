//! The backend's uniform wire wrapper.

use serde::Deserialize;

/// Every endpoint wraps its payload in `{ success, message?, data? }`.
///
/// `message` and `data` default to `None` when absent so a minimal
/// `{"success":true}` body still parses. A successful envelope without
/// `data` is a valid outcome, not an error — see the safe-call adapter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}
