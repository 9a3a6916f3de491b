//! Client core for the kos rental marketplace API.
//!
//! # Overview
//! Everything a caller sees from a remote operation is an [`ApiResult`]:
//! the safe-call adapter is the single place where transport failures,
//! server-declared failures, and malformed error bodies are normalized, and
//! nothing above it ever receives a raised error. Wire DTOs are mapped into
//! immutable domain entities by pure, total functions with an explicit
//! defaulting policy.
//!
//! # Design
//! - [`Transport`] wraps the HTTP client: base URL, 30 s timeouts,
//!   bearer-token injection from the [`SessionContext`].
//! - [`adapter::safe_api_call`] turns `Result<Envelope<T>, TransportError>`
//!   into `ApiResult<T>`; a successful envelope without a payload is a valid
//!   empty success, never an error.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.
//! - Session state is passed explicitly — no process-wide globals.

pub mod adapter;
pub mod domain;
pub mod dto;
pub mod envelope;
pub mod error;
pub mod mapper;
pub mod repo;
pub mod result;
pub mod session;
pub mod store;
pub mod transport;

pub use adapter::{safe_api_call, safe_api_call_or};
pub use envelope::Envelope;
pub use error::TransportError;
pub use repo::{AuthRepository, BookingRepository, FavoriteRepository, KosRepository};
pub use result::{ApiError, ApiResult};
pub use session::{SessionContext, SessionIdentity, TokenPair};
pub use store::{LocalStore, StoredUser};
pub use transport::Transport;
