//! Resource repositories: the consumers of the core.
//!
//! Each repository calls the transport through the safe-call adapter and
//! returns mapped domain values inside [`crate::ApiResult`]. Nothing here
//! ever raises for a remote failure.

pub mod auth;
pub mod booking;
pub mod favorite;
pub mod kos;

pub use auth::AuthRepository;
pub use booking::BookingRepository;
pub use favorite::FavoriteRepository;
pub use kos::KosRepository;
