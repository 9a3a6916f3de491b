//! Pure DTO-to-domain conversions.
//!
//! # Defaulting policy
//! Mappers are total: structurally valid wire records always map, with
//! absent fields filled from the named constants below. Semantically odd
//! values (an unknown category string, a null embedded owner) degrade to
//! defaults instead of failing. The only mapper with an output beyond the
//! entity itself is [`map_auth`], which also returns the session identity —
//! storing it is the caller's job, keeping the function itself pure.

use crate::domain::{
    Booking, Coordinates, Facility, FavoriteEntry, FavoriteStatus, Kos, KosCategory,
    OwnerSummary, Review, User, UserSummary,
};
use crate::dto::{
    BookingDto, FacilityDto, FavoriteDto, KosDto, OwnerDto, ReviewDto, UserDto,
};
use crate::session::SessionIdentity;

pub const DEFAULT_RATING: f64 = 0.0;
/// Listings are live unless the backend says otherwise.
pub const DEFAULT_IS_ACTIVE: bool = true;
pub const DEFAULT_FLAG: bool = false;
pub const DEFAULT_ROOM_QUANTITY: u32 = 1;

/// Numeric wire ids become opaque string ids where the rest of the system
/// never feeds them back into requests (users, listings, owners).
fn stringify_id(id: Option<i64>) -> String {
    id.unwrap_or_default().to_string()
}

pub fn map_user(dto: UserDto) -> User {
    User {
        id: stringify_id(dto.id),
        full_name: dto.full_name.unwrap_or_default(),
        email: dto.email.unwrap_or_default(),
        phone_number: dto.phone_number,
        access_token: dto.access_token,
        refresh_token: dto.refresh_token,
    }
}

/// Map a login/registration response and surface the identity to publish
/// into the session context. The caller stores it; the mapper does not.
pub fn map_auth(dto: UserDto) -> (User, SessionIdentity) {
    let user = map_user(dto);
    let identity = SessionIdentity {
        user_id: user.id.clone(),
        name: user.full_name.clone(),
        email: user.email.clone(),
    };
    (user, identity)
}

pub fn map_facility(dto: FacilityDto) -> Facility {
    Facility {
        name: dto.name.unwrap_or_default(),
        icon: dto.icon.unwrap_or_default(),
        is_available: dto.is_available.unwrap_or(DEFAULT_IS_ACTIVE),
    }
}

/// An absent wire owner becomes a fully-empty summary, never a missing
/// field; a present owner with null sub-fields gets per-field defaults.
pub fn map_owner(dto: Option<OwnerDto>) -> OwnerSummary {
    match dto {
        Some(owner) => OwnerSummary {
            id: stringify_id(owner.id),
            name: owner.name.unwrap_or_default(),
            phone_number: owner.phone_number,
            email: owner.email,
        },
        None => OwnerSummary::default(),
    }
}

fn map_user_summary(dto: UserDto) -> UserSummary {
    UserSummary {
        id: stringify_id(dto.id),
        name: dto.full_name.unwrap_or_default(),
        phone_number: dto.phone_number,
        email: dto.email,
    }
}

pub fn map_kos(dto: KosDto) -> Kos {
    let coordinates = match (dto.latitude, dto.longitude) {
        (Some(latitude), Some(longitude)) => Some(Coordinates {
            latitude,
            longitude,
        }),
        _ => None,
    };
    Kos {
        id: stringify_id(dto.id),
        name: dto.name.unwrap_or_default(),
        description: dto.description.unwrap_or_default(),
        address: dto.address.unwrap_or_default(),
        city: dto.city.unwrap_or_default(),
        coordinates,
        price_per_month: dto.price_per_month.unwrap_or_default(),
        rating: dto.rating.unwrap_or(DEFAULT_RATING),
        category: KosCategory::from_wire(dto.kind.as_deref().unwrap_or_default()),
        thumbnail_url: dto.thumbnail_url,
        facilities: dto
            .facilities
            .unwrap_or_default()
            .into_iter()
            .map(map_facility)
            .collect(),
        owner: map_owner(dto.owner),
        images: dto.images.unwrap_or_default(),
        is_favorite: dto.is_favorite.unwrap_or(DEFAULT_FLAG),
        is_popular: dto.is_popular.unwrap_or(DEFAULT_FLAG),
        is_recommended: dto.is_recommended.unwrap_or(DEFAULT_FLAG),
        is_active: dto.is_active.unwrap_or(DEFAULT_IS_ACTIVE),
    }
}

pub fn map_booking(dto: BookingDto) -> Booking {
    Booking {
        id: dto.id.unwrap_or_default(),
        user_id: dto.user_id.unwrap_or_default(),
        kos_id: dto.kos_id.unwrap_or_default(),
        booking_type: dto.booking_type.unwrap_or_default(),
        room_quantity: dto.room_quantity.unwrap_or(DEFAULT_ROOM_QUANTITY),
        total_price: dto.total_price.unwrap_or_default(),
        status: dto.status.unwrap_or_default(),
        note: dto.note,
        created_at: dto.created_at.unwrap_or_default(),
        kos: dto.kos.map(map_kos),
        booker: dto.user.map(map_user_summary),
    }
}

fn map_favorite_status(raw: Option<&str>) -> FavoriteStatus {
    match raw {
        Some(s) if s.eq_ignore_ascii_case("removed") => FavoriteStatus::Removed,
        _ => FavoriteStatus::Active,
    }
}

pub fn map_favorite(dto: FavoriteDto) -> FavoriteEntry {
    FavoriteEntry {
        id: dto.id.unwrap_or_default(),
        user_id: dto.user_id.unwrap_or_default(),
        kos: dto.kos.map(map_kos),
        status: map_favorite_status(dto.status.as_deref()),
        date_added: dto.created_at.unwrap_or_default(),
        removed_at: dto.removed_at,
    }
}

pub fn map_review(dto: ReviewDto) -> Review {
    Review {
        id: dto.id.unwrap_or_default(),
        kos_id: dto.kos_id.unwrap_or_default(),
        rating: dto.rating.unwrap_or(DEFAULT_RATING),
        comment: dto.comment.unwrap_or_default(),
        created_at: dto.created_at.unwrap_or_default(),
        reviewer: dto.user.map(map_user_summary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kos_defaults_fill_absent_fields() {
        let dto = KosDto {
            id: Some(1),
            name: Some("Kos A".to_string()),
            ..KosDto::default()
        };
        let kos = map_kos(dto);
        assert_eq!(kos.id, "1");
        assert_eq!(kos.description, "");
        assert_eq!(kos.rating, DEFAULT_RATING);
        assert!(kos.facilities.is_empty());
        assert!(kos.images.is_empty());
        assert!(kos.is_active);
        assert!(!kos.is_favorite);
        assert!(!kos.is_popular);
        assert!(!kos.is_recommended);
        assert!(kos.coordinates.is_none());
    }

    #[test]
    fn kos_category_normalizes_and_falls_back() {
        let putri = map_kos(KosDto {
            kind: Some("PUTRI".to_string()),
            ..KosDto::default()
        });
        assert_eq!(putri.category, KosCategory::Putri);

        let unknown = map_kos(KosDto {
            kind: Some("unknown".to_string()),
            ..KosDto::default()
        });
        assert_eq!(unknown.category, KosCategory::Campur);

        let absent = map_kos(KosDto::default());
        assert_eq!(absent.category, KosCategory::Campur);
    }

    #[test]
    fn absent_owner_becomes_empty_summary() {
        let kos = map_kos(KosDto::default());
        assert_eq!(kos.owner, OwnerSummary::default());
    }

    #[test]
    fn present_owner_with_null_fields_gets_per_field_defaults() {
        let kos = map_kos(KosDto {
            owner: Some(OwnerDto {
                id: Some(5),
                ..OwnerDto::default()
            }),
            ..KosDto::default()
        });
        assert_eq!(kos.owner.id, "5");
        assert_eq!(kos.owner.name, "");
        assert!(kos.owner.phone_number.is_none());
    }

    #[test]
    fn coordinates_require_both_axes() {
        let only_lat = map_kos(KosDto {
            latitude: Some(-6.9),
            ..KosDto::default()
        });
        assert!(only_lat.coordinates.is_none());

        let both = map_kos(KosDto {
            latitude: Some(-6.9),
            longitude: Some(107.6),
            ..KosDto::default()
        });
        assert_eq!(
            both.coordinates,
            Some(Coordinates {
                latitude: -6.9,
                longitude: 107.6
            })
        );
    }

    #[test]
    fn auth_mapping_returns_identity_alongside_user() {
        let (user, identity) = map_auth(UserDto {
            id: Some(12),
            full_name: Some("Siti".to_string()),
            email: Some("siti@example.com".to_string()),
            ..UserDto::default()
        });
        assert_eq!(user.id, "12");
        assert_eq!(identity.user_id, "12");
        assert_eq!(identity.name, "Siti");
        assert_eq!(identity.email, "siti@example.com");
    }

    #[test]
    fn booking_keeps_integral_ids_and_optional_embeds() {
        let booking = map_booking(BookingDto {
            id: Some(3),
            user_id: Some(1),
            kos_id: Some(2),
            ..BookingDto::default()
        });
        assert_eq!(booking.id, 3);
        assert_eq!(booking.kos_id, 2);
        assert_eq!(booking.room_quantity, DEFAULT_ROOM_QUANTITY);
        assert!(booking.kos.is_none());
        assert!(booking.booker.is_none());
    }

    #[test]
    fn favorite_status_defaults_to_active() {
        let entry = map_favorite(FavoriteDto {
            id: Some(1),
            status: Some("ACTIVE".to_string()),
            ..FavoriteDto::default()
        });
        assert_eq!(entry.status, FavoriteStatus::Active);

        let removed = map_favorite(FavoriteDto {
            status: Some("Removed".to_string()),
            removed_at: Some("2026-01-01".to_string()),
            ..FavoriteDto::default()
        });
        assert_eq!(removed.status, FavoriteStatus::Removed);
        assert_eq!(removed.removed_at.as_deref(), Some("2026-01-01"));

        let unknown = map_favorite(FavoriteDto {
            status: Some("archived".to_string()),
            ..FavoriteDto::default()
        });
        assert_eq!(unknown.status, FavoriteStatus::Active);
    }
}
