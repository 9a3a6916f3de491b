//! Domain model: immutable, UI-facing value objects.
//!
//! Entities are produced by the mapper layer and never mutated afterwards —
//! an update is a new instance. They serialize camelCase for snapshot-style
//! assertions in the vector tests.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Closed listing category. The wire carries free text; parsing is
/// case-insensitive and anything unrecognized lands on [`KosCategory::Campur`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KosCategory {
    Putra,
    Putri,
    Campur,
}

impl KosCategory {
    /// Fallback for unknown wire values — the mapper never rejects a record
    /// over an unrecognized category string.
    pub const FALLBACK: KosCategory = KosCategory::Campur;

    pub fn from_wire(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "putra" => KosCategory::Putra,
            "putri" => KosCategory::Putri,
            "campur" => KosCategory::Campur,
            _ => Self::FALLBACK,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            KosCategory::Putra => "putra",
            KosCategory::Putri => "putri",
            KosCategory::Campur => "campur",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub name: String,
    pub icon: String,
    pub is_available: bool,
}

/// Owner contact data embedded in a listing. Always present on the domain
/// side: an absent wire object becomes a fully-empty summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerSummary {
    pub id: String,
    pub name: String,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

/// Compact view of a user embedded in bookings and reviews.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub name: String,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

/// A boarding-house listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Kos {
    pub id: String,
    pub name: String,
    pub description: String,
    pub address: String,
    pub city: String,
    pub coordinates: Option<Coordinates>,
    pub price_per_month: i64,
    pub rating: f64,
    pub category: KosCategory,
    pub thumbnail_url: Option<String>,
    pub facilities: Vec<Facility>,
    pub owner: OwnerSummary,
    pub images: Vec<String>,
    pub is_favorite: bool,
    pub is_popular: bool,
    pub is_recommended: bool,
    pub is_active: bool,
}

/// A booking. Ids stay integral here because they feed follow-up wire
/// requests (cancel, detail). `kos` and `booker` mirror the backend's
/// optional embeds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    pub user_id: i64,
    pub kos_id: i64,
    pub booking_type: String,
    pub room_quantity: u32,
    pub total_price: i64,
    pub status: String,
    pub note: Option<String>,
    pub created_at: String,
    pub kos: Option<Kos>,
    pub booker: Option<UserSummary>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteStatus {
    Active,
    Removed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteEntry {
    pub id: i64,
    pub user_id: i64,
    pub kos: Option<Kos>,
    pub status: FavoriteStatus,
    pub date_added: String,
    pub removed_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub kos_id: i64,
    pub rating: f64,
    pub comment: String,
    pub created_at: String,
    pub reviewer: Option<UserSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parse_is_case_insensitive() {
        assert_eq!(KosCategory::from_wire("PUTRA"), KosCategory::Putra);
        assert_eq!(KosCategory::from_wire("Putri"), KosCategory::Putri);
        assert_eq!(KosCategory::from_wire(" campur "), KosCategory::Campur);
    }

    #[test]
    fn unknown_category_falls_back() {
        assert_eq!(KosCategory::from_wire("unknown"), KosCategory::FALLBACK);
        assert_eq!(KosCategory::from_wire(""), KosCategory::Campur);
    }

    #[test]
    fn category_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(KosCategory::Putri).unwrap(),
            serde_json::json!("putri")
        );
    }
}
