//! Wire-shape records mirroring backend JSON.
//!
//! # Design
//! Response DTOs are defined independently from the mock-server crate;
//! integration tests catch schema drift. Every response field is optional
//! with a default, so a sparse record never fails to parse — the mapper
//! layer is responsible for filling defaults, not serde. Request payloads
//! serialize camelCase to match the backend.

use serde::{Deserialize, Serialize};

// --- responses ---

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserDto {
    pub id: Option<i64>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OwnerDto {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FacilityDto {
    pub name: Option<String>,
    pub icon: Option<String>,
    pub is_available: Option<bool>,
}

/// A kos listing as the backend sends it. `type` is free text on the wire;
/// the mapper normalizes it into a closed category.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KosDto {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub price_per_month: Option<i64>,
    pub rating: Option<f64>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub thumbnail_url: Option<String>,
    pub facilities: Option<Vec<FacilityDto>>,
    pub owner: Option<OwnerDto>,
    pub images: Option<Vec<String>>,
    pub is_favorite: Option<bool>,
    pub is_popular: Option<bool>,
    pub is_recommended: Option<bool>,
    pub is_active: Option<bool>,
}

/// Booking responses embed the kos and booker records; both embeds are
/// optional on the wire and stay optional after mapping.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingDto {
    pub id: Option<i64>,
    pub user_id: Option<i64>,
    pub kos_id: Option<i64>,
    pub booking_type: Option<String>,
    pub room_quantity: Option<u32>,
    pub total_price: Option<i64>,
    pub status: Option<String>,
    pub note: Option<String>,
    pub created_at: Option<String>,
    pub kos: Option<KosDto>,
    pub user: Option<UserDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FavoriteDto {
    pub id: Option<i64>,
    pub user_id: Option<i64>,
    pub kos: Option<KosDto>,
    pub status: Option<String>,
    pub created_at: Option<String>,
    pub removed_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReviewDto {
    pub id: Option<i64>,
    pub kos_id: Option<i64>,
    pub rating: Option<f64>,
    pub comment: Option<String>,
    pub created_at: Option<String>,
    pub user: Option<UserDto>,
}

// --- requests ---

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub kos_id: i64,
    pub booking_type: String,
    pub room_quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFavoriteRequest {
    pub kos_id: i64,
}
