//! In-memory mock of the kos marketplace backend.
//!
//! Speaks the envelope wire contract (`{success, message?, data?}`) on every
//! route. Business failures (duplicate email, duplicate favorite) come back
//! as `success:false` envelopes; auth failures and unknown ids use HTTP
//! statuses with a `{"message": ...}` body, matching the real backend.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityRecord {
    pub name: String,
    pub icon: String,
    pub is_available: bool,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerRecord {
    pub id: i64,
    pub name: String,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KosRecord {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub address: String,
    pub city: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub price_per_month: i64,
    pub rating: Option<f64>,
    #[serde(rename = "type")]
    pub kind: String,
    pub thumbnail_url: Option<String>,
    pub facilities: Vec<FacilityRecord>,
    pub owner: OwnerRecord,
    pub images: Vec<String>,
    pub is_popular: bool,
    pub is_recommended: bool,
    pub is_active: bool,
}

#[derive(Clone, Debug)]
pub struct UserRecord {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub password: String,
}

#[derive(Clone, Debug)]
pub struct BookingRecord {
    pub id: i64,
    pub user_id: i64,
    pub kos_id: i64,
    pub booking_type: String,
    pub room_quantity: u32,
    pub total_price: i64,
    pub status: String,
    pub note: Option<String>,
    pub created_at: String,
}

#[derive(Clone, Debug)]
pub struct FavoriteRecord {
    pub id: i64,
    pub user_id: i64,
    pub kos_id: i64,
    pub created_at: String,
}

#[derive(Default)]
pub struct Db {
    pub users: HashMap<String, UserRecord>,
    pub tokens: HashMap<String, i64>,
    pub kos: HashMap<i64, KosRecord>,
    pub reviews: HashMap<i64, Vec<Value>>,
    pub bookings: HashMap<i64, BookingRecord>,
    pub favorites: HashMap<i64, FavoriteRecord>,
    pub next_id: i64,
}

impl Db {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

pub type SharedDb = Arc<RwLock<Db>>;

pub fn app() -> Router {
    let db: SharedDb = Arc::new(RwLock::new(seed()));
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/auth/logout", post(logout))
        .route("/auth/forgot-password", post(forgot_password))
        .route("/kos", get(list_kos))
        .route("/kos/{id}", get(get_kos))
        .route("/kos/{id}/reviews", get(kos_reviews))
        .route("/bookings", get(list_bookings).post(create_booking))
        .route("/bookings/{id}", get(get_booking).delete(cancel_booking))
        .route("/favorites", get(list_favorites).post(add_favorite))
        .route("/favorites/{id}", axum::routing::delete(remove_favorite))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn seed() -> Db {
    let mut db = Db::default();
    db.kos.insert(
        1,
        KosRecord {
            id: 1,
            name: "Kos Melati".to_string(),
            description: Some("Dekat kampus, kamar mandi dalam".to_string()),
            address: "Jl. Dipatiukur No. 35".to_string(),
            city: "Bandung".to_string(),
            latitude: Some(-6.8915),
            longitude: Some(107.6107),
            price_per_month: 1_200_000,
            rating: Some(4.5),
            kind: "putri".to_string(),
            thumbnail_url: Some("https://img.example.com/melati.webp".to_string()),
            facilities: vec![
                FacilityRecord {
                    name: "WiFi".to_string(),
                    icon: "wifi".to_string(),
                    is_available: true,
                },
                FacilityRecord {
                    name: "AC".to_string(),
                    icon: "ac".to_string(),
                    is_available: false,
                },
            ],
            owner: OwnerRecord {
                id: 7,
                name: "Bu Rina".to_string(),
                phone_number: Some("08123456789".to_string()),
                email: Some("rina@example.com".to_string()),
            },
            images: vec!["https://img.example.com/melati-1.webp".to_string()],
            is_popular: true,
            is_recommended: false,
            is_active: true,
        },
    );
    // Sparse record: the client must fill defaults for the absent fields.
    db.kos.insert(
        2,
        KosRecord {
            id: 2,
            name: "Kos Mawar".to_string(),
            description: None,
            address: "Jl. Margonda Raya No. 10".to_string(),
            city: "Depok".to_string(),
            latitude: None,
            longitude: None,
            price_per_month: 800_000,
            rating: None,
            kind: "putra".to_string(),
            thumbnail_url: None,
            facilities: Vec::new(),
            owner: OwnerRecord {
                id: 8,
                name: "Pak Budi".to_string(),
                phone_number: None,
                email: None,
            },
            images: Vec::new(),
            is_popular: false,
            is_recommended: true,
            is_active: true,
        },
    );
    db.reviews.insert(
        1,
        vec![json!({
            "id": 1,
            "kosId": 1,
            "rating": 5.0,
            "comment": "Bersih dan nyaman",
            "createdAt": "2026-01-10T08:00:00Z",
            "user": {"id": 3, "fullName": "Andi", "email": "andi@example.com"}
        })],
    );
    db.next_id = 100;
    db
}

// --- envelope helpers ---

fn ok(data: Value) -> Response {
    Json(json!({"success": true, "data": data})).into_response()
}

fn ok_msg(message: &str) -> Response {
    Json(json!({"success": true, "message": message})).into_response()
}

fn fail(message: &str) -> Response {
    Json(json!({"success": false, "message": message})).into_response()
}

fn http_err(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({"message": message}))).into_response()
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn authorize(db: &Db, headers: &HeaderMap) -> Result<i64, Response> {
    bearer(headers)
        .and_then(|token| db.tokens.get(token).copied())
        .ok_or_else(|| http_err(StatusCode::UNAUTHORIZED, "Unauthorized"))
}

fn kos_json(kos: &KosRecord) -> Value {
    serde_json::to_value(kos).unwrap_or(Value::Null)
}

fn user_json(user: &UserRecord, token: Option<&str>) -> Value {
    let mut value = json!({
        "id": user.id,
        "fullName": user.full_name,
        "email": user.email,
        "phoneNumber": user.phone_number,
    });
    if let (Some(token), Some(map)) = (token, value.as_object_mut()) {
        map.insert("accessToken".to_string(), json!(token));
        map.insert("refreshToken".to_string(), json!(format!("refresh-{token}")));
    }
    value
}

fn booking_json(booking: &BookingRecord, db: &Db) -> Value {
    let kos = db.kos.get(&booking.kos_id).map(kos_json);
    let user = db
        .users
        .values()
        .find(|u| u.id == booking.user_id)
        .map(|u| user_json(u, None));
    json!({
        "id": booking.id,
        "userId": booking.user_id,
        "kosId": booking.kos_id,
        "bookingType": booking.booking_type,
        "roomQuantity": booking.room_quantity,
        "totalPrice": booking.total_price,
        "status": booking.status,
        "note": booking.note,
        "createdAt": booking.created_at,
        "kos": kos,
        "user": user,
    })
}

fn favorite_json(favorite: &FavoriteRecord, db: &Db) -> Value {
    json!({
        "id": favorite.id,
        "userId": favorite.user_id,
        "kos": db.kos.get(&favorite.kos_id).map(kos_json),
        "status": "active",
        "createdAt": favorite.created_at,
    })
}

// --- auth ---

#[derive(Deserialize)]
struct LoginInput {
    email: String,
    password: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegisterInput {
    full_name: String,
    email: String,
    #[serde(default)]
    phone_number: Option<String>,
    password: String,
}

async fn login(State(db): State<SharedDb>, Json(input): Json<LoginInput>) -> Response {
    let mut db = db.write().await;
    let user = db.users.get(&input.email).cloned();
    match user {
        Some(user) if user.password == input.password => {
            let token = format!("token-{}", user.id);
            db.tokens.insert(token.clone(), user.id);
            ok(user_json(&user, Some(&token)))
        }
        _ => http_err(StatusCode::UNAUTHORIZED, "Invalid credentials"),
    }
}

async fn register(State(db): State<SharedDb>, Json(input): Json<RegisterInput>) -> Response {
    let mut db = db.write().await;
    if db.users.contains_key(&input.email) {
        return fail("Email already registered");
    }
    let id = db.allocate_id();
    let user = UserRecord {
        id,
        full_name: input.full_name,
        email: input.email.clone(),
        phone_number: input.phone_number,
        password: input.password,
    };
    let token = format!("token-{id}");
    db.tokens.insert(token.clone(), id);
    db.users.insert(input.email, user.clone());
    ok(user_json(&user, Some(&token)))
}

async fn logout(State(db): State<SharedDb>, headers: HeaderMap) -> Response {
    let mut db = db.write().await;
    if let Some(token) = bearer(&headers) {
        let token = token.to_string();
        db.tokens.remove(&token);
    }
    ok_msg("Logged out")
}

async fn forgot_password(Json(_input): Json<Value>) -> Response {
    // Deliberately payload-free: clients must treat this as a success.
    ok_msg("Reset link sent")
}

// --- kos ---

#[derive(Deserialize)]
struct SearchParams {
    #[serde(default)]
    search: Option<String>,
}

async fn list_kos(State(db): State<SharedDb>, Query(params): Query<SearchParams>) -> Response {
    let db = db.read().await;
    let needle = params.search.unwrap_or_default().to_lowercase();
    let mut records: Vec<&KosRecord> = db
        .kos
        .values()
        .filter(|k| {
            needle.is_empty()
                || k.name.to_lowercase().contains(&needle)
                || k.city.to_lowercase().contains(&needle)
        })
        .collect();
    records.sort_by_key(|k| k.id);
    ok(Value::Array(records.into_iter().map(kos_json).collect()))
}

async fn get_kos(State(db): State<SharedDb>, Path(id): Path<i64>) -> Response {
    let db = db.read().await;
    match db.kos.get(&id) {
        Some(kos) => ok(kos_json(kos)),
        None => http_err(StatusCode::NOT_FOUND, "Kos not found"),
    }
}

async fn kos_reviews(State(db): State<SharedDb>, Path(id): Path<i64>) -> Response {
    let db = db.read().await;
    if !db.kos.contains_key(&id) {
        return http_err(StatusCode::NOT_FOUND, "Kos not found");
    }
    let reviews = db.reviews.get(&id).cloned().unwrap_or_default();
    ok(Value::Array(reviews))
}

// --- bookings ---

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookingInput {
    kos_id: i64,
    booking_type: String,
    room_quantity: u32,
    #[serde(default)]
    note: Option<String>,
}

async fn create_booking(
    State(db): State<SharedDb>,
    headers: HeaderMap,
    Json(input): Json<BookingInput>,
) -> Response {
    let mut db = db.write().await;
    let user_id = match authorize(&db, &headers) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let price = match db.kos.get(&input.kos_id) {
        Some(kos) => kos.price_per_month,
        None => return http_err(StatusCode::NOT_FOUND, "Kos not found"),
    };
    let id = db.allocate_id();
    let booking = BookingRecord {
        id,
        user_id,
        kos_id: input.kos_id,
        booking_type: input.booking_type,
        room_quantity: input.room_quantity,
        total_price: price * i64::from(input.room_quantity),
        status: "pending".to_string(),
        note: input.note,
        created_at: "2026-02-01T09:00:00Z".to_string(),
    };
    let body = booking_json(&booking, &db);
    db.bookings.insert(id, booking);
    ok(body)
}

async fn list_bookings(State(db): State<SharedDb>, headers: HeaderMap) -> Response {
    let db = db.read().await;
    let user_id = match authorize(&db, &headers) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let mut bookings: Vec<&BookingRecord> = db
        .bookings
        .values()
        .filter(|b| b.user_id == user_id)
        .collect();
    bookings.sort_by_key(|b| b.id);
    ok(Value::Array(
        bookings.into_iter().map(|b| booking_json(b, &db)).collect(),
    ))
}

async fn get_booking(
    State(db): State<SharedDb>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    let db = db.read().await;
    let user_id = match authorize(&db, &headers) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    match db.bookings.get(&id).filter(|b| b.user_id == user_id) {
        Some(booking) => ok(booking_json(booking, &db)),
        None => http_err(StatusCode::NOT_FOUND, "Booking not found"),
    }
}

async fn cancel_booking(
    State(db): State<SharedDb>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    let mut db = db.write().await;
    let user_id = match authorize(&db, &headers) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    match db.bookings.get_mut(&id) {
        Some(booking) if booking.user_id == user_id => {
            booking.status = "cancelled".to_string();
            ok_msg("Booking cancelled")
        }
        _ => http_err(StatusCode::NOT_FOUND, "Booking not found"),
    }
}

// --- favorites ---

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FavoriteInput {
    kos_id: i64,
}

async fn list_favorites(State(db): State<SharedDb>, headers: HeaderMap) -> Response {
    let db = db.read().await;
    let user_id = match authorize(&db, &headers) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let mut favorites: Vec<&FavoriteRecord> = db
        .favorites
        .values()
        .filter(|f| f.user_id == user_id)
        .collect();
    favorites.sort_by_key(|f| f.id);
    ok(Value::Array(
        favorites
            .into_iter()
            .map(|f| favorite_json(f, &db))
            .collect(),
    ))
}

async fn add_favorite(
    State(db): State<SharedDb>,
    headers: HeaderMap,
    Json(input): Json<FavoriteInput>,
) -> Response {
    let mut db = db.write().await;
    let user_id = match authorize(&db, &headers) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    if !db.kos.contains_key(&input.kos_id) {
        return http_err(StatusCode::NOT_FOUND, "Kos not found");
    }
    if db
        .favorites
        .values()
        .any(|f| f.user_id == user_id && f.kos_id == input.kos_id)
    {
        return fail("Already in favorites");
    }
    let id = db.allocate_id();
    let favorite = FavoriteRecord {
        id,
        user_id,
        kos_id: input.kos_id,
        created_at: "2026-02-01T09:00:00Z".to_string(),
    };
    let body = favorite_json(&favorite, &db);
    db.favorites.insert(id, favorite);
    ok(body)
}

async fn remove_favorite(
    State(db): State<SharedDb>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    let mut db = db.write().await;
    let user_id = match authorize(&db, &headers) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    match db.favorites.get(&id) {
        Some(favorite) if favorite.user_id == user_id => {
            db.favorites.remove(&id);
            ok_msg("Favorite removed")
        }
        _ => http_err(StatusCode::NOT_FOUND, "Favorite not found"),
    }
}
