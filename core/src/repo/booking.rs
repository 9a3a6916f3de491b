//! Booking creation and management. All routes require a bearer token; the
//! transport injects it from the session context.

use crate::adapter::safe_api_call;
use crate::domain::Booking;
use crate::dto::{BookingDto, CreateBookingRequest};
use crate::mapper::map_booking;
use crate::result::ApiResult;
use crate::transport::Transport;

pub struct BookingRepository {
    transport: Transport,
}

impl BookingRepository {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub async fn create(&self, input: &CreateBookingRequest) -> ApiResult<Booking> {
        let result: ApiResult<BookingDto> =
            safe_api_call(|| self.transport.post("/bookings", input)).await;
        result.map(map_booking)
    }

    pub async fn list_mine(&self) -> ApiResult<Vec<Booking>> {
        let result: ApiResult<Vec<BookingDto>> =
            safe_api_call(|| self.transport.get("/bookings")).await;
        result.map(|dtos| dtos.into_iter().map(map_booking).collect())
    }

    pub async fn detail(&self, id: i64) -> ApiResult<Booking> {
        let path = format!("/bookings/{id}");
        let result: ApiResult<BookingDto> = safe_api_call(|| self.transport.get(&path)).await;
        result.map(map_booking)
    }

    pub async fn cancel(&self, id: i64) -> ApiResult<()> {
        let path = format!("/bookings/{id}");
        safe_api_call(|| self.transport.delete(&path)).await
    }
}
