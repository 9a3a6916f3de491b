//! Listing browsing and search.

use crate::adapter::safe_api_call;
use crate::domain::{Kos, Review};
use crate::dto::{KosDto, ReviewDto};
use crate::mapper::{map_kos, map_review};
use crate::result::ApiResult;
use crate::transport::Transport;

pub struct KosRepository {
    transport: Transport,
}

impl KosRepository {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub async fn list(&self) -> ApiResult<Vec<Kos>> {
        let result: ApiResult<Vec<KosDto>> =
            safe_api_call(|| self.transport.get("/kos")).await;
        result.map(|dtos| dtos.into_iter().map(map_kos).collect())
    }

    pub async fn search(&self, query: &str) -> ApiResult<Vec<Kos>> {
        let query_params = [("search", query)];
        let result: ApiResult<Vec<KosDto>> =
            safe_api_call(|| self.transport.get_query("/kos", &query_params)).await;
        result.map(|dtos| dtos.into_iter().map(map_kos).collect())
    }

    pub async fn detail(&self, id: &str) -> ApiResult<Kos> {
        let path = format!("/kos/{id}");
        let result: ApiResult<KosDto> = safe_api_call(|| self.transport.get(&path)).await;
        result.map(map_kos)
    }

    pub async fn reviews(&self, id: &str) -> ApiResult<Vec<Review>> {
        let path = format!("/kos/{id}/reviews");
        let result: ApiResult<Vec<ReviewDto>> =
            safe_api_call(|| self.transport.get(&path)).await;
        result.map(|dtos| dtos.into_iter().map(map_review).collect())
    }
}
