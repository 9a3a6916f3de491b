//! Favorite management for the signed-in user.

use crate::adapter::safe_api_call;
use crate::domain::FavoriteEntry;
use crate::dto::{AddFavoriteRequest, FavoriteDto};
use crate::mapper::map_favorite;
use crate::result::ApiResult;
use crate::transport::Transport;

pub struct FavoriteRepository {
    transport: Transport,
}

impl FavoriteRepository {
    pub fn new(transport: Transport) -> Self {
        Self { transport }
    }

    pub async fn list(&self) -> ApiResult<Vec<FavoriteEntry>> {
        let result: ApiResult<Vec<FavoriteDto>> =
            safe_api_call(|| self.transport.get("/favorites")).await;
        result.map(|dtos| dtos.into_iter().map(map_favorite).collect())
    }

    pub async fn add(&self, kos_id: i64) -> ApiResult<FavoriteEntry> {
        let payload = AddFavoriteRequest { kos_id };
        let result: ApiResult<FavoriteDto> =
            safe_api_call(|| self.transport.post("/favorites", &payload)).await;
        result.map(map_favorite)
    }

    pub async fn remove(&self, id: i64) -> ApiResult<()> {
        let path = format!("/favorites/{id}");
        safe_api_call(|| self.transport.delete(&path)).await
    }
}
