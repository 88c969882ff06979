use contracts::domain::a003_item::aggregate::{Item, ItemPayload};
use contracts::domain::common::EntityId;
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::ApiClient;
use crate::shared::mock_data;

pub async fn fetch_items(api: &ApiClient) -> Result<Vec<Item>, ApiError> {
    if api.use_mock_data() {
        return Ok(mock_data::items());
    }
    api.get_json("/api/items", "部品一覧の取得に失敗しました").await
}

/// PUT when `id` is set, POST otherwise.
pub async fn save_item(
    api: &ApiClient,
    id: Option<EntityId>,
    payload: &ItemPayload,
) -> Result<Item, ApiError> {
    match id {
        Some(id) => {
            api.put_json(&format!("/api/items/{}", id), payload, "部品の更新に失敗しました")
                .await
        }
        None => api.post_json("/api/items", payload, "部品の登録に失敗しました").await,
    }
}

pub async fn delete_item(api: &ApiClient, id: EntityId) -> Result<(), ApiError> {
    api.delete(&format!("/api/items/{}", id), "部品の削除に失敗しました").await
}
