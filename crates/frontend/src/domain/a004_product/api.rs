use contracts::domain::a004_product::aggregate::{Product, ProductPayload};
use contracts::domain::common::EntityId;
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::ApiClient;
use crate::shared::mock_data;

pub async fn fetch_products(api: &ApiClient) -> Result<Vec<Product>, ApiError> {
    if api.use_mock_data() {
        return Ok(mock_data::products());
    }
    api.get_json("/api/products", "商品一覧の取得に失敗しました").await
}

pub async fn create_product(api: &ApiClient, payload: &ProductPayload) -> Result<Product, ApiError> {
    api.post_json("/api/products", payload, "商品の登録に失敗しました").await
}

pub async fn update_product(
    api: &ApiClient,
    id: EntityId,
    payload: &ProductPayload,
) -> Result<Product, ApiError> {
    api.put_json(&format!("/api/products/{}", id), payload, "商品の更新に失敗しました")
        .await
}

pub async fn delete_product(api: &ApiClient, id: EntityId) -> Result<(), ApiError> {
    api.delete(&format!("/api/products/{}", id), "商品の削除に失敗しました").await
}
