use contracts::domain::a002_supplier::aggregate::{Supplier, SupplierPayload};
use contracts::domain::common::EntityId;
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::ApiClient;
use crate::shared::mock_data;

pub async fn fetch_suppliers(api: &ApiClient) -> Result<Vec<Supplier>, ApiError> {
    if api.use_mock_data() {
        return Ok(mock_data::suppliers());
    }
    api.get_json("/api/suppliers", "取引先一覧の取得に失敗しました").await
}

pub async fn create_supplier(api: &ApiClient, payload: &SupplierPayload) -> Result<Supplier, ApiError> {
    api.post_json("/api/suppliers", payload, "取引先の登録に失敗しました").await
}

pub async fn update_supplier(
    api: &ApiClient,
    id: EntityId,
    payload: &SupplierPayload,
) -> Result<Supplier, ApiError> {
    api.put_json(&format!("/api/suppliers/{}", id), payload, "取引先の更新に失敗しました")
        .await
}

pub async fn delete_supplier(api: &ApiClient, id: EntityId) -> Result<(), ApiError> {
    api.delete(&format!("/api/suppliers/{}", id), "取引先の削除に失敗しました").await
}
