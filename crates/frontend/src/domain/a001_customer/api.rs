use contracts::domain::a001_customer::aggregate::{Customer, CustomerDto};
use contracts::domain::common::EntityId;
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::ApiClient;
use crate::shared::mock_data;

pub async fn fetch_customers(api: &ApiClient) -> Result<Vec<Customer>, ApiError> {
    if api.use_mock_data() {
        return Ok(mock_data::customers());
    }
    api.get_json("/api/customers", "顧客一覧の取得に失敗しました").await
}

/// POST for new records, PUT for existing ones.
pub async fn save_customer(api: &ApiClient, dto: &CustomerDto) -> Result<Customer, ApiError> {
    let payload = dto.to_payload();
    match dto.id {
        Some(id) => {
            api.put_json(&format!("/api/customers/{}", id), &payload, "顧客の更新に失敗しました")
                .await
        }
        None => api.post_json("/api/customers", &payload, "顧客の登録に失敗しました").await,
    }
}

pub async fn delete_customer(api: &ApiClient, id: EntityId) -> Result<(), ApiError> {
    api.delete(&format!("/api/customers/{}", id), "顧客の削除に失敗しました").await
}
