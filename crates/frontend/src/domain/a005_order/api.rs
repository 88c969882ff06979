use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a003_item::aggregate::Item;
use contracts::domain::a005_order::aggregate::{Order, OrderPayload};
use contracts::domain::common::EntityId;
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::ApiClient;
use crate::shared::date_utils::today;
use crate::shared::mock_data;

pub async fn fetch_orders(api: &ApiClient) -> Result<Vec<Order>, ApiError> {
    if api.use_mock_data() {
        return Ok(mock_data::orders(today()));
    }
    api.get_json("/api/orders", "注文一覧の取得に失敗しました").await
}

pub async fn fetch_order(api: &ApiClient, id: EntityId) -> Result<Order, ApiError> {
    if api.use_mock_data() {
        return mock_data::orders(today())
            .into_iter()
            .find(|o| o.id == id)
            .ok_or_else(|| ApiError::Http {
                status: 404,
                message: "注文が見つかりません".to_string(),
            });
    }
    api.get_json(&format!("/api/orders/{}", id), "注文の取得に失敗しました")
        .await
}

pub async fn create_order(api: &ApiClient, payload: &OrderPayload) -> Result<Order, ApiError> {
    api.post_json("/api/orders", payload, "注文の登録に失敗しました").await
}

pub async fn delete_order(api: &ApiClient, id: EntityId) -> Result<(), ApiError> {
    api.delete(&format!("/api/orders/{}", id), "注文の削除に失敗しました").await
}

/// Customers and parts offered by the new-order wizard.
pub async fn fetch_order_options(api: &ApiClient) -> Result<(Vec<Customer>, Vec<Item>), ApiError> {
    let customers = crate::domain::a001_customer::api::fetch_customers(api).await?;
    let items = crate::domain::a003_item::api::fetch_items(api).await?;
    Ok((
        customers.into_iter().filter(|c| c.is_active).collect(),
        items.into_iter().filter(|i| i.is_active).collect(),
    ))
}
