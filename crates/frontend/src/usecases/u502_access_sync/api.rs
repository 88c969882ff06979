use contracts::shared::api_error::ApiError;
use contracts::usecases::common::TaskAccepted;
use contracts::usecases::u502_access_sync::ExportOrdersRequest;

use crate::shared::api_utils::{form_data, ApiClient};

pub async fn export_orders(api: &ApiClient, request: &ExportOrdersRequest) -> Result<TaskAccepted, ApiError> {
    let form = form_data(&request.form_fields(), None)?;
    let body = api
        .post_form("/api/access/export-orders", form, "注文データのエクスポートに失敗しました")
        .await?;
    Ok(TaskAccepted::from_body(&body))
}

pub async fn import_orders(api: &ApiClient, file: &web_sys::File) -> Result<TaskAccepted, ApiError> {
    let form = form_data(&[], Some(("file", file)))?;
    let body = api
        .post_form("/api/access/import-orders", form, "注文データのインポートに失敗しました")
        .await?;
    Ok(TaskAccepted::from_body(&body))
}

pub async fn export_master(api: &ApiClient) -> Result<TaskAccepted, ApiError> {
    let form = form_data(&[], None)?;
    let body = api
        .post_form("/api/access/export-master", form, "マスターデータのエクスポートに失敗しました")
        .await?;
    Ok(TaskAccepted::from_body(&body))
}
