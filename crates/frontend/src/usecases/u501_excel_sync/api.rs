use contracts::shared::api_error::ApiError;
use contracts::usecases::common::TaskAccepted;
use contracts::usecases::u501_excel_sync::TemplateKind;

use crate::shared::api_utils::{form_data, ApiClient};

/// `POST /api/excel/upload-order` with the sheet as multipart `file`.
pub async fn upload_order_sheet(api: &ApiClient, file: &web_sys::File) -> Result<TaskAccepted, ApiError> {
    let form = form_data(&[], Some(("file", file)))?;
    let body = api
        .post_form("/api/excel/upload-order", form, "ファイルのアップロードに失敗しました")
        .await?;
    Ok(TaskAccepted::from_body(&body))
}

pub fn template_path(kind: TemplateKind) -> String {
    format!(
        "/api/excel/generate-template?kind={}",
        urlencoding::encode(kind.as_str())
    )
}

pub async fn download_template(api: &ApiClient, kind: TemplateKind) -> Result<Vec<u8>, ApiError> {
    api.get_bytes(&template_path(kind), "テンプレートのダウンロードに失敗しました")
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_path() {
        assert_eq!(
            template_path(TemplateKind::Inventory),
            "/api/excel/generate-template?kind=inventory"
        );
    }
}
