use contracts::dashboards::d401_reports::dto::SalesReport;
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::ApiClient;
use crate::shared::date_utils::today;
use crate::shared::mock_data;

pub async fn fetch_sales_report(api: &ApiClient) -> Result<SalesReport, ApiError> {
    if api.use_mock_data() {
        return Ok(mock_data::sales_report(today()));
    }
    api.get_json("/api/reports/sales", "データの取得に失敗しました").await
}
