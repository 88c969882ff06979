use contracts::dashboards::d400_dashboard::dto::DashboardSummary;
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::ApiClient;
use crate::shared::date_utils::today;
use crate::shared::mock_data;

/// `GET /api/dashboard/summary`.
///
/// Backends without the summary endpoint answer 404; the summary is then
/// computed from the mock collections. Every other failure is returned.
pub async fn fetch_summary(api: &ApiClient) -> Result<DashboardSummary, ApiError> {
    if api.use_mock_data() {
        return Ok(mock_data::dashboard_summary(today()));
    }
    let result = api
        .get_json("/api/dashboard/summary", "ダッシュボードの取得に失敗しました")
        .await;
    fallback_on_missing_endpoint(result, || mock_data::dashboard_summary(today()))
}

fn fallback_on_missing_endpoint<T>(
    result: Result<T, ApiError>,
    fallback: impl FnOnce() -> T,
) -> Result<T, ApiError> {
    match result {
        Err(e) if e.status() == Some(404) => {
            log::warn!("dashboard summary endpoint missing, using mock data");
            Ok(fallback())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_404_falls_back() {
        let not_found: Result<u32, ApiError> = Err(ApiError::http(404, "", "x"));
        assert_eq!(fallback_on_missing_endpoint(not_found, || 7), Ok(7));

        let server_error: Result<u32, ApiError> = Err(ApiError::http(500, "", "x"));
        assert!(fallback_on_missing_endpoint(server_error, || 7).is_err());

        let network: Result<u32, ApiError> = Err(ApiError::Network("offline".into()));
        assert!(fallback_on_missing_endpoint(network, || 7).is_err());

        assert_eq!(fallback_on_missing_endpoint(Ok(1), || 7), Ok(1));
    }
}
