use contracts::shared::api_error::{error_message_from_body, ApiError};
use contracts::system::auth::{LoginRequest, LoginResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::ApiClient;

const LOGIN_FAILED: &str = "ログインに失敗しました";
const UNEXPECTED: &str = "予期せぬエラーが発生しました";

/// Login with username (e-mail) and password.
///
/// The endpoint expects an OAuth2 password form, so the body is
/// form-encoded and no bearer token is attached.
pub async fn login(api: &ApiClient, username: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { username, password };
    let body = serde_qs::to_string(&request).map_err(|e| format!("{}: {}", UNEXPECTED, e))?;

    let response = Request::post(&api.url("/auth/login"))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| format!("{}: {}", UNEXPECTED, e))?
        .send()
        .await
        .map_err(|e| {
            log::error!("POST /auth/login failed: {}", e);
            UNEXPECTED.to_string()
        })?;

    if !response.ok() {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        log::warn!("Login rejected with HTTP {}", status);
        return Err(error_message_from_body(&text).unwrap_or_else(|| LOGIN_FAILED.to_string()));
    }

    response.json::<LoginResponse>().await.map_err(|e| {
        log::error!("Unexpected login response: {}", e);
        UNEXPECTED.to_string()
    })
}

/// Ask the server whether the stored token is still valid.
pub async fn verify(api: &ApiClient) -> Result<(), ApiError> {
    api.get_ok("/api/auth/verify", "セッションの確認に失敗しました").await
}
