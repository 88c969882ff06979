use contracts::shared::api_error::ApiError;
use contracts::system::auth::UserInfo;
use contracts::system::settings::{
    AvatarUploaded, PasswordChangeRequest, ProfileUpdate, SecuritySettings, SystemSettings,
};

use crate::shared::api_utils::{form_data, ApiClient};

pub async fn update_profile(api: &ApiClient, profile: &ProfileUpdate) -> Result<UserInfo, ApiError> {
    api.put_json("/api/users/profile", profile, "プロフィールの更新に失敗しました")
        .await
}

/// Multipart field `avatar`. Returns the stored image URL.
pub async fn upload_avatar(api: &ApiClient, file: &web_sys::File) -> Result<String, ApiError> {
    let form = form_data(&[], Some(("avatar", file)))?;
    let body = api
        .post_form("/api/users/avatar", form, "アバターの更新に失敗しました")
        .await?;
    serde_json::from_str::<AvatarUploaded>(&body)
        .map(|a| a.avatar_url)
        .map_err(|e| ApiError::Parse(e.to_string()))
}

pub async fn fetch_system_settings(api: &ApiClient) -> Result<SystemSettings, ApiError> {
    if api.use_mock_data() {
        return Ok(SystemSettings::default());
    }
    api.get_json("/api/settings/system", "システム設定の取得に失敗しました")
        .await
}

pub async fn save_system_settings(api: &ApiClient, settings: &SystemSettings) -> Result<(), ApiError> {
    api.put_no_content("/api/settings/system", settings, "システム設定の保存に失敗しました")
        .await
}

pub async fn save_security_settings(api: &ApiClient, settings: &SecuritySettings) -> Result<(), ApiError> {
    api.put_no_content("/api/settings/security", settings, "セキュリティ設定の保存に失敗しました")
        .await
}

pub async fn change_password(api: &ApiClient, request: &PasswordChangeRequest) -> Result<(), ApiError> {
    api.put_no_content("/api/settings/password", request, "パスワードの変更に失敗しました")
        .await
}
