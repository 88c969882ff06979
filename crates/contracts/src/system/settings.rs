//! Settings screen payloads: profile, system preferences and security.

use crate::domain::common::blank_to_none;
use crate::shared::validation::{require_all, ValidationError};
use serde::{Deserialize, Serialize};

/// `(value, label)` pairs offered by the language selector.
pub const LANGUAGES: [(&str, &str); 3] = [("ja", "日本語"), ("en", "English"), ("zh", "中文")];

pub const TIMEZONES: [(&str, &str); 4] = [
    ("Asia/Tokyo", "東京 (GMT+9)"),
    ("Asia/Seoul", "ソウル (GMT+9)"),
    ("Asia/Shanghai", "上海 (GMT+8)"),
    ("Asia/Singapore", "シンガポール (GMT+8)"),
];

pub const DATE_FORMATS: [&str; 3] = ["YYYY/MM/DD", "DD/MM/YYYY", "MM/DD/YYYY"];

pub const SESSION_TIMEOUT_MIN: u32 = 5;
pub const SESSION_TIMEOUT_MAX: u32 = 120;
pub const SESSION_TIMEOUT_DEFAULT: u32 = 30;
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Body of `PUT /api/users/profile`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
}

impl ProfileUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_all(&[("氏名", self.name.as_str()), ("メールアドレス", self.email.as_str())])?;
        if !self.email.contains('@') {
            return Err(ValidationError::Invalid(
                "メールアドレスの形式が正しくありません".to_string(),
            ));
        }
        Ok(())
    }

    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.as_deref().and_then(blank_to_none),
            position: self.position.as_deref().and_then(blank_to_none),
        }
    }
}

/// Response of `POST /api/users/avatar`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvatarUploaded {
    #[serde(rename = "avatarUrl", alias = "avatar_url")]
    pub avatar_url: String,
}

/// `GET/PUT /api/settings/system`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSettings {
    pub language: String,
    pub timezone: String,
    pub date_format: String,
    pub email_notifications: bool,
    pub push_notifications: bool,
}

impl Default for SystemSettings {
    fn default() -> Self {
        Self {
            language: LANGUAGES[0].0.to_string(),
            timezone: TIMEZONES[0].0.to_string(),
            date_format: DATE_FORMATS[0].to_string(),
            email_notifications: true,
            push_notifications: false,
        }
    }
}

impl SystemSettings {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !LANGUAGES.iter().any(|(v, _)| *v == self.language) {
            return Err(ValidationError::Invalid(format!(
                "未対応の言語です: {}",
                self.language
            )));
        }
        if !TIMEZONES.iter().any(|(v, _)| *v == self.timezone) {
            return Err(ValidationError::Invalid(format!(
                "未対応のタイムゾーンです: {}",
                self.timezone
            )));
        }
        if !DATE_FORMATS.contains(&self.date_format.as_str()) {
            return Err(ValidationError::Invalid(format!(
                "未対応の日付形式です: {}",
                self.date_format
            )));
        }
        Ok(())
    }
}

/// `PUT /api/settings/security`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritySettings {
    pub two_factor_enabled: bool,
    pub session_timeout: u32,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            two_factor_enabled: false,
            session_timeout: SESSION_TIMEOUT_DEFAULT,
        }
    }
}

impl SecuritySettings {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(SESSION_TIMEOUT_MIN..=SESSION_TIMEOUT_MAX).contains(&self.session_timeout) {
            return Err(ValidationError::OutOfRange {
                field: "セッションタイムアウト（分）",
                min: i64::from(SESSION_TIMEOUT_MIN),
                max: i64::from(SESSION_TIMEOUT_MAX),
            });
        }
        Ok(())
    }
}

/// Password change form. Only the current and new password are sent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Body of `PUT /api/settings/password`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChangeRequest {
    pub current_password: String,
    pub new_password: String,
}

impl PasswordChange {
    pub fn validate(&self) -> Result<PasswordChangeRequest, ValidationError> {
        require_all(&[
            ("現在のパスワード", self.current_password.as_str()),
            ("新しいパスワード", self.new_password.as_str()),
        ])?;
        if self.new_password.chars().count() < PASSWORD_MIN_LENGTH {
            return Err(ValidationError::TooShort {
                field: "新しいパスワード",
                min: PASSWORD_MIN_LENGTH,
            });
        }
        if self.new_password != self.confirm_password {
            return Err(ValidationError::Invalid(
                "新しいパスワードと確認用パスワードが一致しません".to_string(),
            ));
        }
        Ok(PasswordChangeRequest {
            current_password: self.current_password.clone(),
            new_password: self.new_password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_settings_wire_and_defaults() {
        let s = SystemSettings::default();
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["dateFormat"], "YYYY/MM/DD");
        assert_eq!(json["emailNotifications"], true);
        assert!(s.validate().is_ok());

        let bad = SystemSettings {
            timezone: "Europe/Paris".into(),
            ..SystemSettings::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_session_timeout_bounds() {
        for (minutes, ok) in [(4, false), (5, true), (30, true), (120, true), (121, false)] {
            let s = SecuritySettings {
                two_factor_enabled: false,
                session_timeout: minutes,
            };
            assert_eq!(s.validate().is_ok(), ok, "timeout {}", minutes);
        }
        assert_eq!(SecuritySettings::default().session_timeout, 30);
    }

    #[test]
    fn test_password_change() {
        let mut form = PasswordChange {
            current_password: "old-pass".into(),
            new_password: "short".into(),
            confirm_password: "short".into(),
        };
        assert!(matches!(form.validate(), Err(ValidationError::TooShort { .. })));

        form.new_password = "long-enough".into();
        let err = form.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "新しいパスワードと確認用パスワードが一致しません"
        );

        form.confirm_password = "long-enough".into();
        let req = form.validate().unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["newPassword"], "long-enough");
        assert!(json.get("confirmPassword").is_none());
    }

    #[test]
    fn test_profile_validation() {
        let mut p = ProfileUpdate {
            name: "山田 太郎".into(),
            email: "taro".into(),
            phone: Some("  ".into()),
            position: None,
        };
        assert!(p.validate().is_err());
        p.email = "taro@example.com".into();
        assert!(p.validate().is_ok());
        assert_eq!(p.normalized().phone, None);
    }

    #[test]
    fn test_avatar_response_shapes() {
        let a: AvatarUploaded = serde_json::from_str(r#"{"avatarUrl":"/static/a.png"}"#).unwrap();
        let b: AvatarUploaded = serde_json::from_str(r#"{"avatar_url":"/static/a.png"}"#).unwrap();
        assert_eq!(a, b);
    }
}
