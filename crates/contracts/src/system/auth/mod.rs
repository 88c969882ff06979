use crate::domain::common::EntityId;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Form-encoded body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: EntityId,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default, rename = "avatarUrl", alias = "avatar_url")]
    pub avatar_url: Option<String>,
}

impl UserInfo {
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

fn default_token_type() -> String {
    "bearer".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub user: UserInfo,
}

/// Authenticated session held by the client.
///
/// Idle sessions expire once `timeout_minutes` pass without a successful call.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub access_token: String,
    pub user: UserInfo,
    pub last_activity: DateTime<Utc>,
}

impl Session {
    pub fn new(access_token: String, user: UserInfo, now: DateTime<Utc>) -> Self {
        Self {
            access_token,
            user,
            last_activity: now,
        }
    }

    pub fn from_login(response: LoginResponse, now: DateTime<Utc>) -> Self {
        Self::new(response.access_token, response.user, now)
    }

    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }

    pub fn expires_at(&self, timeout_minutes: u32) -> DateTime<Utc> {
        self.last_activity + Duration::minutes(i64::from(timeout_minutes))
    }

    pub fn is_expired(&self, now: DateTime<Utc>, timeout_minutes: u32) -> bool {
        now >= self.expires_at(timeout_minutes)
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        if now > self.last_activity {
            self.last_activity = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn user() -> UserInfo {
        serde_json::from_str(
            r#"{"id":1,"email":"admin@example.com","name":"管理者","role":"admin","avatarUrl":"/a.png"}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_login_response_defaults() {
        let resp: LoginResponse = serde_json::from_str(
            r#"{"access_token":"abc","user":{"id":2,"email":"u@example.com","name":""}}"#,
        )
        .unwrap();
        assert_eq!(resp.token_type, "bearer");
        assert_eq!(resp.user.display_name(), "u@example.com");
        assert!(!resp.user.is_admin());
    }

    #[test]
    fn test_user_avatar_field() {
        let u = user();
        assert_eq!(u.avatar_url.as_deref(), Some("/a.png"));
        assert!(u.is_admin());
        let json = serde_json::to_value(&u).unwrap();
        assert_eq!(json["avatarUrl"], "/a.png");
    }

    #[test]
    fn test_session_expiry() {
        let t0 = Utc.with_ymd_and_hms(2024, 4, 1, 9, 0, 0).unwrap();
        let mut s = Session::new("tok".into(), user(), t0);
        assert_eq!(s.authorization_header(), "Bearer tok");
        assert!(!s.is_expired(t0 + Duration::minutes(29), 30));
        assert!(s.is_expired(t0 + Duration::minutes(30), 30));

        s.touch(t0 + Duration::minutes(20));
        assert!(!s.is_expired(t0 + Duration::minutes(45), 30));
        s.touch(t0);
        assert_eq!(s.last_activity, t0 + Duration::minutes(20));
    }
}
