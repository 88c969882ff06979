use serde_json::Value;
use thiserror::Error;

/// Failure of a REST call, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport failure: the request never produced a response.
    #[error("通信エラー: {0}")]
    Network(String),

    /// Non-2xx response. `message` is taken from the body when available.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// The body could not be decoded into the expected shape.
    #[error("応答の解析に失敗しました: {0}")]
    Parse(String),
}

impl ApiError {
    pub fn http(status: u16, body: &str, fallback: &str) -> Self {
        ApiError::Http {
            status,
            message: error_message_from_body(body)
                .unwrap_or_else(|| format!("{} (HTTP {})", fallback, status)),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Extracts a human readable message from an error body.
///
/// Understands `{"detail": "..."}`, validation lists
/// `{"detail": [{"msg": "..."}, ...]}` and `{"message": "..."}`.
pub fn error_message_from_body(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail") {
        Some(Value::String(detail)) if !detail.is_empty() => return Some(detail.clone()),
        Some(Value::Array(entries)) => {
            let messages: Vec<&str> = entries
                .iter()
                .filter_map(|e| e.get("msg").and_then(Value::as_str))
                .collect();
            if !messages.is_empty() {
                return Some(messages.join(", "));
            }
        }
        _ => {}
    }
    value
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_string() {
        let err = ApiError::http(400, r#"{"detail":"在庫が不足しています"}"#, "保存に失敗しました");
        assert_eq!(err.to_string(), "在庫が不足しています");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_detail_list() {
        let body = r#"{"detail":[{"loc":["body","code"],"msg":"field required"},{"msg":"too short"}]}"#;
        assert_eq!(
            error_message_from_body(body).as_deref(),
            Some("field required, too short")
        );
    }

    #[test]
    fn test_message_field_and_fallback() {
        assert_eq!(
            error_message_from_body(r#"{"message":"not found"}"#).as_deref(),
            Some("not found")
        );
        let err = ApiError::http(500, "<html>oops</html>", "データの取得に失敗しました");
        assert_eq!(err.to_string(), "データの取得に失敗しました (HTTP 500)");
    }

    #[test]
    fn test_unauthorized() {
        assert!(ApiError::http(401, "", "x").is_unauthorized());
        assert!(!ApiError::Network("offline".into()).is_unauthorized());
        assert_eq!(
            ApiError::Network("offline".into()).to_string(),
            "通信エラー: offline"
        );
    }
}
