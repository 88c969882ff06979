//! Types shared by the integration use cases.

use serde::{Deserialize, Serialize};

/// Acknowledgement returned when the backend accepts a sync task.
///
/// The integration endpoints are not schema-validated beyond success, so
/// every field is optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaskAccepted {
    #[serde(default)]
    pub task_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl TaskAccepted {
    /// Parses a response body, treating anything unexpected as an empty ack.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// Server message, or `fallback` when none was sent.
    pub fn message_or(&self, fallback: &str) -> String {
        match self.message.as_deref() {
            Some(m) if !m.trim().is_empty() => m.to_string(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_body_tolerates_any_shape() {
        assert_eq!(TaskAccepted::from_body(""), TaskAccepted::default());
        assert_eq!(TaskAccepted::from_body("[1,2]"), TaskAccepted::default());
        let ack = TaskAccepted::from_body(r#"{"task_id":"t-1","message":"queued"}"#);
        assert_eq!(ack.task_id.as_deref(), Some("t-1"));
        assert_eq!(ack.message_or("x"), "queued");
        assert_eq!(TaskAccepted::default().message_or("開始しました"), "開始しました");
    }
}
