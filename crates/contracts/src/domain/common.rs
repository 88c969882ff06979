//! Helpers shared by the domain records.

/// Backend primary key.
pub type EntityId = i64;

/// Optional text field as `&str`, empty when absent.
pub fn opt_str(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

/// Form text to an optional wire value: blank becomes `None`.
pub fn blank_to_none(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub(crate) fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_to_none() {
        assert_eq!(blank_to_none("   "), None);
        assert_eq!(blank_to_none(" 東京都 "), Some("東京都".to_string()));
        assert_eq!(opt_str(&None), "");
    }
}
