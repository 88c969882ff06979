use thiserror::Error;

/// Client-side form validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0}は必須です")]
    Required(&'static str),

    #[error("{field}は{min}文字以上で入力してください")]
    TooShort { field: &'static str, min: usize },

    #[error("{field}は{min}から{max}の範囲で入力してください")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    #[error("{0}")]
    Invalid(String),
}

/// Names of required fields whose value is blank.
///
/// Forms refuse to submit while this is non-empty.
pub fn missing_required<'a>(fields: &[(&'a str, &str)]) -> Vec<&'a str> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect()
}

/// First missing required field as an error.
pub fn require_all(fields: &[(&'static str, &str)]) -> Result<(), ValidationError> {
    match missing_required(fields).first().copied() {
        Some(name) => Err(ValidationError::Required(name)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required() {
        let fields = [("コード", "C001"), ("名称", "  "), ("メール", "")];
        assert_eq!(missing_required(&fields), vec!["名称", "メール"]);
        assert_eq!(
            require_all(&fields),
            Err(ValidationError::Required("名称"))
        );
        assert_eq!(require_all(&[("コード", "X")]), Ok(()));
    }

    #[test]
    fn test_messages() {
        assert_eq!(ValidationError::Required("名称").to_string(), "名称は必須です");
        assert_eq!(
            ValidationError::TooShort { field: "新しいパスワード", min: 8 }.to_string(),
            "新しいパスワードは8文字以上で入力してください"
        );
    }
}
