use crate::shared::validation::ValidationError;
use chrono::NaiveDate;

pub const EXPORT_ORDERS_STARTED: &str = "注文データのエクスポートタスクを開始しました";
pub const IMPORT_ORDERS_STARTED: &str = "注文データのインポートタスクを開始しました";
pub const EXPORT_MASTER_STARTED: &str = "マスターデータのエクスポートタスクを開始しました";

/// Date range of `POST /api/access/export-orders`, sent as multipart fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOrdersRequest {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
}

impl ExportOrdersRequest {
    /// Parses `YYYY-MM-DD` inputs; the range must not be inverted.
    pub fn parse(from: &str, to: &str) -> Result<Self, ValidationError> {
        let from_date = parse_date("開始日", from)?;
        let to_date = parse_date("終了日", to)?;
        if from_date > to_date {
            return Err(ValidationError::Invalid(
                "開始日は終了日以前の日付を指定してください".to_string(),
            ));
        }
        Ok(Self { from_date, to_date })
    }

    pub fn form_fields(&self) -> [(&'static str, String); 2] {
        [
            ("from_date", self.from_date.format("%Y-%m-%d").to_string()),
            ("to_date", self.to_date.format("%Y-%m-%d").to_string()),
        ]
    }
}

fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ValidationError::Invalid(format!("{}の形式が正しくありません", field)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range() {
        let req = ExportOrdersRequest::parse("2024-04-01", "2024-04-30").unwrap();
        assert_eq!(req.form_fields()[0], ("from_date", "2024-04-01".to_string()));
        assert!(ExportOrdersRequest::parse("2024-04-01", "2024-04-01").is_ok());
    }

    #[test]
    fn test_invalid_ranges() {
        assert_eq!(
            ExportOrdersRequest::parse("", "2024-04-30"),
            Err(ValidationError::Required("開始日"))
        );
        assert!(ExportOrdersRequest::parse("2024-05-01", "2024-04-30").is_err());
        assert!(ExportOrdersRequest::parse("2024/04/01", "2024-04-30").is_err());
    }
}
