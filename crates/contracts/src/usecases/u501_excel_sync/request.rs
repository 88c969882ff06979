use serde::{Deserialize, Serialize};

pub const UPLOAD_SUCCESS_MESSAGE: &str = "注文ファイルのアップロードを受け付けました";
pub const ACCEPTED_EXTENSIONS: [&str; 2] = [".xlsx", ".xls"];

/// Template offered by `GET /api/excel/generate-template`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    Order,
    Inventory,
}

impl TemplateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Order => "order",
            TemplateKind::Inventory => "inventory",
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            TemplateKind::Order => "発注テンプレートダウンロード",
            TemplateKind::Inventory => "在庫テンプレートダウンロード",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            TemplateKind::Order => "order_template.xlsx",
            TemplateKind::Inventory => "inventory_template.xlsx",
        }
    }
}

/// Whether `file_name` has one of the accepted spreadsheet extensions.
pub fn is_excel_file(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    ACCEPTED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excel_extension_check() {
        assert!(is_excel_file("注文_2024.xlsx"));
        assert!(is_excel_file("ORDERS.XLS"));
        assert!(!is_excel_file("orders.csv"));
        assert!(!is_excel_file("xlsx"));
    }

    #[test]
    fn test_template_kinds() {
        assert_eq!(TemplateKind::Inventory.as_str(), "inventory");
        assert_eq!(TemplateKind::Order.file_name(), "order_template.xlsx");
    }
}
