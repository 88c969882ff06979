use crate::domain::common::{blank_to_none, opt_str, EntityId};
use crate::shared::list_query::Searchable;
use crate::shared::status::{HasStatusDisplay, StatusDisplay, StatusTone};
use crate::shared::validation::missing_required;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

pub const ENTITY_NAME: &str = "取引先";
pub const LIST_NAME: &str = "取引先管理";

/// Trading status of a supplier. Unrecognized wire values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SupplierStatus {
    #[default]
    Active,
    Inactive,
    Unknown(String),
}

impl SupplierStatus {
    pub const SELECTABLE: [SupplierStatus; 2] = [SupplierStatus::Active, SupplierStatus::Inactive];

    pub fn as_str(&self) -> &str {
        match self {
            SupplierStatus::Active => "active",
            SupplierStatus::Inactive => "inactive",
            SupplierStatus::Unknown(raw) => raw,
        }
    }
}

impl From<String> for SupplierStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "active" => SupplierStatus::Active,
            "inactive" => SupplierStatus::Inactive,
            _ => SupplierStatus::Unknown(value),
        }
    }
}

impl From<SupplierStatus> for String {
    fn from(status: SupplierStatus) -> Self {
        status.as_str().to_string()
    }
}

impl HasStatusDisplay for SupplierStatus {
    fn display(&self) -> StatusDisplay {
        match self {
            SupplierStatus::Active => StatusDisplay::new("取引中", StatusTone::Success),
            SupplierStatus::Inactive => StatusDisplay::new("取引停止", StatusTone::Neutral),
            SupplierStatus::Unknown(raw) => StatusDisplay::new(raw.clone(), StatusTone::Neutral),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: EntityId,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub status: SupplierStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Searchable for Supplier {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::from(self.code.as_str()),
            Cow::from(self.name.as_str()),
            Cow::from(opt_str(&self.contact_person)),
        ]
    }

    fn status_key(&self) -> Option<String> {
        Some(self.status.as_str().to_string())
    }
}

/// Form state of the supplier dialog (取引先を追加 / 取引先を編集).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SupplierDto {
    pub id: Option<EntityId>,
    pub code: String,
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub status: SupplierStatus,
    pub notes: String,
}

impl From<&Supplier> for SupplierDto {
    fn from(s: &Supplier) -> Self {
        Self {
            id: Some(s.id),
            code: s.code.clone(),
            name: s.name.clone(),
            contact_person: opt_str(&s.contact_person).to_string(),
            email: opt_str(&s.email).to_string(),
            phone: opt_str(&s.phone).to_string(),
            address: opt_str(&s.address).to_string(),
            status: s.status.clone(),
            notes: opt_str(&s.notes).to_string(),
        }
    }
}

impl SupplierDto {
    pub fn title(&self) -> &'static str {
        if self.id.is_some() {
            "取引先を編集"
        } else {
            "取引先を追加"
        }
    }

    pub fn missing_required(&self) -> Vec<&'static str> {
        missing_required(&[
            ("取引先コード", self.code.as_str()),
            ("取引先名", self.name.as_str()),
        ])
    }

    pub fn to_payload(&self) -> SupplierPayload {
        SupplierPayload {
            code: self.code.trim().to_string(),
            name: self.name.trim().to_string(),
            contact_person: blank_to_none(&self.contact_person),
            email: blank_to_none(&self.email),
            phone: blank_to_none(&self.phone),
            address: blank_to_none(&self.address),
            status: self.status.clone(),
            notes: blank_to_none(&self.notes),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierPayload {
    pub code: String,
    pub name: String,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub status: SupplierStatus,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip_and_unknown() {
        let s: Supplier = serde_json::from_str(
            r#"{"id":3,"code":"S003","name":"東京部品","status":"suspended"}"#,
        )
        .unwrap();
        assert_eq!(s.status, SupplierStatus::Unknown("suspended".into()));
        assert_eq!(s.status.display().label, "suspended");
        assert_eq!(s.status.display().tone, StatusTone::Neutral);

        let json = serde_json::to_string(&SupplierStatus::Inactive).unwrap();
        assert_eq!(json, r#""inactive""#);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(SupplierStatus::Active.display().label, "取引中");
        assert_eq!(SupplierStatus::Inactive.display().label, "取引停止");
    }

    #[test]
    fn test_dialog_title_and_required() {
        let mut dto = SupplierDto::default();
        assert_eq!(dto.title(), "取引先を追加");
        assert_eq!(dto.missing_required().len(), 2);
        dto.id = Some(1);
        dto.code = "S001".into();
        dto.name = "大阪金属".into();
        assert_eq!(dto.title(), "取引先を編集");
        assert!(dto.missing_required().is_empty());
        assert_eq!(dto.to_payload().status, SupplierStatus::Active);
    }

    #[test]
    fn test_status_filter_key() {
        let s = Supplier {
            id: 1,
            code: "S1".into(),
            name: "n".into(),
            contact_person: None,
            email: None,
            phone: None,
            address: None,
            status: SupplierStatus::Inactive,
            notes: None,
        };
        assert_eq!(s.status_key().as_deref(), Some("inactive"));
    }
}
