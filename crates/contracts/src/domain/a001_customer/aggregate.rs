use crate::domain::common::{blank_to_none, default_true, opt_str, EntityId};
use crate::shared::list_query::Searchable;
use crate::shared::status::ActiveFlag;
use crate::shared::validation::missing_required;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

pub const ENTITY_NAME: &str = "顧客";
pub const LIST_NAME: &str = "顧客管理";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
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
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Customer {
    pub fn active_flag(&self) -> ActiveFlag {
        ActiveFlag::from(self.is_active)
    }
}

impl Searchable for Customer {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::from(self.code.as_str()),
            Cow::from(self.name.as_str()),
            Cow::from(opt_str(&self.contact_person)),
        ]
    }

    fn status_key(&self) -> Option<String> {
        Some(if self.is_active { "active" } else { "inactive" }.to_string())
    }
}

/// Form state of the customer dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerDto {
    pub id: Option<EntityId>,
    pub code: String,
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub is_active: bool,
}

impl Default for CustomerDto {
    fn default() -> Self {
        Self {
            id: None,
            code: String::new(),
            name: String::new(),
            contact_person: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            is_active: true,
        }
    }
}

impl From<&Customer> for CustomerDto {
    fn from(c: &Customer) -> Self {
        Self {
            id: Some(c.id),
            code: c.code.clone(),
            name: c.name.clone(),
            contact_person: opt_str(&c.contact_person).to_string(),
            email: opt_str(&c.email).to_string(),
            phone: opt_str(&c.phone).to_string(),
            address: opt_str(&c.address).to_string(),
            is_active: c.is_active,
        }
    }
}

impl CustomerDto {
    pub fn missing_required(&self) -> Vec<&'static str> {
        missing_required(&[("顧客コード", self.code.as_str()), ("顧客名", self.name.as_str())])
    }

    pub fn to_payload(&self) -> CustomerPayload {
        CustomerPayload {
            code: self.code.trim().to_string(),
            name: self.name.trim().to_string(),
            contact_person: blank_to_none(&self.contact_person),
            email: blank_to_none(&self.email),
            phone: blank_to_none(&self.phone),
            address: blank_to_none(&self.address),
            is_active: self.is_active,
        }
    }
}

/// Body of `POST /api/customers` and `PUT /api/customers/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerPayload {
    pub code: String,
    pub name: String,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::{filter_records, ListQuery};

    fn customer(id: i64, code: &str, name: &str, contact: Option<&str>) -> Customer {
        Customer {
            id,
            code: code.into(),
            name: name.into(),
            contact_person: contact.map(str::to_string),
            email: None,
            phone: None,
            address: None,
            is_active: true,
        }
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let c: Customer =
            serde_json::from_str(r#"{"id":1,"code":"C001","name":"山田商事"}"#).unwrap();
        assert!(c.is_active);
        assert_eq!(c.contact_person, None);
    }

    #[test]
    fn test_search_by_name_code_or_contact() {
        let rows = vec![
            customer(1, "C001", "Yamada Corp", None),
            customer(2, "C002", "鈴木商店", Some("yamada")),
            customer(3, "YMD-3", "田中", None),
            customer(4, "C004", "佐藤", Some("佐藤")),
        ];
        let mut query = ListQuery::default();
        query.set_text("YAMADA");
        let ids: Vec<i64> = filter_records(&rows, &query).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_form_required_fields() {
        let mut dto = CustomerDto::default();
        assert_eq!(dto.missing_required(), vec!["顧客コード", "顧客名"]);
        dto.code = "C010".into();
        dto.name = "新規顧客".into();
        assert!(dto.missing_required().is_empty());
    }

    #[test]
    fn test_payload_drops_blank_optionals() {
        let mut dto = CustomerDto::from(&customer(5, "C005", "高橋", Some("高橋 次郎")));
        dto.email = "  ".into();
        let payload = dto.to_payload();
        assert_eq!(payload.email, None);
        assert_eq!(payload.contact_person.as_deref(), Some("高橋 次郎"));
    }
}
