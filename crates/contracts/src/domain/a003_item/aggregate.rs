use crate::domain::common::{blank_to_none, default_true, opt_str, EntityId};
use crate::shared::list_query::Searchable;
use crate::shared::status::{ActiveFlag, StockStatus};
use crate::shared::validation::{missing_required, ValidationError};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

pub const ENTITY_NAME: &str = "部品";
pub const LIST_NAME: &str = "部品管理";

fn default_unit() -> String {
    "個".to_string()
}

/// A purchasable part (部品).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: EntityId,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub specification: Option<String>,
    #[serde(default = "default_unit")]
    pub unit: String,
    #[serde(default)]
    pub unit_price: f64,
    #[serde(default)]
    pub min_stock: i64,
    #[serde(default)]
    pub current_stock: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Item {
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::classify(self.current_stock, self.min_stock)
    }

    pub fn active_flag(&self) -> ActiveFlag {
        ActiveFlag::from(self.is_active)
    }
}

impl Searchable for Item {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::from(self.code.as_str()),
            Cow::from(self.name.as_str()),
            Cow::from(opt_str(&self.specification)),
        ]
    }

    fn status_key(&self) -> Option<String> {
        Some(self.stock_status().key().to_string())
    }
}

/// Form state of the item dialog. Numbers are kept as typed text.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDto {
    pub id: Option<EntityId>,
    pub code: String,
    pub name: String,
    pub description: String,
    pub specification: String,
    pub unit: String,
    pub unit_price: String,
    pub min_stock: String,
    pub current_stock: String,
    pub is_active: bool,
}

impl Default for ItemDto {
    fn default() -> Self {
        Self {
            id: None,
            code: String::new(),
            name: String::new(),
            description: String::new(),
            specification: String::new(),
            unit: default_unit(),
            unit_price: "0".into(),
            min_stock: "0".into(),
            current_stock: "0".into(),
            is_active: true,
        }
    }
}

impl From<&Item> for ItemDto {
    fn from(i: &Item) -> Self {
        Self {
            id: Some(i.id),
            code: i.code.clone(),
            name: i.name.clone(),
            description: opt_str(&i.description).to_string(),
            specification: opt_str(&i.specification).to_string(),
            unit: i.unit.clone(),
            unit_price: i.unit_price.to_string(),
            min_stock: i.min_stock.to_string(),
            current_stock: i.current_stock.to_string(),
            is_active: i.is_active,
        }
    }
}

impl ItemDto {
    pub fn missing_required(&self) -> Vec<&'static str> {
        missing_required(&[("部品コード", self.code.as_str()), ("部品名", self.name.as_str())])
    }

    pub fn to_payload(&self) -> Result<ItemPayload, ValidationError> {
        Ok(ItemPayload {
            code: self.code.trim().to_string(),
            name: self.name.trim().to_string(),
            description: blank_to_none(&self.description),
            specification: blank_to_none(&self.specification),
            unit: blank_to_none(&self.unit).unwrap_or_else(default_unit),
            unit_price: parse_number("単価", &self.unit_price)?,
            min_stock: parse_number::<i64>("最小在庫", &self.min_stock)?,
            current_stock: parse_number::<i64>("現在庫", &self.current_stock)?,
            is_active: self.is_active,
        })
    }
}

/// Parses a numeric form field; blank is zero.
pub(crate) fn parse_number<T>(field: &'static str, raw: &str) -> Result<T, ValidationError>
where
    T: std::str::FromStr + Default,
{
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(T::default());
    }
    trimmed
        .parse::<T>()
        .map_err(|_| ValidationError::Invalid(format!("{}には数値を入力してください", field)))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemPayload {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub specification: Option<String>,
    pub unit: String,
    pub unit_price: f64,
    pub min_stock: i64,
    pub current_stock: i64,
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(current: i64, min: i64) -> Item {
        Item {
            id: 1,
            code: "P-001".into(),
            name: "ボルト M6".into(),
            description: None,
            specification: Some("SUS304".into()),
            unit: "個".into(),
            unit_price: 12.5,
            min_stock: min,
            current_stock: current,
            is_active: true,
        }
    }

    #[test]
    fn test_stock_status() {
        assert_eq!(item(0, 10).stock_status(), StockStatus::OutOfStock);
        assert_eq!(item(3, 10).stock_status(), StockStatus::Low);
        assert_eq!(item(30, 10).stock_status(), StockStatus::Normal);
        assert_eq!(item(3, 10).status_key().as_deref(), Some("low"));
    }

    #[test]
    fn test_defaults_on_deserialize() {
        let i: Item = serde_json::from_str(r#"{"id":9,"code":"X","name":"ナット"}"#).unwrap();
        assert_eq!(i.unit, "個");
        assert_eq!(i.stock_status(), StockStatus::OutOfStock);
    }

    #[test]
    fn test_payload_parsing() {
        let mut dto = ItemDto::from(&item(5, 2));
        dto.unit_price = " 99.5 ".into();
        dto.min_stock = "".into();
        let payload = dto.to_payload().unwrap();
        assert_eq!(payload.unit_price, 99.5);
        assert_eq!(payload.min_stock, 0);

        dto.current_stock = "abc".into();
        let err = dto.to_payload().unwrap_err();
        assert_eq!(err.to_string(), "現在庫には数値を入力してください");
    }
}
