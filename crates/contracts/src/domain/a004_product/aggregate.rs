use crate::domain::a003_item::aggregate::parse_number;
use crate::domain::common::{blank_to_none, opt_str, EntityId};
use crate::shared::list_query::Searchable;
use crate::shared::status::StockStatus;
use crate::shared::validation::{missing_required, ValidationError};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

pub const ENTITY_NAME: &str = "商品";
pub const LIST_NAME: &str = "商品管理";

/// Categories offered by the product form.
pub const CATEGORIES: [&str; 3] = ["食品", "飲料", "日用品"];

/// A sellable product (商品).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityId,
    #[serde(default)]
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default, alias = "stock", alias = "stockQuantity")]
    pub stock_quantity: i64,
    #[serde(default, alias = "minimumStock")]
    pub minimum_stock: i64,
    #[serde(default, alias = "imageUrl")]
    pub image_url: Option<String>,
}

impl Product {
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::classify(self.stock_quantity, self.minimum_stock)
    }
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::from(self.code.as_str()),
            Cow::from(self.name.as_str()),
            Cow::from(opt_str(&self.category)),
        ]
    }

    fn status_key(&self) -> Option<String> {
        self.category.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductDto {
    pub id: Option<EntityId>,
    pub code: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub stock_quantity: String,
    pub minimum_stock: String,
    pub image_url: String,
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        Self {
            id: Some(p.id),
            code: p.code.clone(),
            name: p.name.clone(),
            description: opt_str(&p.description).to_string(),
            category: opt_str(&p.category).to_string(),
            price: p.price.to_string(),
            stock_quantity: p.stock_quantity.to_string(),
            minimum_stock: p.minimum_stock.to_string(),
            image_url: opt_str(&p.image_url).to_string(),
        }
    }
}

impl ProductDto {
    pub fn missing_required(&self) -> Vec<&'static str> {
        missing_required(&[
            ("商品コード", self.code.as_str()),
            ("商品名", self.name.as_str()),
        ])
    }

    pub fn to_payload(&self) -> Result<ProductPayload, ValidationError> {
        let price: f64 = parse_number("価格", &self.price)?;
        if price < 0.0 {
            return Err(ValidationError::Invalid(
                "価格は0以上で入力してください".to_string(),
            ));
        }
        Ok(ProductPayload {
            code: self.code.trim().to_string(),
            name: self.name.trim().to_string(),
            description: blank_to_none(&self.description),
            category: blank_to_none(&self.category),
            price,
            stock_quantity: parse_number::<i64>("在庫数", &self.stock_quantity)?,
            minimum_stock: parse_number::<i64>("最小在庫数", &self.minimum_stock)?,
            image_url: blank_to_none(&self.image_url),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: f64,
    pub stock_quantity: i64,
    pub minimum_stock: i64,
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_camel_case_catalog_shape() {
        let p: Product = serde_json::from_str(
            r#"{"id":1,"name":"緑茶","price":150,"stock":4,"imageUrl":"/img/tea.png"}"#,
        )
        .unwrap();
        assert_eq!(p.stock_quantity, 4);
        assert_eq!(p.image_url.as_deref(), Some("/img/tea.png"));
        assert_eq!(p.code, "");
    }

    #[test]
    fn test_negative_price_rejected() {
        let dto = ProductDto {
            code: "F-01".into(),
            name: "おにぎり".into(),
            price: "-1".into(),
            ..Default::default()
        };
        assert!(dto.to_payload().is_err());
    }

    #[test]
    fn test_category_filter_key() {
        let dto = ProductDto {
            code: "D-01".into(),
            name: "麦茶".into(),
            category: CATEGORIES[1].into(),
            price: "120".into(),
            stock_quantity: "40".into(),
            minimum_stock: "10".into(),
            ..Default::default()
        };
        let payload = dto.to_payload().unwrap();
        assert_eq!(payload.category.as_deref(), Some("飲料"));
        assert_eq!(payload.stock_quantity, 40);
    }
}
