use crate::domain::common::{blank_to_none, EntityId};
use crate::shared::list_query::Searchable;
use crate::shared::status::{HasStatusDisplay, StatusDisplay, StatusTone};
use crate::shared::validation::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

pub const ENTITY_NAME: &str = "注文";
pub const LIST_NAME: &str = "注文管理";

/// Order lifecycle status. Unrecognized wire values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Unknown(String),
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Unknown(raw) => raw,
        }
    }

    /// Confirmed or in progress but not yet handed to the carrier.
    pub fn is_awaiting_shipment(&self) -> bool {
        matches!(self, OrderStatus::Confirmed | OrderStatus::Processing)
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => OrderStatus::Pending,
            "confirmed" => OrderStatus::Confirmed,
            "processing" => OrderStatus::Processing,
            "shipped" => OrderStatus::Shipped,
            "delivered" => OrderStatus::Delivered,
            "cancelled" => OrderStatus::Cancelled,
            _ => OrderStatus::Unknown(value),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.as_str().to_string()
    }
}

impl HasStatusDisplay for OrderStatus {
    fn display(&self) -> StatusDisplay {
        match self {
            OrderStatus::Pending => StatusDisplay::new("確認待ち", StatusTone::Warning),
            OrderStatus::Confirmed => StatusDisplay::new("確認済み", StatusTone::Info),
            OrderStatus::Processing => StatusDisplay::new("処理中", StatusTone::Brand),
            OrderStatus::Shipped => StatusDisplay::new("発送済み", StatusTone::Brand),
            OrderStatus::Delivered => StatusDisplay::new("配達完了", StatusTone::Success),
            OrderStatus::Cancelled => StatusDisplay::new("キャンセル", StatusTone::Danger),
            OrderStatus::Unknown(raw) => StatusDisplay::new(raw.clone(), StatusTone::Neutral),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRef {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRef {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub unit_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: EntityId,
    pub item: ItemRef,
    pub quantity: u32,
    pub unit_price: f64,
}

impl OrderLine {
    pub fn subtotal(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: EntityId,
    pub customer: CustomerRef,
    pub order_date: String,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub items: Vec<OrderLine>,
    #[serde(default)]
    pub delivery_date: Option<String>,
    #[serde(default)]
    pub shipping_address: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Order {
    /// Σ quantity × unit_price over all lines.
    pub fn total_amount(&self) -> f64 {
        self.items.iter().map(OrderLine::subtotal).sum()
    }

    pub fn order_number(&self) -> String {
        order_number(self.id)
    }
}

/// Display number of an order, e.g. `ORD-00042`.
pub fn order_number(id: EntityId) -> String {
    format!("ORD-{:05}", id)
}

impl Searchable for Order {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::from(self.id.to_string()),
            Cow::from(self.customer.name.as_str()),
        ]
    }

    fn status_key(&self) -> Option<String> {
        Some(self.status.as_str().to_string())
    }
}

/// Steps of the new-order wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStep {
    Customer,
    Items,
    Delivery,
}

impl OrderStep {
    pub const ALL: [OrderStep; 3] = [OrderStep::Customer, OrderStep::Items, OrderStep::Delivery];

    pub fn label(&self) -> &'static str {
        match self {
            OrderStep::Customer => "顧客情報",
            OrderStep::Items => "商品情報",
            OrderStep::Delivery => "配送情報",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            OrderStep::Customer => 0,
            OrderStep::Items => 1,
            OrderStep::Delivery => 2,
        }
    }

    pub fn next(&self) -> Option<OrderStep> {
        OrderStep::ALL.get(self.index() + 1).copied()
    }

    pub fn prev(&self) -> Option<OrderStep> {
        self.index().checked_sub(1).map(|i| OrderStep::ALL[i])
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DraftLine {
    pub item_id: Option<EntityId>,
    pub item_name: String,
    pub quantity: String,
    pub unit_price: f64,
}

impl DraftLine {
    pub fn quantity_value(&self) -> Option<u32> {
        self.quantity.trim().parse::<u32>().ok().filter(|q| *q >= 1)
    }

    pub fn subtotal(&self) -> f64 {
        self.quantity_value().unwrap_or(0) as f64 * self.unit_price
    }
}

/// Form state of the new-order wizard.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderDraft {
    pub customer_id: Option<EntityId>,
    pub customer_name: String,
    pub lines: Vec<DraftLine>,
    pub delivery_date: String,
    pub shipping_address: String,
    pub notes: String,
}

impl OrderDraft {
    pub fn new() -> Self {
        Self {
            lines: vec![DraftLine {
                quantity: "1".into(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    pub fn total_amount(&self) -> f64 {
        self.lines.iter().map(DraftLine::subtotal).sum()
    }

    /// Checks the fields owned by `step`.
    pub fn validate_step(&self, step: OrderStep) -> Result<(), ValidationError> {
        match step {
            OrderStep::Customer => {
                if self.customer_id.is_none() {
                    return Err(ValidationError::Required("顧客"));
                }
            }
            OrderStep::Items => {
                if self.lines.is_empty() {
                    return Err(ValidationError::Required("商品"));
                }
                for line in &self.lines {
                    if line.item_id.is_none() {
                        return Err(ValidationError::Required("商品"));
                    }
                    if line.quantity_value().is_none() {
                        return Err(ValidationError::Invalid(
                            "数量は1以上の整数で入力してください".to_string(),
                        ));
                    }
                }
            }
            OrderStep::Delivery => {
                if self.delivery_date.trim().is_empty() {
                    return Err(ValidationError::Required("配送希望日"));
                }
                if NaiveDate::parse_from_str(self.delivery_date.trim(), "%Y-%m-%d").is_err() {
                    return Err(ValidationError::Invalid(
                        "配送希望日の形式が正しくありません".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Validates every step and builds the request body.
    pub fn to_payload(&self, order_date: NaiveDate) -> Result<OrderPayload, ValidationError> {
        for step in OrderStep::ALL {
            self.validate_step(step)?;
        }
        let customer_id = self.customer_id.ok_or(ValidationError::Required("顧客"))?;
        let items = self
            .lines
            .iter()
            .filter_map(|l| {
                Some(OrderLinePayload {
                    item_id: l.item_id?,
                    quantity: l.quantity_value()?,
                    unit_price: l.unit_price,
                })
            })
            .collect();

        Ok(OrderPayload {
            customer_id,
            order_date: order_date.format("%Y-%m-%d").to_string(),
            delivery_date: self.delivery_date.trim().to_string(),
            shipping_address: blank_to_none(&self.shipping_address),
            notes: blank_to_none(&self.notes),
            status: OrderStatus::Pending,
            items,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLinePayload {
    pub item_id: EntityId,
    pub quantity: u32,
    pub unit_price: f64,
}

/// Body of `POST /api/orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPayload {
    pub customer_id: EntityId,
    pub order_date: String,
    pub delivery_date: String,
    pub shipping_address: Option<String>,
    pub notes: Option<String>,
    pub status: OrderStatus,
    pub items: Vec<OrderLinePayload>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn line(qty: u32, price: f64) -> OrderLine {
        OrderLine {
            id: 1,
            item: ItemRef {
                id: 10,
                name: "部品A".into(),
                unit_price: price,
            },
            quantity: qty,
            unit_price: price,
        }
    }

    #[test]
    fn test_total_amount() {
        let order = Order {
            id: 7,
            customer: CustomerRef {
                id: 1,
                name: "山田商事".into(),
                email: None,
            },
            order_date: "2024-03-01".into(),
            status: OrderStatus::Pending,
            items: vec![line(2, 1500.0), line(3, 200.0)],
            delivery_date: None,
            shipping_address: None,
            notes: None,
        };
        assert_eq!(order.total_amount(), 3600.0);
        assert_eq!(order.order_number(), "ORD-00007");
        assert_eq!(order.search_fields()[0], "7");
    }

    #[test]
    fn test_every_status_has_one_distinct_label() {
        let labels: HashSet<String> = OrderStatus::ALL.iter().map(|s| s.display().label).collect();
        assert_eq!(labels.len(), OrderStatus::ALL.len());
        assert_eq!(OrderStatus::Pending.display().label, "確認待ち");
        assert_eq!(OrderStatus::Pending.display().tone, StatusTone::Warning);
        for status in OrderStatus::ALL {
            assert_eq!(OrderStatus::from(status.as_str().to_string()), status);
        }
    }

    #[test]
    fn test_unknown_status_does_not_fail() {
        let order: Order = serde_json::from_str(
            r#"{"id":1,"customer":{"id":2,"name":"x"},"order_date":"2024-01-01","status":"on_hold","items":[]}"#,
        )
        .unwrap();
        assert_eq!(order.status, OrderStatus::Unknown("on_hold".into()));
        let display = order.status.display();
        assert_eq!(display.label, "on_hold");
        assert_eq!(display.tone, StatusTone::Neutral);
        assert_eq!(
            serde_json::to_value(&order.status).unwrap(),
            serde_json::json!("on_hold")
        );
    }

    #[test]
    fn test_wizard_steps() {
        assert_eq!(OrderStep::Customer.next(), Some(OrderStep::Items));
        assert_eq!(OrderStep::Delivery.next(), None);
        assert_eq!(OrderStep::Customer.prev(), None);
        assert_eq!(OrderStep::Delivery.prev(), Some(OrderStep::Items));
        assert_eq!(OrderStep::Items.label(), "商品情報");
    }

    #[test]
    fn test_draft_validation_and_payload() {
        let mut draft = OrderDraft::new();
        assert_eq!(
            draft.validate_step(OrderStep::Customer),
            Err(ValidationError::Required("顧客"))
        );
        draft.customer_id = Some(3);
        assert!(draft.validate_step(OrderStep::Customer).is_ok());
        assert!(draft.validate_step(OrderStep::Items).is_err());

        draft.lines[0].item_id = Some(11);
        draft.lines[0].unit_price = 250.0;
        draft.lines[0].quantity = "0".into();
        assert!(draft.validate_step(OrderStep::Items).is_err());
        draft.lines[0].quantity = "4".into();
        assert!(draft.validate_step(OrderStep::Items).is_ok());
        assert_eq!(draft.total_amount(), 1000.0);

        draft.delivery_date = "2024/05/01".into();
        assert!(draft.validate_step(OrderStep::Delivery).is_err());
        draft.delivery_date = "2024-05-01".into();

        let today = NaiveDate::from_ymd_opt(2024, 4, 20).unwrap();
        let payload = draft.to_payload(today).unwrap();
        assert_eq!(payload.customer_id, 3);
        assert_eq!(payload.order_date, "2024-04-20");
        assert_eq!(payload.items.len(), 1);
        assert_eq!(payload.items[0].quantity, 4);
        assert_eq!(payload.status, OrderStatus::Pending);
    }
}
