use crate::domain::common::EntityId;
use crate::shared::list_query::Searchable;
use crate::shared::status::{HasStatusDisplay, StatusDisplay, StatusTone};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Page size of the inventory table on the report page.
pub const INVENTORY_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySales {
    pub date: String,
    pub amount: f64,
    pub orders: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRow {
    pub product_id: EntityId,
    pub product_name: String,
    pub stock: i64,
    pub reorder_point: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReorderStatus {
    NeedsReorder,
    Adequate,
}

impl HasStatusDisplay for ReorderStatus {
    fn display(&self) -> StatusDisplay {
        match self {
            ReorderStatus::NeedsReorder => StatusDisplay::new("要発注", StatusTone::Danger),
            ReorderStatus::Adequate => StatusDisplay::new("適正", StatusTone::Success),
        }
    }
}

impl InventoryRow {
    pub fn reorder_status(&self) -> ReorderStatus {
        if self.stock <= self.reorder_point {
            ReorderStatus::NeedsReorder
        } else {
            ReorderStatus::Adequate
        }
    }
}

impl Searchable for InventoryRow {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![Cow::from(self.product_name.as_str())]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularProduct {
    pub product_id: EntityId,
    pub product_name: String,
    pub total_sales: f64,
    pub total_quantity: u32,
}

/// Response of `GET /api/reports/sales`. Aggregates are computed server-side.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    #[serde(default)]
    pub daily_sales: Vec<DailySales>,
    #[serde(default)]
    pub inventory: Vec<InventoryRow>,
    #[serde(default)]
    pub popular_products: Vec<PopularProduct>,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub total_orders: u32,
    #[serde(default)]
    pub average_order_value: f64,
}

impl SalesReport {
    /// Largest daily amount, used to scale the sales bars.
    pub fn max_daily_amount(&self) -> f64 {
        self.daily_sales
            .iter()
            .map(|d| d.amount)
            .fold(0.0, f64::max)
    }

    /// Bar width in percent of the largest day.
    pub fn bar_percent(&self, amount: f64) -> f64 {
        let max = self.max_daily_amount();
        if max <= 0.0 {
            0.0
        } else {
            (amount / max * 100.0).clamp(0.0, 100.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_wire_format() {
        let body = r#"{
            "dailySales": [{"date": "2024-04-01", "amount": 120000, "orders": 12}],
            "inventory": [{"productId": 1, "productName": "緑茶", "stock": 5, "reorderPoint": 10}],
            "popularProducts": [{"productId": 1, "productName": "緑茶", "totalSales": 50000, "totalQuantity": 300}],
            "totalRevenue": 120000,
            "totalOrders": 12,
            "averageOrderValue": 10000
        }"#;
        let report: SalesReport = serde_json::from_str(body).unwrap();
        assert_eq!(report.daily_sales[0].orders, 12);
        assert_eq!(report.inventory[0].reorder_status(), ReorderStatus::NeedsReorder);
        assert_eq!(report.popular_products[0].total_quantity, 300);
        assert_eq!(report.average_order_value, 10000.0);
    }

    #[test]
    fn test_reorder_threshold_is_inclusive() {
        let row = |stock| InventoryRow {
            product_id: 1,
            product_name: "x".into(),
            stock,
            reorder_point: 10,
        };
        assert_eq!(row(10).reorder_status().display().label, "要発注");
        assert_eq!(row(11).reorder_status().display().label, "適正");
    }

    #[test]
    fn test_bar_percent() {
        let mut report = SalesReport::default();
        assert_eq!(report.bar_percent(10.0), 0.0);
        report.daily_sales = vec![
            DailySales { date: "a".into(), amount: 200.0, orders: 1 },
            DailySales { date: "b".into(), amount: 50.0, orders: 1 },
        ];
        assert_eq!(report.bar_percent(50.0), 25.0);
        assert_eq!(report.bar_percent(200.0), 100.0);
    }
}
