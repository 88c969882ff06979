use crate::domain::a003_item::aggregate::Item;
use crate::domain::a005_order::aggregate::{Order, OrderStatus};
use crate::domain::common::EntityId;
use crate::shared::status::StockStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of rows in the 最近の注文 panel.
pub const RECENT_ORDERS_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: OrderStatus,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentOrder {
    pub id: EntityId,
    pub customer_name: String,
    pub order_date: String,
    pub status: OrderStatus,
    pub total_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockAlert {
    pub item_id: EntityId,
    pub code: String,
    pub name: String,
    pub current_stock: i64,
    pub min_stock: i64,
}

impl StockAlert {
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::classify(self.current_stock, self.min_stock)
    }
}

/// Response of `GET /api/dashboard/summary`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub today_orders: u32,
    pub today_sales: f64,
    pub new_customers: u32,
    pub pending_shipments: u32,
    #[serde(default)]
    pub status_counts: Vec<StatusCount>,
    #[serde(default)]
    pub recent_orders: Vec<RecentOrder>,
    #[serde(default)]
    pub stock_alerts: Vec<StockAlert>,
}

impl DashboardSummary {
    /// Builds the summary from raw collections.
    ///
    /// `order_date` values are compared by their `YYYY-MM-DD` prefix.
    pub fn from_collections(
        orders: &[Order],
        items: &[Item],
        new_customers: u32,
        today: NaiveDate,
    ) -> Self {
        let today_key = today.format("%Y-%m-%d").to_string();
        let todays: Vec<&Order> = orders
            .iter()
            .filter(|o| o.order_date.starts_with(&today_key))
            .collect();

        let status_counts = OrderStatus::ALL
            .iter()
            .map(|status| StatusCount {
                status: status.clone(),
                count: orders.iter().filter(|o| &o.status == status).count() as u32,
            })
            .collect();

        let mut sorted: Vec<&Order> = orders.iter().collect();
        sorted.sort_by(|a, b| b.order_date.cmp(&a.order_date).then(b.id.cmp(&a.id)));
        let recent_orders = sorted
            .into_iter()
            .take(RECENT_ORDERS_LIMIT)
            .map(|o| RecentOrder {
                id: o.id,
                customer_name: o.customer.name.clone(),
                order_date: o.order_date.clone(),
                status: o.status.clone(),
                total_amount: o.total_amount(),
            })
            .collect();

        let stock_alerts = items
            .iter()
            .filter(|i| i.is_active && i.stock_status() != StockStatus::Normal)
            .map(|i| StockAlert {
                item_id: i.id,
                code: i.code.clone(),
                name: i.name.clone(),
                current_stock: i.current_stock,
                min_stock: i.min_stock,
            })
            .collect();

        Self {
            today_orders: todays.len() as u32,
            today_sales: todays.iter().map(|o| o.total_amount()).sum(),
            new_customers,
            pending_shipments: orders
                .iter()
                .filter(|o| o.status.is_awaiting_shipment())
                .count() as u32,
            status_counts,
            recent_orders,
            stock_alerts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a005_order::aggregate::{CustomerRef, ItemRef, OrderLine};

    fn order(id: i64, date: &str, status: OrderStatus, amount: f64) -> Order {
        Order {
            id,
            customer: CustomerRef {
                id: 1,
                name: format!("顧客{}", id),
                email: None,
            },
            order_date: date.into(),
            status,
            items: vec![OrderLine {
                id: 1,
                item: ItemRef {
                    id: 1,
                    name: "x".into(),
                    unit_price: amount,
                },
                quantity: 1,
                unit_price: amount,
            }],
            delivery_date: None,
            shipping_address: None,
            notes: None,
        }
    }

    fn item(id: i64, current: i64, min: i64) -> Item {
        serde_json::from_value(serde_json::json!({
            "id": id, "code": format!("P{}", id), "name": "部品",
            "min_stock": min, "current_stock": current
        }))
        .unwrap()
    }

    #[test]
    fn test_summary_from_collections() {
        let orders = vec![
            order(1, "2024-04-20T09:00:00", OrderStatus::Pending, 1000.0),
            order(2, "2024-04-20", OrderStatus::Confirmed, 500.0),
            order(3, "2024-04-19", OrderStatus::Processing, 700.0),
            order(4, "2024-04-18", OrderStatus::Delivered, 100.0),
        ];
        let items = vec![item(1, 0, 5), item(2, 3, 5), item(3, 50, 5)];
        let today = NaiveDate::from_ymd_opt(2024, 4, 20).unwrap();

        let s = DashboardSummary::from_collections(&orders, &items, 2, today);
        assert_eq!(s.today_orders, 2);
        assert_eq!(s.today_sales, 1500.0);
        assert_eq!(s.pending_shipments, 2);
        assert_eq!(s.new_customers, 2);
        assert_eq!(s.recent_orders[0].id, 1);
        assert_eq!(s.stock_alerts.len(), 2);
        assert_eq!(s.stock_alerts[0].stock_status(), StockStatus::OutOfStock);
        let delivered = s
            .status_counts
            .iter()
            .find(|c| c.status == OrderStatus::Delivered)
            .unwrap();
        assert_eq!(delivered.count, 1);
    }
}
