//! Deterministic sample data served when `api.use_mock_data = true`.
//!
//! Dates are generated relative to `today` so the dashboard always has
//! activity for the current day.

use chrono::{Duration, NaiveDate};
use contracts::dashboards::d400_dashboard::dto::DashboardSummary;
use contracts::dashboards::d401_reports::dto::{DailySales, InventoryRow, PopularProduct, SalesReport};
use contracts::domain::a001_customer::aggregate::Customer;
use contracts::domain::a002_supplier::aggregate::{Supplier, SupplierStatus};
use contracts::domain::a003_item::aggregate::Item;
use contracts::domain::a004_product::aggregate::{Product, CATEGORIES};
use contracts::domain::a005_order::aggregate::{CustomerRef, ItemRef, Order, OrderLine, OrderStatus};
use std::collections::BTreeMap;

pub const MOCK_ORDER_COUNT: usize = 50;
const REPORT_DAYS: i64 = 7;

const COMPANY_NAMES: [&str; 10] = [
    "株式会社山田商事",
    "田中工業株式会社",
    "佐藤電機株式会社",
    "鈴木物産株式会社",
    "高橋精機株式会社",
    "伊藤食品株式会社",
    "渡辺建設株式会社",
    "中村産業株式会社",
    "小林製作所",
    "加藤トレーディング",
];

const CONTACTS: [&str; 10] = [
    "山田 太郎",
    "田中 花子",
    "佐藤 一郎",
    "鈴木 美咲",
    "高橋 健",
    "伊藤 由美",
    "渡辺 誠",
    "中村 彩",
    "小林 翔",
    "加藤 真理",
];

const CITIES: [&str; 5] = ["東京都千代田区", "大阪府大阪市", "愛知県名古屋市", "福岡県福岡市", "北海道札幌市"];

const ITEM_NAMES: [(&str, &str, f64); 12] = [
    ("六角ボルト", "M8×30", 25.0),
    ("六角ナット", "M8", 12.0),
    ("平ワッシャー", "M8", 5.0),
    ("ベアリング", "6202ZZ", 480.0),
    ("Oリング", "P-20", 60.0),
    ("ステンレスシャフト", "φ10×200", 1500.0),
    ("アルミプレート", "t3×100×100", 820.0),
    ("スプリング", "SWP-A φ1.0", 90.0),
    ("ギアモーター", "DC24V 30W", 12800.0),
    ("リミットスイッチ", "SPDT", 2300.0),
    ("配線ケーブル", "AWG18 10m", 1800.0),
    ("制御基板", "Rev.3", 9800.0),
];

const PRODUCT_NAMES: [(&str, usize, f64); 12] = [
    ("有機緑茶ティーバッグ", 1, 580.0),
    ("天然水 2L", 1, 120.0),
    ("ブレンドコーヒー豆", 1, 1280.0),
    ("国産米 5kg", 0, 2480.0),
    ("手延べそうめん", 0, 680.0),
    ("味噌詰め合わせ", 0, 1980.0),
    ("キッチンペーパー", 2, 298.0),
    ("食器用洗剤", 2, 198.0),
    ("トイレットペーパー 12R", 2, 548.0),
    ("スポーツドリンク", 1, 160.0),
    ("焼き海苔", 0, 450.0),
    ("除菌ウェットティッシュ", 2, 328.0),
];

fn email_for(prefix: &str, i: usize) -> Option<String> {
    Some(format!("{}{:02}@example.co.jp", prefix, i + 1))
}

pub fn customers() -> Vec<Customer> {
    COMPANY_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| Customer {
            id: i as i64 + 1,
            code: format!("C{:04}", i + 1),
            name: name.to_string(),
            contact_person: Some(CONTACTS[i].to_string()),
            email: email_for("customer", i),
            phone: Some(format!("03-1234-{:04}", 5600 + i)),
            address: Some(format!("{}{}-{}", CITIES[i % CITIES.len()], i + 1, i + 3)),
            is_active: i % 7 != 6,
        })
        .collect()
}

pub fn suppliers() -> Vec<Supplier> {
    COMPANY_NAMES
        .iter()
        .rev()
        .take(8)
        .enumerate()
        .map(|(i, name)| Supplier {
            id: i as i64 + 1,
            code: format!("S{:04}", i + 1),
            name: name.replace("株式会社", "物流"),
            contact_person: Some(CONTACTS[(i + 3) % CONTACTS.len()].to_string()),
            email: email_for("supplier", i),
            phone: Some(format!("06-2345-{:04}", 7800 + i)),
            address: Some(CITIES[(i + 2) % CITIES.len()].to_string()),
            status: if i % 4 == 3 {
                SupplierStatus::Inactive
            } else {
                SupplierStatus::Active
            },
            notes: (i == 0).then(|| "月末締め翌月払い".to_string()),
        })
        .collect()
}

pub fn items() -> Vec<Item> {
    ITEM_NAMES
        .iter()
        .enumerate()
        .map(|(i, (name, spec, price))| {
            let min_stock = 20 + (i as i64 % 4) * 10;
            // Every fourth item is out of stock, every third below minimum.
            let current_stock = if i % 4 == 1 {
                0
            } else if i % 3 == 2 {
                min_stock / 2
            } else {
                min_stock * 3 + i as i64
            };
            Item {
                id: i as i64 + 1,
                code: format!("P{:04}", i + 1),
                name: name.to_string(),
                description: None,
                specification: Some(spec.to_string()),
                unit: "個".to_string(),
                unit_price: *price,
                min_stock,
                current_stock,
                is_active: i != ITEM_NAMES.len() - 1,
            }
        })
        .collect()
}

pub fn products() -> Vec<Product> {
    PRODUCT_NAMES
        .iter()
        .enumerate()
        .map(|(i, (name, category, price))| {
            let minimum_stock = 10 + (i as i64 % 3) * 5;
            let stock_quantity = match i % 5 {
                0 => 0,
                1 => minimum_stock - 3,
                _ => minimum_stock * 4 + i as i64,
            };
            Product {
                id: i as i64 + 1,
                code: format!("G{:04}", i + 1),
                name: name.to_string(),
                description: None,
                category: Some(CATEGORIES[*category].to_string()),
                price: *price,
                stock_quantity,
                minimum_stock,
                image_url: None,
            }
        })
        .collect()
}

fn status_for(i: usize) -> OrderStatus {
    OrderStatus::ALL[i % OrderStatus::ALL.len()].clone()
}

/// 50 orders. Order `n` is dated `n / 3` days before `today`.
pub fn orders(today: NaiveDate) -> Vec<Order> {
    let customers = customers();
    let items = items();

    (0..MOCK_ORDER_COUNT)
        .map(|i| {
            let customer = &customers[i % customers.len()];
            let order_date = today - Duration::days((i / 3) as i64);
            let line_count = 1 + i % 3;
            let lines = (0..line_count)
                .map(|n| {
                    let item = &items[(i + n * 5) % items.len()];
                    OrderLine {
                        id: (i * 10 + n) as i64 + 1,
                        item: ItemRef {
                            id: item.id,
                            name: item.name.clone(),
                            unit_price: item.unit_price,
                        },
                        quantity: (1 + (i + n) % 5) as u32 * 2,
                        unit_price: item.unit_price,
                    }
                })
                .collect();

            Order {
                id: i as i64 + 1,
                customer: CustomerRef {
                    id: customer.id,
                    name: customer.name.clone(),
                    email: customer.email.clone(),
                },
                order_date: format!("{}T{:02}:{:02}:00", order_date.format("%Y-%m-%d"), 9 + i % 9, (i * 7) % 60),
                status: status_for(i),
                items: lines,
                delivery_date: Some((order_date + Duration::days(7)).format("%Y-%m-%d").to_string()),
                shipping_address: customer.address.clone(),
                notes: (i % 10 == 0).then(|| "午前中配達希望".to_string()),
            }
        })
        .collect()
}

pub fn dashboard_summary(today: NaiveDate) -> DashboardSummary {
    let new_customers = customers().iter().filter(|c| c.is_active).count() as u32 / 3;
    DashboardSummary::from_collections(&orders(today), &items(), new_customers, today)
}

/// Report for the last seven days, aggregated from the mock orders.
pub fn sales_report(today: NaiveDate) -> SalesReport {
    let orders = orders(today);
    let first_day = today - Duration::days(REPORT_DAYS - 1);

    let mut daily: BTreeMap<NaiveDate, (f64, u32)> = (0..REPORT_DAYS)
        .map(|d| (first_day + Duration::days(d), (0.0, 0)))
        .collect();
    let mut per_item: BTreeMap<i64, (String, f64, u32)> = BTreeMap::new();

    for order in orders.iter().filter(|o| o.status != OrderStatus::Cancelled) {
        let date = order
            .order_date
            .get(..10)
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok());
        let Some(entry) = date.and_then(|d| daily.get_mut(&d)) else {
            continue;
        };
        entry.0 += order.total_amount();
        entry.1 += 1;
        for line in &order.items {
            let slot = per_item
                .entry(line.item.id)
                .or_insert_with(|| (line.item.name.clone(), 0.0, 0));
            slot.1 += line.subtotal();
            slot.2 += line.quantity;
        }
    }

    let daily_sales: Vec<DailySales> = daily
        .into_iter()
        .map(|(date, (amount, orders))| DailySales {
            date: date.format("%Y-%m-%d").to_string(),
            amount,
            orders,
        })
        .collect();

    let mut popular_products: Vec<PopularProduct> = per_item
        .into_iter()
        .map(|(id, (name, total_sales, total_quantity))| PopularProduct {
            product_id: id,
            product_name: name,
            total_sales,
            total_quantity,
        })
        .collect();
    popular_products.sort_by(|a, b| b.total_sales.total_cmp(&a.total_sales));
    popular_products.truncate(5);

    let inventory = products()
        .into_iter()
        .map(|p| InventoryRow {
            product_id: p.id,
            product_name: p.name,
            stock: p.stock_quantity,
            reorder_point: p.minimum_stock,
        })
        .collect();

    let total_revenue: f64 = daily_sales.iter().map(|d| d.amount).sum();
    let total_orders: u32 = daily_sales.iter().map(|d| d.orders).sum();
    let average_order_value = if total_orders == 0 {
        0.0
    } else {
        total_revenue / f64::from(total_orders)
    };

    SalesReport {
        daily_sales,
        inventory,
        popular_products,
        total_revenue,
        total_orders,
        average_order_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::status::StockStatus;
    use std::collections::HashSet;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, 15).unwrap()
    }

    #[test]
    fn test_orders_are_deterministic() {
        let a = orders(today());
        let b = orders(today());
        assert_eq!(a.len(), MOCK_ORDER_COUNT);
        assert_eq!(a, b);
        let ids: HashSet<i64> = a.iter().map(|o| o.id).collect();
        assert_eq!(ids.len(), MOCK_ORDER_COUNT);
        assert!(a.iter().all(|o| !o.items.is_empty()));
    }

    #[test]
    fn test_every_status_is_represented() {
        let statuses: HashSet<String> = orders(today())
            .iter()
            .map(|o| o.status.as_str().to_string())
            .collect();
        assert_eq!(statuses.len(), OrderStatus::ALL.len());
    }

    #[test]
    fn test_items_cover_all_stock_levels() {
        let items = items();
        for status in [StockStatus::OutOfStock, StockStatus::Low, StockStatus::Normal] {
            assert!(items.iter().any(|i| i.stock_status() == status), "{:?}", status);
        }
    }

    #[test]
    fn test_dashboard_has_todays_orders() {
        let summary = dashboard_summary(today());
        assert_eq!(summary.today_orders, 3);
        assert!(summary.today_sales > 0.0);
        assert!(!summary.stock_alerts.is_empty());
    }

    #[test]
    fn test_report_totals_are_consistent() {
        let report = sales_report(today());
        assert_eq!(report.daily_sales.len(), REPORT_DAYS as usize);
        let sum: f64 = report.daily_sales.iter().map(|d| d.amount).sum();
        assert!((report.total_revenue - sum).abs() < 1e-6);
        assert!(report.total_orders > 0);
        assert!(report.popular_products.len() <= 5);
        assert!(report
            .popular_products
            .windows(2)
            .all(|w| w[0].total_sales >= w[1].total_sales));
        assert_eq!(report.inventory.len(), PRODUCT_NAMES.len());
    }
}
