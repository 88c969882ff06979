//! Tab titles for every tab key.

use contracts::domain::a001_customer::aggregate::LIST_NAME as A001;
use contracts::domain::a002_supplier::aggregate::LIST_NAME as A002;
use contracts::domain::a003_item::aggregate::LIST_NAME as A003;
use contracts::domain::a004_product::aggregate::LIST_NAME as A004;
use contracts::domain::a005_order::aggregate::{order_number, ENTITY_NAME as A005_ENTITY, LIST_NAME as A005};

pub const ORDER_DETAIL_PREFIX: &str = "a005_order_detail_";
pub const ORDER_NEW_KEY: &str = "a005_order_new";

/// Readable tab title for `key`. Unknown keys fall back to the key itself.
pub fn tab_label_for_key(key: &str) -> String {
    let label = match key {
        "d400_dashboard" => "ダッシュボード",
        "a001_customer" => A001,
        "a002_supplier" => A002,
        "a003_item" => A003,
        "a004_product" => A004,
        "a005_order" => A005,
        ORDER_NEW_KEY => "新規注文",
        "d401_reports" => "レポート",
        "u501_excel_sync" => "Excel連携",
        "u502_access_sync" => "Access連携",
        "sys_settings" => "設定",
        _ => {
            return match order_detail_id(key) {
                Some(id) => detail_tab_label(A005_ENTITY, &order_number(id)),
                None => key.to_string(),
            }
        }
    };
    label.to_string()
}

/// Tab key of the order detail page.
pub fn order_detail_key(id: i64) -> String {
    format!("{}{}", ORDER_DETAIL_PREFIX, id)
}

/// Order id encoded in a detail tab key.
pub fn order_detail_id(key: &str) -> Option<i64> {
    key.strip_prefix(ORDER_DETAIL_PREFIX)?.parse().ok()
}

/// Detail tab title: `<entity> · <identifier>`.
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys() {
        assert_eq!(tab_label_for_key("d400_dashboard"), "ダッシュボード");
        assert_eq!(tab_label_for_key("a001_customer"), "顧客管理");
        assert_eq!(tab_label_for_key("sys_settings"), "設定");
    }

    #[test]
    fn test_order_detail_keys() {
        let key = order_detail_key(7);
        assert_eq!(key, "a005_order_detail_7");
        assert_eq!(order_detail_id(&key), Some(7));
        assert_eq!(tab_label_for_key(&key), "注文 · ORD-00007");
        assert_eq!(order_detail_id("a005_order_detail_x"), None);
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(tab_label_for_key("zzz"), "zzz");
    }
}
