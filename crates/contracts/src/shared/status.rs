//! Status display table shared by every domain.
//!
//! Each status enumeration implements [`HasStatusDisplay`] with an exhaustive
//! `match`, so every value has exactly one label/tone pair. The UI maps
//! [`StatusTone`] to a badge color in a single place.

use serde::{Deserialize, Serialize};

/// Visual tone of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusTone {
    Neutral,
    Brand,
    Info,
    Success,
    Warning,
    Danger,
}

/// Label and tone shown for a status value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDisplay {
    pub label: String,
    pub tone: StatusTone,
}

impl StatusDisplay {
    pub fn new(label: impl Into<String>, tone: StatusTone) -> Self {
        Self {
            label: label.into(),
            tone,
        }
    }
}

pub trait HasStatusDisplay {
    fn display(&self) -> StatusDisplay;
}

/// 有効 / 無効 flag used by customers, items and products.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveFlag {
    Active,
    Inactive,
}

impl From<bool> for ActiveFlag {
    fn from(is_active: bool) -> Self {
        if is_active {
            ActiveFlag::Active
        } else {
            ActiveFlag::Inactive
        }
    }
}

impl HasStatusDisplay for ActiveFlag {
    fn display(&self) -> StatusDisplay {
        match self {
            ActiveFlag::Active => StatusDisplay::new("有効", StatusTone::Success),
            ActiveFlag::Inactive => StatusDisplay::new("無効", StatusTone::Neutral),
        }
    }
}

/// Stock level classification shared by items, products and dashboard alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    OutOfStock,
    Low,
    Normal,
}

impl StockStatus {
    pub const ALL: [StockStatus; 3] = [StockStatus::OutOfStock, StockStatus::Low, StockStatus::Normal];

    /// Filter key used by list pages.
    pub fn key(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "out_of_stock",
            StockStatus::Low => "low",
            StockStatus::Normal => "normal",
        }
    }

    /// `current <= 0` is out of stock, `current < minimum` is low.
    pub fn classify(current: i64, minimum: i64) -> Self {
        if current <= 0 {
            StockStatus::OutOfStock
        } else if current < minimum {
            StockStatus::Low
        } else {
            StockStatus::Normal
        }
    }
}

impl HasStatusDisplay for StockStatus {
    fn display(&self) -> StatusDisplay {
        match self {
            StockStatus::OutOfStock => StatusDisplay::new("在庫切れ", StatusTone::Danger),
            StockStatus::Low => StatusDisplay::new("在庫少", StatusTone::Warning),
            StockStatus::Normal => StatusDisplay::new("正常", StatusTone::Success),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_classification() {
        assert_eq!(StockStatus::classify(0, 10), StockStatus::OutOfStock);
        assert_eq!(StockStatus::classify(-3, 10), StockStatus::OutOfStock);
        assert_eq!(StockStatus::classify(5, 10), StockStatus::Low);
        assert_eq!(StockStatus::classify(10, 10), StockStatus::Normal);
        assert_eq!(StockStatus::classify(1, 0), StockStatus::Normal);
    }

    #[test]
    fn test_stock_labels_are_distinct() {
        let labels: Vec<String> = [StockStatus::OutOfStock, StockStatus::Low, StockStatus::Normal]
            .iter()
            .map(|s| s.display().label)
            .collect();
        assert_eq!(labels, vec!["在庫切れ", "在庫少", "正常"]);
    }

    #[test]
    fn test_active_flag() {
        assert_eq!(ActiveFlag::from(true).display().label, "有効");
        assert_eq!(ActiveFlag::from(false).display().tone, StatusTone::Neutral);
    }
}
