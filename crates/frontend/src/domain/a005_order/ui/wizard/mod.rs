//! New-order wizard: 顧客情報 → 商品情報 → 配送情報.

mod view;
mod view_model;

pub use view::OrderWizard;
pub use view_model::OrderWizardViewModel;
