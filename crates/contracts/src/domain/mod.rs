pub mod a001_customer;
pub mod a002_supplier;
pub mod a003_item;
pub mod a004_product;
pub mod a005_order;
pub mod common;
