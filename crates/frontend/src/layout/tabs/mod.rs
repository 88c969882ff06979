//! Tabs: page wrapper, key → page registry and tab titles.

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{detail_tab_label, order_detail_key, tab_label_for_key};
