//! 設定: profile, system preferences and security.

pub mod api;
pub mod ui;
