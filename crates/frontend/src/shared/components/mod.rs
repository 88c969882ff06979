pub mod confirm_dialog;
pub mod list_body;
pub mod notification;
pub mod pagination_controls;
pub mod stat_card;
pub mod status_badge;
