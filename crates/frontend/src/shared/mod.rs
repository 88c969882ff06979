pub mod api_utils;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod download;
pub mod icons;
pub mod list_utils;
pub mod mock_data;
pub mod number_format;
pub mod page_frame;
pub mod request_scope;
