pub mod common;
pub mod u501_excel_sync;
pub mod u502_access_sync;
