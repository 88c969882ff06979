pub mod d400_dashboard;
pub mod d401_reports;
