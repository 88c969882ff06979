//! Order detail page (MVVM)
//!
//! - view_model.rs: loading the order through a request scope
//! - view.rs: header, customer block and the line table

mod view;
mod view_model;

pub use view::OrderDetails;
pub use view_model::OrderDetailsViewModel;
