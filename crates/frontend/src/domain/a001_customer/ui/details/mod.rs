//! Customer form (MVVM)
//!
//! - view_model.rs: form state and the save command
//! - view.rs: the `CustomerDetails` component shown inside the list dialog

mod view;
mod view_model;

pub use view::CustomerDetails;
pub use view_model::CustomerDetailsViewModel;
