mod view;
mod view_model;

pub use view::ItemDetails;
pub use view_model::ItemDetailsViewModel;
