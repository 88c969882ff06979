mod view;
mod view_model;

pub use view::ProductDetails;
pub use view_model::ProductDetailsViewModel;
