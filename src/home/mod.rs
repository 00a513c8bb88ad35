//! Homepage: two-tier data loading and the page view model.

mod deferred;
mod loader;
mod view;


pub use loader::load_home;
pub use view::*;
