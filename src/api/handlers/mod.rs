//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod count;
pub mod fallback;
pub mod health;
pub mod links;
pub mod redirect;

pub use count::count_handler;
pub use fallback::{method_not_allowed_handler, not_found_handler};
pub use health::health_handler;
pub use links::{add_link_handler, delete_link_handler, link_info_handler};
pub use redirect::redirect_handler;
