//! Core domain entities.
//!
//! - [`Link`] - A stored URL addressed by a store-assigned numeric identifier
//! - [`NewLink`] - Input for creating a link (the store fills in the rest)
//! - [`Count`] - Number of stored links, computed on demand

pub mod count;
pub mod link;

pub use count::Count;
pub use link::{Link, NewLink};
