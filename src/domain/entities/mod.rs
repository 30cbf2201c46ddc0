//! Core domain entities.
//!
//! - [`Link`] - A short code mapped to a target URL, with click counters
//! - [`Click`] - A single redirect recorded against a link
//!
//! Creation inputs live in separate structs (`NewLink`) so that
//! store-assigned fields (`id`, timestamps, counters) never have to be faked.

pub mod click;
pub mod link;

pub use click::Click;
pub use link::{Link, NewLink};
