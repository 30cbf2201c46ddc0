//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON with camelCase field names, and validator for
//! request validation at the boundary.

pub mod clicks;
pub mod health;
pub mod links;
