//! Domain layer containing business entities and repository contracts.
//!
//! Nothing in here knows about HTTP or PostgreSQL. Repository traits are
//! implemented in [`crate::infrastructure::persistence`] and consumed by the
//! services in [`crate::application::services`].
//!
//! # Modules
//!
//! - [`entities`] - Links and their click records
//! - [`repositories`] - Data access trait definitions

pub mod entities;
pub mod repositories;
