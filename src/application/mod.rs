//! Application layer services implementing business logic.
//!
//! Services consume repository traits, apply validation and business rules,
//! and give HTTP handlers and the admin CLI a small API to call.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Link creation, lookup, listing and deletion
//! - [`services::redirect_service::RedirectService`] - Redirect resolution and click history

pub mod services;
