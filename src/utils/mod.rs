//! Helpers shared by the service layer and the API boundary.
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`target_url`] - Target URL validation

pub mod code_generator;
pub mod target_url;
