//! Link creation, lookup, listing and deletion.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code, validate_custom_code};
use crate::utils::target_url::validate_target_url;
use serde_json::json;
use tracing::{debug, warn};

/// Default number of candidates tried before code generation gives up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Service for creating and managing short links.
///
/// Enforces the URL and code rules before anything reaches the store, and
/// owns the bounded code generation loop.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    code_length: usize,
    max_attempts: usize,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service with default code settings.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self {
            link_repository,
            code_length: DEFAULT_CODE_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides the generated code length and the attempt budget.
    pub fn with_code_settings(mut self, code_length: usize, max_attempts: usize) -> Self {
        self.code_length = code_length;
        self.max_attempts = max_attempts;
        self
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `target_url` - Absolute URI the code should redirect to
    /// - `custom_code` - Optional code chosen by the client; an empty string
    ///   counts as absent
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or custom code is malformed.
    /// Returns [`AppError::Conflict`] if the custom code is already taken.
    /// Returns [`AppError::Internal`] on database errors or when no free code
    /// is found within the attempt budget.
    pub async fn create_link(
        &self,
        target_url: String,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        let target_url = validate_target_url(&target_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        let link = match custom_code.filter(|c| !c.is_empty()) {
            Some(code) => self.create_with_custom_code(target_url, code).await?,
            None => self.create_with_generated_code(target_url).await?,
        };

        debug!(code = %link.code, id = link.id, "Link created");
        Ok(link)
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Deletes a link together with its click history.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        if !self.link_repository.delete(code).await? {
            return Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            ));
        }

        debug!(code, "Link deleted");
        Ok(())
    }

    /// Lists every link, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list().await
    }

    /// Counts all links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_links(&self) -> Result<i64, AppError> {
        self.link_repository.count().await
    }

    /// Samples codes until one is not present in the store.
    ///
    /// Gives up after the configured attempt budget.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if every candidate collided or on
    /// database errors.
    pub async fn generate_unique_code(&self) -> Result<String, AppError> {
        for _ in 0..self.max_attempts {
            let code = generate_code(self.code_length);

            if self.link_repository.find_by_code(&code).await?.is_none() {
                return Ok(code);
            }
        }

        Err(Self::generation_exhausted())
    }

    async fn create_with_custom_code(
        &self,
        target_url: String,
        code: String,
    ) -> Result<Link, AppError> {
        validate_custom_code(&code)?;

        if self.link_repository.find_by_code(&code).await?.is_some() {
            return Err(Self::code_taken(&code));
        }

        let new_link = NewLink {
            code: code.clone(),
            target_url,
        };

        // A concurrent insert can still win the race between lookup and insert.
        match self.link_repository.create(new_link).await {
            Err(AppError::Conflict { .. }) => Err(Self::code_taken(&code)),
            other => other,
        }
    }

    /// Samples, checks and inserts codes until one sticks.
    ///
    /// A code already in the store and an insert lost to a concurrent writer
    /// both spend one attempt from the same budget.
    async fn create_with_generated_code(&self, target_url: String) -> Result<Link, AppError> {
        for attempt in 1..=self.max_attempts {
            let code = generate_code(self.code_length);

            if self.link_repository.find_by_code(&code).await?.is_some() {
                debug!(code = %code, attempt, "Generated code already in use");
                continue;
            }

            let new_link = NewLink {
                code: code.clone(),
                target_url: target_url.clone(),
            };

            match self.link_repository.create(new_link).await {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict { .. }) => {
                    warn!(code = %code, attempt, "Generated code was taken concurrently, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(Self::generation_exhausted())
    }

    fn code_taken(code: &str) -> AppError {
        AppError::conflict("Custom code already exists", json!({ "code": code }))
    }

    fn generation_exhausted() -> AppError {
        AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions" }),
        )
    }
}
