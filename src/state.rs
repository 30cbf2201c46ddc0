//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::link_service::DEFAULT_MAX_ATTEMPTS;
use crate::application::services::{LinkService, RedirectService};
use crate::infrastructure::persistence::{PgClickRepository, PgLinkRepository};
use crate::utils::code_generator::DEFAULT_CODE_LENGTH;

pub type AppLinkService = LinkService<PgLinkRepository>;
pub type AppRedirectService = RedirectService<PgLinkRepository, PgClickRepository>;

/// Services wired to PostgreSQL, cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<PgPool>,
    pub link_service: Arc<AppLinkService>,
    pub redirect_service: Arc<AppRedirectService>,
}

impl AppState {
    /// Builds the state with default code generation settings.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self::with_code_settings(pool, DEFAULT_CODE_LENGTH, DEFAULT_MAX_ATTEMPTS)
    }

    /// Builds the state with an explicit code length and attempt budget.
    pub fn with_code_settings(pool: Arc<PgPool>, code_length: usize, max_attempts: usize) -> Self {
        let link_repository = Arc::new(PgLinkRepository::new(pool.clone()));
        let click_repository = Arc::new(PgClickRepository::new(pool.clone()));

        let link_service = Arc::new(
            LinkService::new(link_repository.clone()).with_code_settings(code_length, max_attempts),
        );
        let redirect_service = Arc::new(RedirectService::new(link_repository, click_repository));

        Self {
            pool,
            link_service,
            redirect_service,
        }
    }
}
