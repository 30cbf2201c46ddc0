//! Redirect resolution and click bookkeeping.

use std::sync::Arc;

use crate::domain::entities::{Click, Link};
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;
use serde_json::json;
use tracing::{debug, warn};

/// Where a short code sends the visitor.
#[derive(Debug, Clone, PartialEq)]
pub struct RedirectTarget {
    pub link_id: i64,
    pub target_url: String,
    /// False when the click could not be written; the redirect still happens.
    pub click_recorded: bool,
}

/// A link together with its raw click rows, newest first.
#[derive(Debug, Clone)]
pub struct ClickHistory {
    pub link: Link,
    pub clicks: Vec<Click>,
}

/// Service resolving short codes and recording the resulting clicks.
pub struct RedirectService<L: LinkRepository, C: ClickRepository> {
    link_repository: Arc<L>,
    click_repository: Arc<C>,
}

impl<L: LinkRepository, C: ClickRepository> RedirectService<L, C> {
    /// Creates a new redirect service.
    pub fn new(link_repository: Arc<L>, click_repository: Arc<C>) -> Self {
        Self {
            link_repository,
            click_repository,
        }
    }

    /// Resolves `code` and records one click against it.
    ///
    /// The click row and the counter update are written before this returns.
    /// A failed write is logged and otherwise ignored: the visitor is still
    /// redirected, and the click simply goes uncounted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown; no click is written.
    /// Returns [`AppError::Internal`] if the lookup itself fails.
    pub async fn resolve_and_redirect(&self, code: &str) -> Result<RedirectTarget, AppError> {
        let link = self
            .link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))?;

        let click_recorded = match self.click_repository.record_click(link.id).await {
            Ok(click) => {
                debug!(code, click_id = click.id, "Click recorded");
                true
            }
            Err(e) => {
                warn!(code, link_id = link.id, error = %e, "Failed to record click");
                false
            }
        };

        Ok(RedirectTarget {
            link_id: link.id,
            target_url: link.target_url,
            click_recorded,
        })
    }

    /// Returns the link and every click recorded against it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn click_history(&self, code: &str) -> Result<ClickHistory, AppError> {
        let link = self
            .link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))?;

        let clicks = self.click_repository.list_by_link_id(link.id).await?;

        Ok(ClickHistory { link, clicks })
    }

    /// Counts every click recorded across all links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_clicks(&self) -> Result<i64, AppError> {
        self.click_repository.count_all().await
    }
}
