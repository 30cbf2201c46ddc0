//! Repository trait for the click log.

use crate::domain::entities::Click;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for recording and reading redirect events.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_click.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends a click for `link_id` and bumps the link's counters.
    ///
    /// The insert and the `total_clicks = total_clicks + 1` update happen in a
    /// single transaction, so concurrent redirects never lose increments.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the link was deleted in the meantime.
    /// Returns [`AppError::Internal`] on database errors.
    async fn record_click(&self, link_id: i64) -> Result<Click, AppError>;

    /// Lists the clicks of one link, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_by_link_id(&self, link_id: i64) -> Result<Vec<Click>, AppError>;

    /// Counts every recorded click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_all(&self) -> Result<i64, AppError>;
}
