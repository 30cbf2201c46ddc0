//! DTOs for click history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::links::LinkResponse;
use crate::application::services::ClickHistory;
use crate::domain::entities::Click;

/// A single recorded redirect.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickResponse {
    pub id: i64,
    pub link_id: i64,
    pub timestamp: DateTime<Utc>,
}

impl From<Click> for ClickResponse {
    fn from(click: Click) -> Self {
        Self {
            id: click.id,
            link_id: click.link_id,
            timestamp: click.timestamp,
        }
    }
}

/// A link and its click rows, newest first.
#[derive(Debug, Serialize)]
pub struct ClickHistoryResponse {
    pub link: LinkResponse,
    pub clicks: Vec<ClickResponse>,
}

impl From<ClickHistory> for ClickHistoryResponse {
    fn from(history: ClickHistory) -> Self {
        Self {
            link: history.link.into(),
            clicks: history.clicks.into_iter().map(Into::into).collect(),
        }
    }
}
