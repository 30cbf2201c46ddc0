//! DTOs for link management endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::domain::entities::Link;
use crate::utils::code_generator::CODE_REGEX;

/// Request to create a short link.
///
/// ```json
/// { "targetUrl": "https://example.com", "customCode": "promo24" }
/// ```
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    /// The URL to redirect to (must be an absolute URI).
    #[validate(url(message = "Invalid URL format"))]
    pub target_url: String,

    /// Optional custom short code. `""` and `null` both mean "generate one".
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(regex(
        path = *CODE_REGEX,
        message = "Custom code must be 6-8 letters or digits"
    ))]
    pub custom_code: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// JSON representation of a link.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub id: i64,
    pub code: String,
    pub target_url: String,
    pub total_clicks: i64,
    pub last_clicked: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            code: link.code,
            target_url: link.target_url,
            total_clicks: link.total_clicks,
            last_clicked: link.last_clicked,
            created_at: link.created_at,
        }
    }
}

/// Body returned after a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteLinkResponse {
    pub success: bool,
}
