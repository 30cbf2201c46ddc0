//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A redirect recorded against a link.
///
/// Clicks are append-only and are removed only when their link is deleted.
#[derive(Debug, Clone, PartialEq)]
pub struct Click {
    pub id: i64,
    pub link_id: i64,
    pub timestamp: DateTime<Utc>,
}

impl Click {
    pub fn new(id: i64, link_id: i64, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            link_id,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_creation() {
        let now = Utc::now();
        let click = Click::new(1, 42, now);

        assert_eq!(click.id, 1);
        assert_eq!(click.link_id, 42);
        assert_eq!(click.timestamp, now);
    }
}
