/// Upcoming release domain type
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Coming-soon release record
///
/// Announced on the coming-soon page before any audio exists; may carry a
/// teaser link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpcomingRelease {
    /// Unique release identifier
    pub id: String,

    /// Release title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Cover art URL
    pub cover_url: String,

    /// Teaser link (optional)
    pub teaser_url: Option<String>,

    /// Planned release date
    pub release_date: DateTime<Utc>,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last updated
    pub updated_at: DateTime<Utc>,
}

impl UpcomingRelease {
    /// Create a new upcoming release
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        release_date: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            cover_url: String::new(),
            teaser_url: None,
            release_date,
            created_at: now,
            updated_at: now,
        }
    }
}
