/// Track domain type
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique track identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(String);

impl TrackId {
    /// Create a new track id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TrackId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for TrackId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Published track record
///
/// The catalog document the label site renders and the player consumes.
/// Read-only from the player's perspective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Cover art URL (empty when a generated gradient cover is used)
    pub cover_url: String,

    /// Audio resource locator handed to the playback element
    pub audio_url: String,

    /// Release date
    pub release_date: DateTime<Utc>,

    /// Whether the track appears on the features page
    pub featured: bool,

    /// Whether the track is visible on the public site
    pub published: bool,

    /// Manual sort position among same-day releases
    pub order: u32,

    /// Short promotional blurb (optional)
    pub blurb: Option<String>,

    /// Full lyrics (optional)
    pub lyrics: Option<String>,

    /// When the record was created
    pub created_at: DateTime<Utc>,

    /// When the record was last updated
    pub updated_at: DateTime<Utc>,
}

impl Track {
    /// Create a new published track with minimal metadata
    pub fn new(
        id: impl Into<TrackId>,
        title: impl Into<String>,
        artist: impl Into<String>,
        audio_url: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            cover_url: String::new(),
            audio_url: audio_url.into(),
            release_date: now,
            featured: false,
            published: true,
            order: 0,
            blurb: None,
            lyrics: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the track has uploaded cover art
    pub fn has_cover(&self) -> bool {
        !self.cover_url.is_empty()
    }
}
