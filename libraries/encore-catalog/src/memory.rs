//! In-memory catalog store
//!
//! Backs the `Catalog` trait with plain vectors behind `RwLock`s. Query
//! ordering matches what the public pages expect: published tracks newest
//! first with the manual `order` field breaking ties, upcoming releases
//! soonest first.

use async_trait::async_trait;
use chrono::Utc;
use encore_core::{Catalog, EncoreError, Result, Track, TrackId, UpcomingRelease};
use std::sync::RwLock;
use tracing::debug;

/// In-memory catalog
///
/// Shared behind an `Arc`; reads and writes go through `RwLock`s so the
/// provider is usable from the player and the admin surface at once.
pub struct MemoryCatalog {
    tracks: RwLock<Vec<Track>>,
    upcoming: RwLock<Vec<UpcomingRelease>>,
}

impl MemoryCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            tracks: RwLock::new(Vec::new()),
            upcoming: RwLock::new(Vec::new()),
        }
    }

    /// Create a catalog seeded with tracks
    pub fn with_tracks(tracks: Vec<Track>) -> Self {
        Self {
            tracks: RwLock::new(tracks),
            upcoming: RwLock::new(Vec::new()),
        }
    }

    /// Create a catalog seeded with tracks and upcoming releases
    pub fn with_records(tracks: Vec<Track>, upcoming: Vec<UpcomingRelease>) -> Self {
        Self {
            tracks: RwLock::new(tracks),
            upcoming: RwLock::new(upcoming),
        }
    }

    // ===== Admin mutations =====

    /// Insert a track
    ///
    /// Rejects duplicate ids.
    pub fn insert_track(&self, track: Track) -> Result<()> {
        let mut tracks = self.write_tracks()?;
        if tracks.iter().any(|t| t.id == track.id) {
            return Err(EncoreError::invalid_input(format!(
                "duplicate track id: {}",
                track.id
            )));
        }
        debug!(id = %track.id, title = %track.title, "track inserted");
        tracks.push(track);
        Ok(())
    }

    /// Replace an existing track record, refreshing its update timestamp
    pub fn update_track(&self, track: Track) -> Result<()> {
        let mut tracks = self.write_tracks()?;
        let existing = tracks
            .iter_mut()
            .find(|t| t.id == track.id)
            .ok_or_else(|| EncoreError::not_found("Track", track.id.as_str()))?;
        debug!(id = %track.id, "track updated");
        *existing = Track {
            updated_at: Utc::now(),
            ..track
        };
        Ok(())
    }

    /// Remove a track by id
    pub fn remove_track(&self, id: &TrackId) -> Result<Track> {
        let mut tracks = self.write_tracks()?;
        let position = tracks
            .iter()
            .position(|t| &t.id == id)
            .ok_or_else(|| EncoreError::not_found("Track", id.as_str()))?;
        debug!(%id, "track removed");
        Ok(tracks.remove(position))
    }

    /// Insert an upcoming release
    ///
    /// Rejects duplicate ids.
    pub fn insert_upcoming(&self, release: UpcomingRelease) -> Result<()> {
        let mut upcoming = self.write_upcoming()?;
        if upcoming.iter().any(|u| u.id == release.id) {
            return Err(EncoreError::invalid_input(format!(
                "duplicate release id: {}",
                release.id
            )));
        }
        debug!(id = %release.id, title = %release.title, "upcoming release inserted");
        upcoming.push(release);
        Ok(())
    }

    /// Replace an existing upcoming release, refreshing its update timestamp
    pub fn update_upcoming(&self, release: UpcomingRelease) -> Result<()> {
        let mut upcoming = self.write_upcoming()?;
        let existing = upcoming
            .iter_mut()
            .find(|u| u.id == release.id)
            .ok_or_else(|| EncoreError::not_found("UpcomingRelease", release.id.clone()))?;
        debug!(id = %release.id, "upcoming release updated");
        *existing = UpcomingRelease {
            updated_at: Utc::now(),
            ..release
        };
        Ok(())
    }

    /// Remove an upcoming release by id
    pub fn remove_upcoming(&self, id: &str) -> Result<UpcomingRelease> {
        let mut upcoming = self.write_upcoming()?;
        let position = upcoming
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| EncoreError::not_found("UpcomingRelease", id))?;
        debug!(id, "upcoming release removed");
        Ok(upcoming.remove(position))
    }

    // ===== Lock helpers =====

    fn read_tracks(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<Track>>> {
        self.tracks
            .read()
            .map_err(|_| EncoreError::catalog("track store lock poisoned"))
    }

    fn write_tracks(&self) -> Result<std::sync::RwLockWriteGuard<'_, Vec<Track>>> {
        self.tracks
            .write()
            .map_err(|_| EncoreError::catalog("track store lock poisoned"))
    }

    fn read_upcoming(&self) -> Result<std::sync::RwLockReadGuard<'_, Vec<UpcomingRelease>>> {
        self.upcoming
            .read()
            .map_err(|_| EncoreError::catalog("upcoming store lock poisoned"))
    }

    fn write_upcoming(&self) -> Result<std::sync::RwLockWriteGuard<'_, Vec<UpcomingRelease>>> {
        self.upcoming
            .write()
            .map_err(|_| EncoreError::catalog("upcoming store lock poisoned"))
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Catalog for MemoryCatalog {
    async fn all_tracks(&self) -> Result<Vec<Track>> {
        Ok(self.read_tracks()?.clone())
    }

    async fn published_tracks(&self) -> Result<Vec<Track>> {
        let mut tracks: Vec<Track> = self
            .read_tracks()?
            .iter()
            .filter(|t| t.published)
            .cloned()
            .collect();
        tracks.sort_by(|a, b| {
            b.release_date
                .cmp(&a.release_date)
                .then_with(|| a.order.cmp(&b.order))
        });
        Ok(tracks)
    }

    async fn featured_tracks(&self) -> Result<Vec<Track>> {
        let mut tracks: Vec<Track> = self
            .read_tracks()?
            .iter()
            .filter(|t| t.published && t.featured)
            .cloned()
            .collect();
        tracks.sort_by(|a, b| b.release_date.cmp(&a.release_date));
        Ok(tracks)
    }

    async fn upcoming_releases(&self) -> Result<Vec<UpcomingRelease>> {
        let mut upcoming = self.read_upcoming()?.clone();
        upcoming.sort_by(|a, b| a.release_date.cmp(&b.release_date));
        Ok(upcoming)
    }
}
