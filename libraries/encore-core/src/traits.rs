/// Core traits for Encore Player
use crate::error::Result;
use crate::types::{Track, UpcomingRelease};
use async_trait::async_trait;

/// Catalog trait
///
/// The data collaborator behind the public site and the player. Hosting
/// pages fetch a catalog view and hand it to the playback session; the
/// session itself only reaches back for `all_tracks` when resolving a track
/// id that is not in the current playlist.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Get every track, published or not, in insertion order
    async fn all_tracks(&self) -> Result<Vec<Track>>;

    /// Get published tracks, newest release first, ties broken by the
    /// manual `order` field
    async fn published_tracks(&self) -> Result<Vec<Track>>;

    /// Get published tracks marked as featured, newest release first
    async fn featured_tracks(&self) -> Result<Vec<Track>>;

    /// Get announced releases, soonest first
    async fn upcoming_releases(&self) -> Result<Vec<UpcomingRelease>>;
}
