//! Playback element seam
//!
//! Abstracts the single audio-output channel the session drives. The
//! hosting surface mounts exactly one element (an HTML audio element, a
//! native output stream, a test double) and the session is the only writer.

use crate::error::Result;

/// Platform-agnostic playback element
///
/// All commands coalesce: issuing a new command supersedes whatever the
/// element was doing, there is no cancellation primitive. Implementations
/// report their asynchronous lifecycle through the
/// [`EventEmitter`](crate::events::EventEmitter) they were mounted with.
pub trait PlaybackElement: Send {
    /// Load a new audio resource
    ///
    /// Discards the previous resource. Position and duration reset; a
    /// `MetadataLoaded` event follows once the new resource is probed.
    fn load(&mut self, url: &str) -> Result<()>;

    /// Start or resume playback of the loaded resource
    ///
    /// # Errors
    /// Returns an error when the resource refuses to start (autoplay
    /// policy, network failure). The session logs and swallows this.
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self) -> Result<()>;

    /// Jump to an absolute position in seconds
    fn seek(&mut self, position_secs: f64) -> Result<()>;

    /// Set the output volume (0.0 = silent, 1.0 = full volume)
    fn set_volume(&mut self, level: f32) -> Result<()>;

    /// Set the mute flag without touching the volume
    fn set_muted(&mut self, muted: bool) -> Result<()>;
}
