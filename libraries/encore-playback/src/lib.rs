//! Encore Player - Playback Session
//!
//! Client playback state machine for the Encore label site.
//!
//! This crate provides:
//! - Playlist store with canonical and active (shuffled) sequences
//! - Transport controls (play/pause/next/prev/seek) with wraparound
//! - Shuffle and repeat flags with identity-preserving index relocation
//! - Volume with an independent mute axis
//! - Track resolution by id through the catalog collaborator
//! - An event bridge that reconciles the playback element's asynchronous
//!   lifecycle with the session state
//!
//! # Architecture
//!
//! `encore-playback` knows nothing about how audio is produced or rendered.
//! The hosting surface mounts exactly one playback element (an HTML audio
//! element behind WASM, a native output stream, a test double) and wires it
//! to the session with the [`event_bridge`]: the element implementation gets
//! the emitter, the session gets the feed. The session is the element's only
//! commander; the UI reads session state and issues intents.
//!
//! Command failures never escape the session. A rejected start request is
//! logged and the playing intent stays set: the session favors a responsive
//! UI over strict agreement with the element, and the next lifecycle event
//! reconciles the difference.
//!
//! # Example
//!
//! ```rust
//! use encore_core::{Catalog, Track, UpcomingRelease};
//! use encore_playback::{event_bridge, PlaybackElement, PlayerConfig, PlayerSession};
//! use std::sync::Arc;
//!
//! // Element double: a real host would drive an audio resource here
//! struct SilentElement;
//!
//! impl PlaybackElement for SilentElement {
//!     fn load(&mut self, _url: &str) -> encore_playback::Result<()> { Ok(()) }
//!     fn play(&mut self) -> encore_playback::Result<()> { Ok(()) }
//!     fn pause(&mut self) -> encore_playback::Result<()> { Ok(()) }
//!     fn seek(&mut self, _position_secs: f64) -> encore_playback::Result<()> { Ok(()) }
//!     fn set_volume(&mut self, _level: f32) -> encore_playback::Result<()> { Ok(()) }
//!     fn set_muted(&mut self, _muted: bool) -> encore_playback::Result<()> { Ok(()) }
//! }
//!
//! struct EmptyCatalog;
//!
//! #[async_trait::async_trait]
//! impl Catalog for EmptyCatalog {
//!     async fn all_tracks(&self) -> encore_core::Result<Vec<Track>> { Ok(Vec::new()) }
//!     async fn published_tracks(&self) -> encore_core::Result<Vec<Track>> { Ok(Vec::new()) }
//!     async fn featured_tracks(&self) -> encore_core::Result<Vec<Track>> { Ok(Vec::new()) }
//!     async fn upcoming_releases(&self) -> encore_core::Result<Vec<UpcomingRelease>> {
//!         Ok(Vec::new())
//!     }
//! }
//!
//! let (_emitter, feed) = event_bridge();
//! let mut session = PlayerSession::new(
//!     PlayerConfig::default(),
//!     Box::new(SilentElement),
//!     feed,
//!     Arc::new(EmptyCatalog),
//! );
//!
//! session.replace_playlist(
//!     vec![Track::new("1", "Waalian", "Harpinder Singh", "/audio/Waalian.mp3")],
//!     false,
//! );
//! session.play(None);
//!
//! assert!(session.is_playing());
//! assert_eq!(session.current_track().unwrap().title, "Waalian");
//! ```

#![forbid(unsafe_code)]

mod element;
mod error;
mod events;
mod playlist;
mod session;
mod shuffle;
pub mod types;
mod volume;

// Public exports
pub use element::PlaybackElement;
pub use error::{PlayerError, Result};
pub use events::{event_bridge, ElementEvent, EventEmitter, EventFeed, StampedEvent};
pub use session::PlayerSession;
pub use types::{PlaybackState, PlayerConfig, PlayerSnapshot};
