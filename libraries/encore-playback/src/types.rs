//! Core types for the playback session

use encore_core::TrackId;
use serde::{Deserialize, Serialize};

/// Transport state of the session
///
/// Derived from the selection and the playing intent; there is no separate
/// "loading" state because the element reports readiness asynchronously and
/// the intent stays optimistic in the meantime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// Nothing selected
    Idle,

    /// A track is selected but playback intent is off
    Paused,

    /// A track is selected and playback intent is on
    Playing,
}

/// Configuration for the playback session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Initial volume (0.0-1.0, default: 0.8)
    pub volume: f32,

    /// Initial shuffle flag (default: off)
    pub shuffle: bool,

    /// Initial repeat flag (default: off)
    pub repeat: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            volume: 0.8,
            shuffle: false,
            repeat: false,
        }
    }
}

/// Serializable snapshot of the session state
///
/// Everything a UI needs to render transport controls in one read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// Id of the selected track, if any
    pub current_track_id: Option<TrackId>,

    /// Index of the selected track in the active sequence, if any
    pub current_index: Option<usize>,

    /// Playing intent
    pub is_playing: bool,

    /// Shuffle flag
    pub is_shuffle: bool,

    /// Repeat flag
    pub is_repeat: bool,

    /// Playback progress (0-100)
    pub progress_percent: f64,

    /// Duration of the loaded resource in seconds (0 until metadata arrives)
    pub duration_secs: f64,

    /// Stored volume level (0.0-1.0)
    pub volume: f32,

    /// Mute flag
    pub is_muted: bool,
}
