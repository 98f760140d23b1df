//! Playback session - core orchestration
//!
//! Coordinates the playlist store, volume state, and the playback element.
//! All transitions run on the host's event loop: commands come from the UI,
//! element lifecycle events arrive through the bridge, and both mutate the
//! same session state without any parallelism.

use crate::{
    element::PlaybackElement,
    events::{ElementEvent, EventFeed},
    playlist::Playlist,
    types::{PlaybackState, PlayerConfig, PlayerSnapshot},
    volume::Volume,
};
use encore_core::{Catalog, Track, TrackId};
use std::sync::Arc;
use tracing::{debug, warn};

/// Central playback session
///
/// One instance per application, constructed by the composition root and
/// handed by reference to every consumer. Holds:
/// - the playlist store (canonical + active sequences)
/// - the transport state (selection, playing intent, shuffle/repeat flags)
/// - derived progress/duration reported by the element
/// - the single playback element, which nothing else may command
///
/// Command failures from the element are caught and logged, never returned:
/// the UI only ever observes state. The playing intent is optimistic, so a
/// rejected start leaves it set and the session briefly disagrees with the
/// element until the next lifecycle event.
pub struct PlayerSession {
    // Playlist
    playlist: Playlist,

    // Transport state
    current_index: Option<usize>,
    is_playing: bool,
    shuffle_enabled: bool,
    repeat_enabled: bool,

    // Derived from element events
    progress_percent: f64,
    duration_secs: f64,

    // Settings
    volume: Volume,

    // Collaborators
    element: Box<dyn PlaybackElement>,
    events: EventFeed,
    catalog: Arc<dyn Catalog>,

    // Resource currently loaded into the element
    loaded_track: Option<TrackId>,
}

impl PlayerSession {
    /// Create a new playback session
    ///
    /// `element` and `events` are the two halves of a single mounted
    /// playback element (see [`event_bridge`](crate::events::event_bridge));
    /// `catalog` is the data collaborator used to resolve track ids that are
    /// not in the current playlist.
    pub fn new(
        config: PlayerConfig,
        element: Box<dyn PlaybackElement>,
        events: EventFeed,
        catalog: Arc<dyn Catalog>,
    ) -> Self {
        let mut session = Self {
            playlist: Playlist::new(),
            current_index: None,
            is_playing: false,
            shuffle_enabled: config.shuffle,
            repeat_enabled: config.repeat,
            progress_percent: 0.0,
            duration_secs: 0.0,
            volume: Volume::new(config.volume),
            element,
            events,
            catalog,
            loaded_track: None,
        };

        // Push the initial volume state into the element
        if let Err(err) = session.element.set_volume(session.volume.level()) {
            warn!(error = %err, "failed to apply initial volume");
        }
        if let Err(err) = session.element.set_muted(session.volume.is_muted()) {
            warn!(error = %err, "failed to apply initial mute state");
        }

        session
    }

    // ===== Playlist =====

    /// Replace the playlist wholesale
    ///
    /// A sequence structurally identical to the current one (same ids, same
    /// order) is ignored entirely, so re-renders and navigation cannot
    /// reshuffle or restart playback. On a real replacement the selection
    /// follows the selected track into the new active sequence by id, or is
    /// cleared when the track is gone. With `auto_play` set and a non-empty
    /// sequence, the first track starts immediately.
    pub fn replace_playlist(&mut self, tracks: Vec<Track>, auto_play: bool) {
        let selected = self.current_track().map(|t| t.id.clone());

        if !self.playlist.replace(tracks, self.shuffle_enabled) {
            debug!("playlist replacement skipped: sequence unchanged");
            return;
        }

        if auto_play && !self.playlist.is_empty() {
            self.current_index = Some(0);
            self.progress_percent = 0.0;
            self.is_playing = true;
            self.start_current();
            return;
        }

        if let Some(id) = selected {
            match self.playlist.position_of(&id) {
                Some(index) => self.current_index = Some(index),
                None => self.clear_selection(),
            }
        }
    }

    /// Play a track by id, resolving through the catalog when needed
    ///
    /// If the id is in the active sequence, plays it. Otherwise fetches the
    /// full catalog, replaces the playlist (respecting the shuffle flag),
    /// and plays the track from there. An id that is absent even from the
    /// full catalog is a defined no-op, as is a failed fetch.
    pub async fn resolve_and_play(&mut self, id: &TrackId) {
        if let Some(index) = self.playlist.position_of(id) {
            self.play(Some(index));
            return;
        }

        let all = match self.catalog.all_tracks().await {
            Ok(tracks) => tracks,
            Err(err) => {
                warn!(track = %id, error = %err, "catalog fetch failed while resolving track");
                return;
            }
        };

        if !all.iter().any(|t| &t.id == id) {
            debug!(track = %id, "track not found in catalog");
            return;
        }

        self.replace_playlist(all, false);

        if let Some(index) = self.playlist.position_of(id) {
            self.play(Some(index));
        }
    }

    // ===== Transport =====

    /// Start or resume playback
    ///
    /// With an index, selects that track (resetting progress when the
    /// selection actually changes); without one, resumes the current
    /// selection or starts at the first track. No-op on an empty playlist
    /// or an out-of-range index.
    pub fn play(&mut self, index: Option<usize>) {
        if self.playlist.is_empty() {
            debug!("play ignored: playlist is empty");
            return;
        }

        let target = index.or(self.current_index).unwrap_or(0);
        if target >= self.playlist.len() {
            debug!(index = target, "play ignored: index out of range");
            return;
        }

        if self.current_index != Some(target) {
            self.current_index = Some(target);
            self.progress_percent = 0.0;
        }
        self.is_playing = true;
        self.start_current();
    }

    /// Pause playback
    ///
    /// Always succeeds from the caller's perspective.
    pub fn pause(&mut self) {
        self.is_playing = false;
        if let Err(err) = self.element.pause() {
            warn!(error = %err, "pause command failed");
        }
    }

    /// Skip to the next track, wrapping past the end
    pub fn play_next(&mut self) {
        let len = self.playlist.len();
        if len == 0 {
            debug!("next ignored: playlist is empty");
            return;
        }

        let next = match self.current_index {
            Some(index) => (index + 1) % len,
            None => 0,
        };
        self.play(Some(next));
    }

    /// Go back to the previous track, wrapping past the start
    pub fn play_prev(&mut self) {
        let len = self.playlist.len();
        if len == 0 {
            debug!("previous ignored: playlist is empty");
            return;
        }

        let prev = match self.current_index {
            Some(index) => (index + len - 1) % len,
            None => len - 1,
        };
        self.play(Some(prev));
    }

    /// Jump to a position expressed as a percentage (0-100)
    ///
    /// Ignored until the element has reported a duration; the progress
    /// display updates optimistically before the element confirms.
    pub fn seek(&mut self, percent: f64) {
        if self.duration_secs <= 0.0 {
            debug!("seek ignored: duration not yet known");
            return;
        }

        let percent = percent.clamp(0.0, 100.0);
        let position = percent / 100.0 * self.duration_secs;

        if let Err(err) = self.element.seek(position) {
            warn!(error = %err, "seek command failed");
        }
        self.progress_percent = percent;
    }

    // ===== Shuffle & Repeat =====

    /// Flip the shuffle flag
    ///
    /// Enabling draws a fresh permutation of the canonical order; disabling
    /// reverts to it. Either way the selected track keeps playing: the
    /// selection is relocated to the track's new position by id, and the
    /// loaded resource is untouched.
    pub fn toggle_shuffle(&mut self) {
        self.shuffle_enabled = !self.shuffle_enabled;

        let selected = self.current_track().map(|t| t.id.clone());
        self.playlist.set_shuffled(self.shuffle_enabled);

        if let Some(id) = selected {
            self.current_index = self.playlist.position_of(&id);
        }
    }

    /// Flip the repeat flag
    ///
    /// Pure flag; consulted only when a track ends.
    pub fn toggle_repeat(&mut self) {
        self.repeat_enabled = !self.repeat_enabled;
    }

    // ===== Volume =====

    /// Set the volume (0.0-1.0)
    ///
    /// Zero mutes, anything else unmutes; the element's own mute flag is
    /// left alone (a zero-volume element is already silent).
    pub fn set_volume(&mut self, level: f32) {
        let level = self.volume.set_level(level);
        if let Err(err) = self.element.set_volume(level) {
            warn!(error = %err, "volume command failed");
        }
    }

    /// Flip the mute flag, preserving the stored volume level
    pub fn toggle_mute(&mut self) {
        let muted = self.volume.toggle_mute();
        if let Err(err) = self.element.set_muted(muted) {
            warn!(error = %err, "mute command failed");
        }
    }

    // ===== Element events =====

    /// Drain and handle pending element events
    ///
    /// Call from the host's event loop. Events stamped with an earlier load
    /// generation raced a resource change and are dropped: acting on them
    /// would apply a finished or seeking resource's lifecycle to a track
    /// that replaced it.
    pub fn pump_events(&mut self) {
        while let Some(stamped) = self.events.try_next() {
            if stamped.generation != self.events.current_generation() {
                debug!(
                    generation = stamped.generation,
                    "dropping element event from a previous load"
                );
                continue;
            }
            self.handle_event(stamped.event);
        }
    }

    /// Handle one element lifecycle event
    ///
    /// Exposed for hosts that deliver events synchronously instead of
    /// through the bridge; such hosts are responsible for not delivering
    /// events that outlived their resource.
    pub fn handle_event(&mut self, event: ElementEvent) {
        if self.current_index.is_none() {
            debug!("element event ignored: nothing selected");
            return;
        }

        match event {
            ElementEvent::TimeUpdate {
                position_secs,
                duration_secs,
            } => {
                self.duration_secs = sanitize_duration(duration_secs);
                self.progress_percent = if self.duration_secs > 0.0 {
                    let percent = position_secs / self.duration_secs * 100.0;
                    if percent.is_finite() {
                        percent.clamp(0.0, 100.0)
                    } else {
                        0.0
                    }
                } else {
                    0.0
                };
            }
            ElementEvent::MetadataLoaded { duration_secs } => {
                self.duration_secs = sanitize_duration(duration_secs);
            }
            ElementEvent::Ended => {
                if self.repeat_enabled {
                    // Same resource, so the load generation stays valid
                    if let Err(err) = self.element.seek(0.0) {
                        warn!(error = %err, "restart seek failed");
                    }
                    self.progress_percent = 0.0;
                    if let Err(err) = self.element.play() {
                        warn!(error = %err, "restart play failed");
                    }
                } else {
                    self.play_next();
                }
            }
        }
    }

    // ===== State queries =====

    /// The active sequence
    pub fn playlist(&self) -> &[Track] {
        self.playlist.tracks()
    }

    /// The selected track, if any
    pub fn current_track(&self) -> Option<&Track> {
        self.current_index.and_then(|index| self.playlist.get(index))
    }

    /// Index of the selected track in the active sequence
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// Playing intent
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Shuffle flag
    pub fn is_shuffle(&self) -> bool {
        self.shuffle_enabled
    }

    /// Repeat flag
    pub fn is_repeat(&self) -> bool {
        self.repeat_enabled
    }

    /// Playback progress (0-100)
    pub fn progress_percent(&self) -> f64 {
        self.progress_percent
    }

    /// Duration of the loaded resource in seconds (0 until metadata arrives)
    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    /// Stored volume level (0.0-1.0)
    pub fn volume(&self) -> f32 {
        self.volume.level()
    }

    /// Mute flag
    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    /// Transport state derived from selection and intent
    pub fn state(&self) -> PlaybackState {
        match (self.current_index, self.is_playing) {
            (None, _) => PlaybackState::Idle,
            (Some(_), false) => PlaybackState::Paused,
            (Some(_), true) => PlaybackState::Playing,
        }
    }

    /// Serializable snapshot of the whole session state
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            current_track_id: self.current_track().map(|t| t.id.clone()),
            current_index: self.current_index,
            is_playing: self.is_playing,
            is_shuffle: self.shuffle_enabled,
            is_repeat: self.repeat_enabled,
            progress_percent: self.progress_percent,
            duration_secs: self.duration_secs,
            volume: self.volume.level(),
            is_muted: self.volume.is_muted(),
        }
    }

    // ===== Internal =====

    /// Load the selected track into the element if needed, then start it
    ///
    /// Loading bumps the event generation first, so lifecycle events from
    /// the superseded resource are recognizable as stale. A rejected start
    /// is logged and swallowed; the playing intent stays set.
    fn start_current(&mut self) {
        let Some(index) = self.current_index else {
            return;
        };
        let Some(track) = self.playlist.get(index) else {
            return;
        };
        let id = track.id.clone();
        let url = track.audio_url.clone();

        if self.loaded_track.as_ref() != Some(&id) {
            self.events.advance_generation();
            self.duration_secs = 0.0;
            if let Err(err) = self.element.load(&url) {
                warn!(track = %id, error = %err, "failed to load audio resource");
            }
            self.loaded_track = Some(id.clone());
        }

        if let Err(err) = self.element.play() {
            warn!(track = %id, error = %err, "playback request rejected");
        }
    }

    /// Drop the selection after the selected track left the playlist
    fn clear_selection(&mut self) {
        self.current_index = None;
        self.is_playing = false;
        self.progress_percent = 0.0;
        self.duration_secs = 0.0;
        if let Err(err) = self.element.pause() {
            warn!(error = %err, "pause command failed");
        }
    }
}

/// Coerce a reported duration to something usable (NaN and negatives to 0)
fn sanitize_duration(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
