//! Playlist store
//!
//! Keeps the canonical (as-supplied) sequence and the active (traversal)
//! sequence side by side. Shuffle only ever permutes the active sequence;
//! the canonical order changes solely through wholesale replacement.

use crate::shuffle::shuffled;
use encore_core::{Track, TrackId};

/// Canonical + active track sequences
///
/// Invariant: both sequences always have the same length and hold the same
/// tracks; the active sequence is the canonical one or a permutation of it.
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    /// Sequence as supplied by the hosting page
    canonical: Vec<Track>,

    /// Sequence the transport traverses
    active: Vec<Track>,
}

impl Playlist {
    /// Create an empty playlist
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the playlist wholesale
    ///
    /// Returns `false` without touching anything when the incoming sequence
    /// is structurally identical (same ids, same order) to the current
    /// canonical sequence. Re-renders and navigation hand the same list back
    /// repeatedly; replacing on those would reshuffle and restart playback.
    pub fn replace(&mut self, tracks: Vec<Track>, shuffle: bool) -> bool {
        if same_id_sequence(&self.canonical, &tracks) {
            return false;
        }

        self.active = if shuffle {
            shuffled(&tracks)
        } else {
            tracks.clone()
        };
        self.canonical = tracks;
        true
    }

    /// Recompute the active sequence for the given shuffle flag
    ///
    /// Enabling draws a fresh permutation; disabling reverts to canonical
    /// order.
    pub fn set_shuffled(&mut self, shuffle: bool) {
        self.active = if shuffle {
            shuffled(&self.canonical)
        } else {
            self.canonical.clone()
        };
    }

    /// Locate a track in the active sequence by id
    pub fn position_of(&self, id: &TrackId) -> Option<usize> {
        self.active.iter().position(|t| &t.id == id)
    }

    /// Get the active sequence
    pub fn tracks(&self) -> &[Track] {
        &self.active
    }

    /// Get the canonical sequence
    pub fn canonical(&self) -> &[Track] {
        &self.canonical
    }

    /// Get the track at an active-sequence index
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.active.get(index)
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Check if the playlist is empty
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

/// Structural identity: same ids in the same order
fn same_id_sequence(a: &[Track], b: &[Track]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.id == y.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_tracks(ids: &[&str]) -> Vec<Track> {
        ids.iter()
            .map(|id| {
                Track::new(
                    *id,
                    format!("Track {}", id),
                    "Test Artist",
                    format!("/audio/{}.mp3", id),
                )
            })
            .collect()
    }

    fn active_ids(playlist: &Playlist) -> Vec<String> {
        playlist
            .tracks()
            .iter()
            .map(|t| t.id.to_string())
            .collect()
    }

    #[test]
    fn replace_sets_both_sequences() {
        let mut playlist = Playlist::new();
        assert!(playlist.replace(test_tracks(&["a", "b", "c"]), false));

        assert_eq!(active_ids(&playlist), vec!["a", "b", "c"]);
        assert_eq!(playlist.canonical().len(), 3);
        assert_eq!(playlist.len(), 3);
    }

    #[test]
    fn identical_replacement_is_noop() {
        let mut playlist = Playlist::new();
        playlist.replace(test_tracks(&["a", "b", "c"]), true);

        let order_before = active_ids(&playlist);
        assert!(!playlist.replace(test_tracks(&["a", "b", "c"]), true));

        // no reshuffle happened
        assert_eq!(active_ids(&playlist), order_before);
    }

    #[test]
    fn reordered_replacement_is_not_identical() {
        let mut playlist = Playlist::new();
        playlist.replace(test_tracks(&["a", "b"]), false);

        assert!(playlist.replace(test_tracks(&["b", "a"]), false));
        assert_eq!(active_ids(&playlist), vec!["b", "a"]);
    }

    #[test]
    fn shuffle_roundtrip_restores_canonical() {
        let mut playlist = Playlist::new();
        playlist.replace(test_tracks(&["a", "b", "c", "d", "e"]), false);

        playlist.set_shuffled(true);
        assert_eq!(playlist.len(), 5);

        playlist.set_shuffled(false);
        assert_eq!(active_ids(&playlist), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn shuffle_preserves_lengths() {
        let mut playlist = Playlist::new();
        playlist.replace(test_tracks(&["a", "b", "c"]), false);

        playlist.set_shuffled(true);
        assert_eq!(playlist.len(), playlist.canonical().len());
    }

    #[test]
    fn position_of_searches_active_sequence() {
        let mut playlist = Playlist::new();
        playlist.replace(test_tracks(&["a", "b", "c"]), false);

        assert_eq!(playlist.position_of(&TrackId::from("b")), Some(1));
        assert_eq!(playlist.position_of(&TrackId::from("missing")), None);
    }

    #[test]
    fn empty_replacement_clears() {
        let mut playlist = Playlist::new();
        playlist.replace(test_tracks(&["a"]), false);

        assert!(playlist.replace(Vec::new(), false));
        assert!(playlist.is_empty());
        assert!(playlist.canonical().is_empty());
    }
}
