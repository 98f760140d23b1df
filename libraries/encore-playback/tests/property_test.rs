//! Property-based tests for the playback session
//!
//! Uses proptest to verify transport and playlist invariants across many
//! random inputs.

mod common;

use common::{test_tracks, RecordingElement};
use encore_catalog::MemoryCatalog;
use encore_playback::{event_bridge, PlayerConfig, PlayerSession};
use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

fn session_of(len: usize) -> PlayerSession {
    let ids: Vec<String> = (0..len).map(|i| format!("t{}", i)).collect();
    let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();

    let (element, _commands) = RecordingElement::new();
    let (_emitter, feed) = event_bridge();
    let catalog = Arc::new(MemoryCatalog::new());

    let mut session = PlayerSession::new(PlayerConfig::default(), Box::new(element), feed, catalog);
    session.replace_playlist(test_tracks(&id_refs), false);
    session
}

proptest! {
    /// Property: next then prev (and prev then next) return to the starting
    /// index, wraparound included
    #[test]
    fn next_prev_are_inverse(len in 1usize..40, start in 0usize..40) {
        let start = start % len;
        let mut session = session_of(len);
        session.play(Some(start));

        session.play_next();
        session.play_prev();
        prop_assert_eq!(session.current_index(), Some(start));

        session.play_prev();
        session.play_next();
        prop_assert_eq!(session.current_index(), Some(start));
    }

    /// Property: any number of next/prev steps keeps the index in bounds
    #[test]
    fn transport_index_always_valid(
        len in 1usize..30,
        steps in prop::collection::vec(any::<bool>(), 1..60)
    ) {
        let mut session = session_of(len);
        session.play(None);

        for forward in steps {
            if forward {
                session.play_next();
            } else {
                session.play_prev();
            }

            let index = session.current_index().unwrap();
            prop_assert!(index < session.playlist().len());
        }
    }

    /// Property: n forward steps land (start + n) mod len
    #[test]
    fn next_is_modular_arithmetic(len in 1usize..20, steps in 0usize..50) {
        let mut session = session_of(len);
        session.play(Some(0));

        for _ in 0..steps {
            session.play_next();
        }

        prop_assert_eq!(session.current_index(), Some(steps % len));
    }

    /// Property: shuffle toggling never adds, drops, or duplicates tracks,
    /// and the selected track survives by id
    #[test]
    fn shuffle_preserves_tracks_and_selection(
        len in 1usize..30,
        start in 0usize..30,
        toggles in 1usize..6
    ) {
        let start = start % len;
        let mut session = session_of(len);
        session.play(Some(start));

        let original: HashSet<String> =
            session.playlist().iter().map(|t| t.id.to_string()).collect();
        let selected = session.current_track().unwrap().id.clone();

        for _ in 0..toggles {
            session.toggle_shuffle();

            let after: HashSet<String> =
                session.playlist().iter().map(|t| t.id.to_string()).collect();
            prop_assert_eq!(session.playlist().len(), len);
            prop_assert_eq!(&after, &original);
            prop_assert_eq!(&session.current_track().unwrap().id, &selected);
        }
    }

    /// Property: an even number of toggles restores canonical order exactly
    #[test]
    fn even_toggles_restore_canonical_order(len in 1usize..30, pairs in 1usize..4) {
        let mut session = session_of(len);
        let original = common::ids_of(session.playlist());

        for _ in 0..pairs {
            session.toggle_shuffle();
            session.toggle_shuffle();
        }

        prop_assert_eq!(common::ids_of(session.playlist()), original);
    }

    /// Property: the mute flag tracks whether the clamped level is zero
    /// after any sequence of volume writes
    #[test]
    fn volume_mute_coupling(levels in prop::collection::vec(-0.5f32..1.5, 1..20)) {
        let mut session = session_of(1);

        for level in levels {
            session.set_volume(level);

            let clamped = level.clamp(0.0, 1.0);
            prop_assert_eq!(session.volume(), clamped);
            prop_assert_eq!(session.is_muted(), clamped == 0.0);
        }
    }

    /// Property: re-supplying the identical sequence is always invisible
    #[test]
    fn identical_replacement_is_invisible(len in 1usize..20, start in 0usize..20) {
        let start = start % len;
        let ids: Vec<String> = (0..len).map(|i| format!("t{}", i)).collect();
        let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();

        let mut session = session_of(len);
        session.play(Some(start));
        let order_before = common::ids_of(session.playlist());

        session.replace_playlist(test_tracks(&id_refs), false);

        prop_assert_eq!(session.current_index(), Some(start));
        prop_assert!(session.is_playing());
        prop_assert_eq!(common::ids_of(session.playlist()), order_before);
    }
}
