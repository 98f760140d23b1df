//! Shuffle permutation for the active sequence

use encore_core::Track;
use rand::seq::SliceRandom;
use rand::thread_rng;

/// Produce a fresh random permutation of the given tracks
///
/// Fisher-Yates via `SliceRandom`; the input order is never mutated.
pub fn shuffled(tracks: &[Track]) -> Vec<Track> {
    let mut permuted = tracks.to_vec();
    permuted.shuffle(&mut thread_rng());
    permuted
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn test_tracks(count: usize) -> Vec<Track> {
        (0..count)
            .map(|i| {
                Track::new(
                    i.to_string(),
                    format!("Track {}", i),
                    "Test Artist",
                    format!("/audio/{}.mp3", i),
                )
            })
            .collect()
    }

    #[test]
    fn shuffle_preserves_all_tracks() {
        let tracks = test_tracks(10);
        let permuted = shuffled(&tracks);

        assert_eq!(permuted.len(), tracks.len());

        let original_ids: HashSet<&str> = tracks.iter().map(|t| t.id.as_str()).collect();
        let permuted_ids: HashSet<&str> = permuted.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(original_ids, permuted_ids);
    }

    #[test]
    fn shuffle_leaves_input_untouched() {
        let tracks = test_tracks(5);
        let before: Vec<&str> = tracks.iter().map(|t| t.id.as_str()).collect();

        let _ = shuffled(&tracks);

        let after: Vec<&str> = tracks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn shuffle_empty_and_single() {
        assert!(shuffled(&[]).is_empty());

        let one = test_tracks(1);
        let permuted = shuffled(&one);
        assert_eq!(permuted.len(), 1);
        assert_eq!(permuted[0].id.as_str(), "0");
    }

    #[test]
    fn shuffle_changes_order_eventually() {
        let tracks = test_tracks(8);
        let original: Vec<&str> = tracks.iter().map(|t| t.id.as_str()).collect();

        // 20 permutations of 8 elements all matching the original order is
        // beyond unlucky (p = (1/8!)^20)
        let moved = (0..20).any(|_| {
            let permuted = shuffled(&tracks);
            let ids: Vec<&str> = permuted.iter().map(|t| t.id.as_str()).collect();
            ids != original
        });
        assert!(moved);
    }
}
