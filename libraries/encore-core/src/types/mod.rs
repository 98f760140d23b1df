//! Domain types for the Encore catalog

mod track;
mod upcoming;

pub use track::{Track, TrackId};
pub use upcoming::UpcomingRelease;
