//! Encore Player Core
//!
//! Core types, traits, and error handling shared across the Encore Player
//! libraries.
//!
//! This crate defines:
//! - **Domain Types**: `Track`, `UpcomingRelease`, the catalog records the
//!   label site publishes
//! - **Core Traits**: `Catalog`, the data collaborator the player consumes
//! - **Error Handling**: Unified `EncoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use encore_core::types::{Track, TrackId};
//!
//! let track = Track::new("1", "Waalian", "Harpinder Singh", "/audio/Waalian.mp3");
//!
//! assert_eq!(track.id, TrackId::from("1"));
//! assert!(track.published);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{EncoreError, Result};
pub use traits::Catalog;
pub use types::{Track, TrackId, UpcomingRelease};
