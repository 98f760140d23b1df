//! Encore Player - Catalog
//!
//! In-memory implementation of the [`Catalog`](encore_core::Catalog) trait.
//!
//! The public site reads the catalog through a handful of views (published,
//! featured, upcoming) and the admin area mutates it. Durable persistence
//! lives behind whatever document store hosts the deployment; this crate
//! provides the collaborator shape the player and the pages consume, seeded
//! from records.
//!
//! # Example
//!
//! ```rust
//! use encore_catalog::MemoryCatalog;
//! use encore_core::{Catalog, Track};
//!
//! # tokio_test::block_on(async {
//! let catalog = MemoryCatalog::with_tracks(vec![
//!     Track::new("1", "Waalian", "Harpinder Singh", "/audio/Waalian.mp3"),
//! ]);
//!
//! let tracks = catalog.published_tracks().await.unwrap();
//! assert_eq!(tracks.len(), 1);
//! # });
//! ```

#![forbid(unsafe_code)]

mod memory;

pub use memory::MemoryCatalog;
