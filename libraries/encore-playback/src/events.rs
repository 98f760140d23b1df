//! Element event bridge
//!
//! The playback element reports its asynchronous lifecycle (time progress,
//! metadata, completion) through a channel created exactly once when the
//! element is mounted. Every event is stamped with the load generation
//! current at emission time; the session bumps the generation whenever it
//! loads a new resource, so callbacks that raced a load can be recognized
//! and dropped instead of acting on a session state that has moved on.

use crossbeam_channel::{unbounded, Receiver, Sender};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Lifecycle events emitted by the playback element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ElementEvent {
    /// Periodic position report (high frequency while playing)
    TimeUpdate {
        /// Current position in seconds
        position_secs: f64,
        /// Total duration in seconds (may be NaN before metadata)
        duration_secs: f64,
    },

    /// Resource metadata became available (once per load)
    MetadataLoaded {
        /// Total duration in seconds
        duration_secs: f64,
    },

    /// The loaded resource played to completion
    Ended,
}

/// An element event stamped with its load generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StampedEvent {
    /// Load generation current when the event was emitted
    pub generation: u64,

    /// The event itself
    pub event: ElementEvent,
}

/// Emitter half of the bridge, held by the element implementation
pub struct EventEmitter {
    generation: Arc<AtomicU64>,
    tx: Sender<StampedEvent>,
}

impl EventEmitter {
    /// Emit an event stamped with the current load generation
    ///
    /// A send failure means the session side is gone; the event is dropped.
    pub fn emit(&self, event: ElementEvent) {
        let stamped = StampedEvent {
            generation: self.generation.load(Ordering::SeqCst),
            event,
        };
        let _ = self.tx.send(stamped);
    }
}

/// Feed half of the bridge, owned by the session
pub struct EventFeed {
    generation: Arc<AtomicU64>,
    rx: Receiver<StampedEvent>,
}

impl EventFeed {
    /// Take the next pending event, if any
    pub(crate) fn try_next(&self) -> Option<StampedEvent> {
        self.rx.try_recv().ok()
    }

    /// The generation of the most recent load
    pub(crate) fn current_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Invalidate events from earlier loads
    ///
    /// Called by the session right before it loads a new resource.
    pub(crate) fn advance_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// Create the bridge pair
///
/// One pair per mounted element: the emitter goes into the element
/// implementation, the feed into the session. Constructing the pair once is
/// what guarantees exactly-once subscription.
pub fn event_bridge() -> (EventEmitter, EventFeed) {
    let (tx, rx) = unbounded();
    let generation = Arc::new(AtomicU64::new(0));

    (
        EventEmitter {
            generation: generation.clone(),
            tx,
        },
        EventFeed { generation, rx },
    )
}
