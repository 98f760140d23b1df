//! Volume state with an independent mute axis
//!
//! The element applies the actual gain; this type only tracks what the
//! session believes. Mute and level are separate axes on the read side,
//! coupled on the write side: setting the level to zero mutes, setting it
//! to anything else unmutes, and toggling mute never touches the stored
//! level.

/// Volume state for the session
#[derive(Debug, Clone)]
pub struct Volume {
    /// Stored level (0.0-1.0)
    level: f32,

    /// Mute state (preserves the stored level)
    muted: bool,
}

impl Volume {
    /// Create volume state at the given level
    pub fn new(level: f32) -> Self {
        let level = level.clamp(0.0, 1.0);
        Self {
            level,
            muted: level == 0.0,
        }
    }

    /// Set the level (clamped to 0.0-1.0), coupling the mute flag
    ///
    /// Returns the clamped level.
    pub fn set_level(&mut self, level: f32) -> f32 {
        self.level = level.clamp(0.0, 1.0);
        self.muted = self.level == 0.0;
        self.level
    }

    /// Get the stored level
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Flip the mute flag without touching the stored level
    ///
    /// Returns the new mute state.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(0.8)
    }
}
