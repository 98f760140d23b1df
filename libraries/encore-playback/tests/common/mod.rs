//! Shared fixtures for playback session tests

use encore_core::Track;
use encore_playback::{PlaybackElement, PlayerError, Result};
use std::sync::{Arc, Mutex};

/// Commands observed by the recording element
#[derive(Debug, Clone, PartialEq)]
pub enum ElementCommand {
    Load(String),
    Play,
    Pause,
    Seek(f64),
    SetVolume(f32),
    SetMuted(bool),
}

/// Element double that records every command it receives
pub struct RecordingElement {
    commands: Arc<Mutex<Vec<ElementCommand>>>,
    fail_play: bool,
}

impl RecordingElement {
    pub fn new() -> (Self, Arc<Mutex<Vec<ElementCommand>>>) {
        let commands = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                commands: commands.clone(),
                fail_play: false,
            },
            commands,
        )
    }

    /// Element whose `play` always rejects, like an autoplay-blocked audio
    /// element
    pub fn failing_play() -> (Self, Arc<Mutex<Vec<ElementCommand>>>) {
        let commands = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                commands: commands.clone(),
                fail_play: true,
            },
            commands,
        )
    }

    fn record(&self, command: ElementCommand) {
        self.commands.lock().unwrap().push(command);
    }
}

impl PlaybackElement for RecordingElement {
    fn load(&mut self, url: &str) -> Result<()> {
        self.record(ElementCommand::Load(url.to_string()));
        Ok(())
    }

    fn play(&mut self) -> Result<()> {
        self.record(ElementCommand::Play);
        if self.fail_play {
            Err(PlayerError::element("playback request was rejected"))
        } else {
            Ok(())
        }
    }

    fn pause(&mut self) -> Result<()> {
        self.record(ElementCommand::Pause);
        Ok(())
    }

    fn seek(&mut self, position_secs: f64) -> Result<()> {
        self.record(ElementCommand::Seek(position_secs));
        Ok(())
    }

    fn set_volume(&mut self, level: f32) -> Result<()> {
        self.record(ElementCommand::SetVolume(level));
        Ok(())
    }

    fn set_muted(&mut self, muted: bool) -> Result<()> {
        self.record(ElementCommand::SetMuted(muted));
        Ok(())
    }
}

/// Build a list of minimal published tracks with the given ids
pub fn test_tracks(ids: &[&str]) -> Vec<Track> {
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

/// Ids of the given tracks, in order
pub fn ids_of(tracks: &[Track]) -> Vec<String> {
    tracks.iter().map(|t| t.id.to_string()).collect()
}
