//! Test doubles for the host seams
//!
//! Provides a scriptable [`GameHost`], an [`AudioBackend`] that records every
//! command it receives, and a [`RandomSource`] that replays a fixed sequence.

use std::cell::RefCell;
use std::rc::Rc;

use crate::activity::InventorySnapshot;
use crate::error::{Error, Result};
use crate::host::{AudioBackend, GameHost, TrackHandle};
use crate::random::RandomSource;
use crate::world::Vector3;

/// Game host with directly settable state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MockHost {
    pub position: Option<Vector3>,
    pub map_level: Option<i32>,
    pub activity: Option<i32>,
    pub inventory: Option<InventorySnapshot>,
}

impl MockHost {
    /// Host with no player spawned
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(mut self, position: Vector3) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_map_level(mut self, level: i32) -> Self {
        self.map_level = Some(level);
        self
    }

    pub fn with_activity(mut self, activity: i32) -> Self {
        self.activity = Some(activity);
        self
    }

    pub fn with_inventory(mut self, inventory: InventorySnapshot) -> Self {
        self.inventory = Some(inventory);
        self
    }
}

impl GameHost for MockHost {
    fn player_position(&self) -> Option<Vector3> {
        self.position
    }

    fn map_level(&self) -> Option<i32> {
        self.map_level
    }

    fn activity(&self) -> Option<i32> {
        self.activity
    }

    fn inventory(&self) -> Option<InventorySnapshot> {
        self.inventory.clone()
    }
}

/// Command received by [`MockAudio`]
#[derive(Debug, Clone, PartialEq)]
pub enum AudioCommand {
    Create { url: String, volume: Option<f32> },
    Play { url: String },
    Pause { url: String },
    SetVolume { url: String, volume: f32 },
    SetLooping { url: String, looping: bool },
}

#[derive(Debug, Clone)]
struct TrackState {
    url: String,
    playing: bool,
    finished: bool,
    volume: f32,
    looping: bool,
}

#[derive(Debug, Default)]
struct AudioState {
    commands: Vec<AudioCommand>,
    tracks: Vec<TrackState>,
    fail_next_play: bool,
}

/// Audio backend recording every command.
///
/// Clones share state, so a test keeps one handle for inspection and hands
/// another to the code under test.
#[derive(Debug, Clone, Default)]
pub struct MockAudio {
    state: Rc<RefCell<AudioState>>,
}

impl MockAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every command received so far
    pub fn commands(&self) -> Vec<AudioCommand> {
        self.state.borrow().commands.clone()
    }

    /// Remove and return the recorded commands
    pub fn take_commands(&self) -> Vec<AudioCommand> {
        std::mem::take(&mut self.state.borrow_mut().commands)
    }

    /// URLs of every track created, in order
    pub fn created_urls(&self) -> Vec<String> {
        self.state
            .borrow()
            .tracks
            .iter()
            .map(|track| track.url.clone())
            .collect()
    }

    /// URLs of the tracks currently playing, in creation order
    pub fn playing_urls(&self) -> Vec<String> {
        self.state
            .borrow()
            .tracks
            .iter()
            .filter(|track| track.playing)
            .map(|track| track.url.clone())
            .collect()
    }

    /// Let every playing track of `url` reach its natural end
    pub fn finish(&self, url: &str) {
        for track in self
            .state
            .borrow_mut()
            .tracks
            .iter_mut()
            .filter(|track| track.playing && track.url == url)
        {
            track.playing = false;
            track.finished = true;
        }
    }

    /// Reject the next `play()` call
    pub fn fail_next_play(&self) {
        self.state.borrow_mut().fail_next_play = true;
    }

    fn record(&self, command: AudioCommand) {
        self.state.borrow_mut().commands.push(command);
    }
}

impl AudioBackend for MockAudio {
    fn create_track(&mut self, url: &str, volume: Option<f32>) -> Box<dyn TrackHandle> {
        let mut state = self.state.borrow_mut();
        state.commands.push(AudioCommand::Create {
            url: url.to_string(),
            volume,
        });
        state.tracks.push(TrackState {
            url: url.to_string(),
            playing: false,
            finished: false,
            volume: volume.unwrap_or(1.0),
            looping: false,
        });
        Box::new(MockTrack {
            id: state.tracks.len() - 1,
            url: url.to_string(),
            audio: self.clone(),
        })
    }
}

struct MockTrack {
    id: usize,
    url: String,
    audio: MockAudio,
}

impl MockTrack {
    fn with_state<T>(&self, f: impl FnOnce(&mut TrackState) -> T) -> T {
        f(&mut self.audio.state.borrow_mut().tracks[self.id])
    }
}

impl TrackHandle for MockTrack {
    fn play(&mut self) -> Result<()> {
        self.audio.record(AudioCommand::Play {
            url: self.url.clone(),
        });
        let rejected = std::mem::take(&mut self.audio.state.borrow_mut().fail_next_play);
        if rejected {
            return Err(Error::PlaybackFailed(format!(
                "{} rejected by autoplay policy",
                self.url
            )));
        }
        self.with_state(|track| {
            track.playing = true;
            track.finished = false;
        });
        Ok(())
    }

    fn pause(&mut self) {
        self.audio.record(AudioCommand::Pause {
            url: self.url.clone(),
        });
        self.with_state(|track| track.playing = false);
    }

    fn volume(&self) -> f32 {
        self.with_state(|track| track.volume)
    }

    fn set_volume(&mut self, volume: f32) {
        self.audio.record(AudioCommand::SetVolume {
            url: self.url.clone(),
            volume,
        });
        self.with_state(|track| track.volume = volume);
    }

    fn is_looping(&self) -> bool {
        self.with_state(|track| track.looping)
    }

    fn set_looping(&mut self, looping: bool) {
        self.audio.record(AudioCommand::SetLooping {
            url: self.url.clone(),
            looping,
        });
        self.with_state(|track| track.looping = looping);
    }

    fn source(&self) -> &str {
        &self.url
    }

    fn is_finished(&self) -> bool {
        self.with_state(|track| track.finished)
    }
}

/// Random source replaying a fixed sequence of picks.
///
/// The sequence wraps around; each value is taken modulo the requested length.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<usize>,
    next: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, next: 0 }
    }

    /// Number of picks made so far
    pub fn calls(&self) -> usize {
        self.next
    }
}

impl RandomSource for SequenceRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        let value = if self.values.is_empty() {
            0
        } else {
            self.values[self.next % self.values.len()]
        };
        self.next += 1;
        value % len.max(1)
    }
}
