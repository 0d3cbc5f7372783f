//! The single music playback slot.

use std::time::Instant;

use crate::config::clamp_volume;
use crate::config::timing::TRACK_GAP;
use crate::host::{AudioBackend, TrackHandle};
use crate::log::{LogGate, Subsystem};
use crate::music::Song;

/// Owns the one music track that may be playing.
///
/// Repeat and volume belong to the session and are copied onto every new
/// track. When a track ends naturally the next pick is scheduled
/// [`TRACK_GAP`] later; [`PlaybackSession::poll`] reports when it is due.
pub struct PlaybackSession {
    track: Option<Box<dyn TrackHandle>>,
    song_index: Option<usize>,
    repeat: bool,
    volume: f32,
    /// Set once the current track's natural end has been seen
    end_seen: bool,
    next_due: Option<Instant>,
    log: LogGate,
}

impl PlaybackSession {
    pub fn new(repeat: bool, volume: f32, log: LogGate) -> Self {
        Self {
            track: None,
            song_index: None,
            repeat,
            volume: clamp_volume(volume),
            end_seen: false,
            next_due: None,
            log,
        }
    }

    /// Stop the current track and start `song`.
    ///
    /// A failing `play()` is logged; the silent handle stays in the slot.
    /// Returns whether the track actually started.
    pub fn start(&mut self, audio: &mut dyn AudioBackend, song_index: usize, song: &Song) -> bool {
        self.stop();

        let mut track = audio.create_track(&song.url, Some(self.volume));
        track.set_looping(self.repeat);
        track.set_volume(self.volume);
        let started = match track.play() {
            Ok(()) => {
                self.log.important(
                    Subsystem::Music,
                    format!("Now playing \"{}\" by {}", song.name, song.author),
                );
                true
            }
            Err(e) => {
                self.log.error(
                    Subsystem::Music,
                    format!("Failed to play \"{}\": {}", song.name, e),
                );
                false
            }
        };

        self.track = Some(track);
        self.song_index = Some(song_index);
        started
    }

    /// Pause and release the current track, cancelling a scheduled pick.
    pub fn stop(&mut self) {
        if let Some(mut track) = self.track.take() {
            track.pause();
        }
        self.song_index = None;
        self.end_seen = false;
        self.next_due = None;
    }

    /// Advance the end-of-track timer.
    ///
    /// Returns true exactly once, when the gap after a natural end elapsed.
    /// Whether to pick a new song is up to the caller at that moment.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.end_seen
            && let Some(track) = &self.track
            && track.is_finished()
        {
            self.end_seen = true;
            self.next_due = Some(now + TRACK_GAP);
            self.log
                .debug(Subsystem::Music, "Track ended, next song scheduled");
        }

        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = None;
                true
            }
            _ => false,
        }
    }

    /// Source of the loaded track, if any
    pub fn current_source(&self) -> Option<&str> {
        self.track.as_deref().map(|track| track.source())
    }

    /// Catalog index of the loaded song
    pub fn current_index(&self) -> Option<usize> {
        self.song_index
    }

    pub fn has_track(&self) -> bool {
        self.track.is_some()
    }

    /// When the scheduled pick becomes due, if one is pending
    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    pub fn repeat(&self) -> bool {
        self.repeat
    }

    pub fn set_repeat(&mut self, repeat: bool) {
        self.repeat = repeat;
        if let Some(track) = self.track.as_mut() {
            track.set_looping(repeat);
        }
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = clamp_volume(volume);
        if let Some(track) = self.track.as_mut() {
            track.set_volume(self.volume);
        }
    }
}

impl std::fmt::Debug for PlaybackSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackSession")
            .field("source", &self.current_source())
            .field("song_index", &self.song_index)
            .field("repeat", &self.repeat)
            .field("volume", &self.volume)
            .field("next_due", &self.next_due)
            .finish()
    }
}
