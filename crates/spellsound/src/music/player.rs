//! Music side of the plugin session.

use std::time::Instant;

use super::{
    MusicSelector, PlaybackSession, RegionCheck, RegionWatcher, Selection, Song, SongCatalog,
    best_priority,
};
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::host::AudioBackend;
use crate::log::{LogGate, Subsystem};
use crate::random::RandomSource;
use crate::world::{RegionIndex, RegionLayer, RegionName, RegionSet, Vector2};

/// Name and author of the playing song
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    pub name: String,
    pub author: String,
}

impl std::fmt::Display for NowPlaying {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} by {}", self.name, self.author)
    }
}

/// Region-driven music player.
///
/// Ties the region index and song catalog to the playback slot. Keeps the
/// region names that were active when the current song was selected, which
/// region checks compare against.
#[derive(Debug)]
pub struct MusicPlayer {
    regions: RegionIndex,
    catalog: SongCatalog,
    selector: MusicSelector,
    playback: PlaybackSession,
    watcher: RegionWatcher,
    song_regions: RegionSet,
    autoplay: bool,
    log: LogGate,
}

impl MusicPlayer {
    pub fn new(regions: RegionIndex, catalog: SongCatalog, settings: &Settings) -> Self {
        let log = LogGate::from_settings(settings);
        Self {
            regions,
            catalog,
            selector: MusicSelector::new(),
            playback: PlaybackSession::new(settings.repeat, settings.volume, log),
            watcher: RegionWatcher::new(),
            song_regions: RegionSet::new(),
            autoplay: settings.autoplay,
            log,
        }
    }

    /// Player over the built-in region table and song list
    pub fn builtin(settings: &Settings) -> Self {
        Self::new(RegionIndex::builtin(), SongCatalog::builtin(), settings)
    }

    pub fn regions(&self) -> &RegionIndex {
        &self.regions
    }

    pub fn catalog(&self) -> &SongCatalog {
        &self.catalog
    }

    /// Select and start a song for an explicit set of active regions.
    ///
    /// Returns the selection, or `None` (music unchanged) if nothing plays
    /// in `active`.
    pub fn play_for_regions(
        &mut self,
        audio: &mut dyn AudioBackend,
        rng: &mut dyn RandomSource,
        active: RegionSet,
    ) -> Option<Selection> {
        let Some(selection) =
            self.selector
                .select(&self.catalog, &active, self.playback.current_source(), rng)
        else {
            self.log.warning(
                Subsystem::Music,
                format!("No song found for regions {:?}, music unchanged", active),
            );
            return None;
        };

        let song = self.catalog.get(selection.song_index)?;
        self.log.debug(
            Subsystem::Music,
            format!(
                "Selected \"{}\" for {} (priority {}, {} pass(es))",
                song.name, selection.region, selection.priority, selection.attempts
            ),
        );
        self.playback.start(audio, selection.song_index, song);
        self.song_regions = active;
        Some(selection)
    }

    /// Select and start a song for a position on a layer
    pub fn play_next(
        &mut self,
        audio: &mut dyn AudioBackend,
        rng: &mut dyn RandomSource,
        position: Vector2,
        layer: RegionLayer,
    ) -> Option<Selection> {
        let active = self.regions.names_containing(position, layer);
        self.log.debug(
            Subsystem::Music,
            format!("Regions at {} on {}: {:?}", position, layer, active),
        );
        self.play_for_regions(audio, rng, active)
    }

    /// Select and start a song as if the player stood in region `name` on `layer`
    pub fn play_by_region(
        &mut self,
        audio: &mut dyn AudioBackend,
        rng: &mut dyn RandomSource,
        name: RegionName,
        layer: RegionLayer,
    ) -> Option<Selection> {
        let active: RegionSet = self
            .regions
            .regions_named(name, layer)
            .into_iter()
            .map(|region| region.name)
            .collect();
        self.play_for_regions(audio, rng, active)
    }

    /// Start the song at catalog `index`
    pub fn play_index(&mut self, audio: &mut dyn AudioBackend, index: usize) -> Result<()> {
        let song = self
            .catalog
            .get(index)
            .ok_or(Error::SongIndexOutOfRange(index))?;
        self.playback.start(audio, index, song);
        Ok(())
    }

    /// Start a song by case-insensitive name
    pub fn play_name(&mut self, audio: &mut dyn AudioBackend, name: &str) -> Result<()> {
        let index = self.catalog.find_index(name)?;
        self.play_index(audio, index)
    }

    /// Stop the music and cancel any scheduled pick
    pub fn stop(&mut self) {
        self.playback.stop();
    }

    /// Run the end-of-track timer. True once the gap after a natural end
    /// elapsed while autoplay is on; the caller then picks the next song.
    pub fn track_gap_elapsed(&mut self, now: Instant) -> bool {
        if !self.playback.poll(now) {
            return false;
        }
        if !self.autoplay {
            self.log
                .debug(Subsystem::Music, "Track gap elapsed with autoplay off");
            return false;
        }
        true
    }

    /// Throttled region re-evaluation for the latest position.
    ///
    /// Does nothing while autoplay is off. Returns the check outcome and the
    /// new selection when the check asked for one.
    pub fn check_region(
        &mut self,
        now: Instant,
        audio: &mut dyn AudioBackend,
        rng: &mut dyn RandomSource,
        position: Vector2,
        layer: RegionLayer,
    ) -> (RegionCheck, Option<Selection>) {
        if !self.autoplay {
            return (RegionCheck::AutoplayOff, None);
        }

        let current = self
            .playback
            .current_index()
            .and_then(|index| self.catalog.get(index));
        let check = self.watcher.check(
            now,
            position,
            layer,
            &self.regions,
            &self.catalog,
            current.map(|song| (song, &self.song_regions)),
        );

        if check != RegionCheck::Reselect {
            return (check, None);
        }
        if let Some(song) = current {
            self.log.important(
                Subsystem::Music,
                format!(
                    "Region change at {} on {}, \"{}\" (priority {}) replaced",
                    position,
                    layer,
                    song.name,
                    best_priority(song, &self.song_regions)
                ),
            );
        }
        (check, self.play_next(audio, rng, position, layer))
    }

    /// Song loaded in the playback slot
    pub fn current_song(&self) -> Option<&Song> {
        self.playback
            .current_index()
            .and_then(|index| self.catalog.get(index))
    }

    pub fn now_playing(&self) -> Option<NowPlaying> {
        self.current_song().map(|song| NowPlaying {
            name: song.name.clone(),
            author: song.author.clone(),
        })
    }

    /// Region names recorded when the current song was selected
    pub fn song_regions(&self) -> &RegionSet {
        &self.song_regions
    }

    pub fn is_playing(&self) -> bool {
        self.playback.has_track()
    }

    pub fn autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn set_autoplay(&mut self, autoplay: bool) {
        self.autoplay = autoplay;
    }

    pub fn repeat(&self) -> bool {
        self.playback.repeat()
    }

    pub fn set_repeat(&mut self, repeat: bool) {
        self.playback.set_repeat(repeat);
    }

    pub fn volume(&self) -> f32 {
        self.playback.volume()
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.playback.set_volume(volume);
    }

    /// When the next pick after a natural track end is due
    pub fn next_pick_due(&self) -> Option<Instant> {
        self.playback.next_due()
    }
}
