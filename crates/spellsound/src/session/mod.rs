//! Plugin session
//!
//! [`SpellSound`] owns all runtime state: the music player, the activity
//! monitor and the sfx dispatcher, along with the host seams they read from
//! and play through. Nothing outlives the session.

mod tick;

pub use tick::TickReport;

use crate::activity::ActivityMonitor;
use crate::config::Settings;
use crate::config::selection::TITLE_SONG;
use crate::error::Result;
use crate::host::{AudioBackend, GameHost};
use crate::log::{LogGate, Subsystem};
use crate::music::{MusicPlayer, NowPlaying, Selection, SongCatalog};
use crate::random::RandomSource;
use crate::sfx::{SfxCatalog, SfxDispatcher};
use crate::world::{RegionIndex, RegionLayer, RegionName, Vector2};

/// Region-based music and activity sound effects for one game client
pub struct SpellSound<H, A, R> {
    settings: Settings,
    host: H,
    audio: A,
    rng: R,
    music: MusicPlayer,
    sfx: SfxDispatcher,
    activity: ActivityMonitor,
    log: LogGate,
    running: bool,
    /// Autoplay wanted a song before the player had a position
    needs_initial_track: bool,
}

impl<H, A, R> SpellSound<H, A, R>
where
    H: GameHost,
    A: AudioBackend,
    R: RandomSource,
{
    /// Session over the built-in regions, songs and clips
    pub fn new(settings: Settings, host: H, audio: A, rng: R) -> Result<Self> {
        Self::with_catalogs(
            settings,
            host,
            audio,
            rng,
            RegionIndex::builtin(),
            SongCatalog::builtin(),
            SfxCatalog::builtin(),
        )
    }

    /// Session over custom catalogs.
    ///
    /// Fails if `clips` lacks a clip for any effect type.
    pub fn with_catalogs(
        settings: Settings,
        host: H,
        audio: A,
        rng: R,
        regions: RegionIndex,
        songs: SongCatalog,
        clips: SfxCatalog,
    ) -> Result<Self> {
        clips.validate()?;
        let log = LogGate::from_settings(&settings);
        log.debug(
            Subsystem::Music,
            format!("Loaded {} regions and {} songs", regions.len(), songs.len()),
        );
        log.debug(Subsystem::Sfx, format!("Loaded {} clips", clips.len()));

        Ok(Self {
            music: MusicPlayer::new(regions, songs, &settings),
            sfx: SfxDispatcher::new(clips, settings.sfx_overlap, log),
            activity: ActivityMonitor::new(),
            settings,
            host,
            audio,
            rng,
            log,
            running: false,
            needs_initial_track: false,
        })
    }

    /// Begin the session. Starts a song right away when autoplay is on.
    pub fn start(&mut self) {
        if !self.settings.enable {
            self.log
                .important(Subsystem::Music, "Plugin disabled in settings, not starting");
            return;
        }
        self.running = true;
        self.log.important(Subsystem::Music, "Session started");

        if self.music.autoplay() {
            if self.host.player_position().is_some() {
                self.play_next();
            } else {
                self.log.debug(
                    Subsystem::Music,
                    "No player position yet, first song deferred",
                );
                self.needs_initial_track = true;
            }
        }
    }

    /// Halt all audio and drop pending work. A stopped session is silent.
    pub fn stop(&mut self) {
        self.music.stop();
        self.sfx.stop_all();
        self.activity.reset();
        self.running = false;
        self.needs_initial_track = false;
        self.log.important(Subsystem::Music, "Session stopped");
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Current layer and ground position, the origin when there is none
    fn location(&self) -> (Vector2, RegionLayer) {
        let layer = RegionLayer::from_map_level(self.host.map_level());
        let position = self
            .host
            .player_position()
            .map(|p| p.ground())
            .unwrap_or_default();
        (position, layer)
    }

    /// Select and start a song for the player's current location
    pub fn play_next(&mut self) -> Option<Selection> {
        let (position, layer) = self.location();
        self.music
            .play_next(&mut self.audio, &mut self.rng, position, layer)
    }

    /// Select and start a song as if the player stood in `name` on `layer`
    pub fn play_by_region(&mut self, name: RegionName, layer: RegionLayer) -> Option<Selection> {
        self.music
            .play_by_region(&mut self.audio, &mut self.rng, name, layer)
    }

    /// Play a song by case-insensitive name
    pub fn play_song_by_name(&mut self, name: &str) -> Result<()> {
        self.music.play_name(&mut self.audio, name).inspect_err(|e| {
            self.log.error(Subsystem::Music, e);
        })
    }

    /// Play the song at a catalog index
    pub fn play_song_by_index(&mut self, index: usize) -> Result<()> {
        self.music.play_index(&mut self.audio, index).inspect_err(|e| {
            self.log.error(Subsystem::Music, e);
        })
    }

    pub fn stop_music(&mut self) {
        self.music.stop();
    }

    pub fn autoplay(&self) -> bool {
        self.music.autoplay()
    }

    /// Toggle autoplay. Turning it on selects a song immediately.
    pub fn set_autoplay(&mut self, autoplay: bool) {
        self.music.set_autoplay(autoplay);
        self.log.debug(Subsystem::Music, format!("Autoplay: {}", autoplay));
        if autoplay && self.running {
            self.play_next();
        }
    }

    pub fn set_repeat(&mut self, repeat: bool) {
        self.music.set_repeat(repeat);
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.music.set_volume(volume);
    }

    /// Back on the title screen: autoplay off, title theme on.
    ///
    /// A stopped session only records the autoplay change.
    pub fn on_logged_out(&mut self) {
        self.music.set_autoplay(false);
        self.needs_initial_track = false;
        if !self.running {
            return;
        }
        if let Err(e) = self.music.play_name(&mut self.audio, TITLE_SONG) {
            self.log.error(Subsystem::Music, e);
        }
    }

    /// Entered the world: autoplay back on, song for the current location.
    ///
    /// A stopped session only records the autoplay change; `start` picks the
    /// song later.
    pub fn on_logged_in(&mut self) {
        self.music.set_autoplay(true);
        if !self.running {
            return;
        }
        if self.host.player_position().is_some() {
            self.play_next();
        } else {
            self.needs_initial_track = true;
        }
    }

    pub fn now_playing(&self) -> Option<NowPlaying> {
        self.music.now_playing()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn music(&self) -> &MusicPlayer {
        &self.music
    }

    pub fn sfx(&self) -> &SfxDispatcher {
        &self.sfx
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }
}

impl<H, A, R> std::fmt::Debug for SpellSound<H, A, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpellSound")
            .field("settings", &self.settings)
            .field("music", &self.music)
            .field("sfx", &self.sfx)
            .field("running", &self.running)
            .finish()
    }
}
