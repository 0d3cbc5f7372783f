use super::{SfxCatalog, SfxCategory, SfxSource, SfxType, sfx_for_event};
use crate::activity::PlayerEvent;
use crate::config::SfxOverlap;
use crate::error::Result;
use crate::host::{AudioBackend, TrackHandle};
use crate::log::{LogGate, Subsystem};
use crate::random::RandomSource;
use crate::world::Vector3;

struct ActiveClip {
    sfx_type: SfxType,
    category: SfxCategory,
    source: SfxSource,
    handle: Box<dyn TrackHandle>,
}

/// Plays a random clip for every event that has an effect.
pub struct SfxDispatcher {
    catalog: SfxCatalog,
    overlap: SfxOverlap,
    active: Vec<ActiveClip>,
    log: LogGate,
}

impl SfxDispatcher {
    pub fn new(catalog: SfxCatalog, overlap: SfxOverlap, log: LogGate) -> Self {
        Self {
            catalog,
            overlap,
            active: Vec::new(),
            log,
        }
    }

    pub fn catalog(&self) -> &SfxCatalog {
        &self.catalog
    }

    /// Play the effects for one tick's events.
    ///
    /// Lookup and playback failures are logged and skipped. Returns the
    /// effect types that were requested.
    pub fn dispatch(
        &mut self,
        events: &[PlayerEvent],
        player_position: Option<Vector3>,
        audio: &mut dyn AudioBackend,
        rng: &mut dyn RandomSource,
    ) -> Vec<SfxType> {
        self.prune();

        let mut played = Vec::new();
        for &event in events {
            let Some((sfx_type, category)) = sfx_for_event(event) else {
                continue;
            };
            let source = match category {
                SfxCategory::Ui => SfxSource::Ui,
                _ => SfxSource::Player {
                    position: player_position,
                },
            };

            match self.play(sfx_type, category, source, audio, rng) {
                Ok(()) => played.push(sfx_type),
                Err(e) => self
                    .log
                    .error(Subsystem::Sfx, format!("Skipping {} for {}: {}", sfx_type, event, e)),
            }
        }
        played
    }

    /// Play one random clip of `sfx_type`.
    ///
    /// Fails only when the catalog has no clip of that type; a rejected
    /// `play()` is logged and its handle dropped.
    pub fn play(
        &mut self,
        sfx_type: SfxType,
        category: SfxCategory,
        source: SfxSource,
        audio: &mut dyn AudioBackend,
        rng: &mut dyn RandomSource,
    ) -> Result<()> {
        let clip = self.catalog.pick(sfx_type, rng)?;

        if self.overlap == SfxOverlap::OnePerCategory {
            for active in self.active.iter_mut().filter(|a| a.category == category) {
                active.handle.pause();
            }
            self.active.retain(|a| a.category != category);
        }

        let mut handle = audio.create_track(&clip.url, None);
        if let Err(e) = handle.play() {
            self.log.error(
                Subsystem::Sfx,
                format!("Error playing sound effect {}: {}", clip.url, e),
            );
            return Ok(());
        }
        self.log.debug(
            Subsystem::Sfx,
            format!("Playing {} ({}, {:?}): {}", sfx_type, category, source, clip.url),
        );

        self.active.push(ActiveClip {
            sfx_type,
            category,
            source,
            handle,
        });
        Ok(())
    }

    /// Pause and drop every clip that is still playing
    pub fn stop_all(&mut self) {
        for mut active in self.active.drain(..) {
            active.handle.pause();
        }
    }

    /// Clips started and not yet finished
    pub fn active_count(&self) -> usize {
        self.active
            .iter()
            .filter(|active| !active.handle.is_finished())
            .count()
    }

    /// Effect types of the clips still held
    pub fn active_types(&self) -> Vec<SfxType> {
        self.active.iter().map(|active| active.sfx_type).collect()
    }

    fn prune(&mut self) {
        self.active.retain(|active| !active.handle.is_finished());
    }
}

impl std::fmt::Debug for SfxDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SfxDispatcher")
            .field("clips", &self.catalog.len())
            .field("overlap", &self.overlap)
            .field(
                "active",
                &self
                    .active
                    .iter()
                    .map(|a| (a.sfx_type, a.source, a.handle.source()))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
