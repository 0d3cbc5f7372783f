//! Per-tick update of the session
//!
//! The host calls [`SpellSound::update`] on every game tick. Each step is
//! throttled on its own clock and skips quietly while the player is not
//! available.

use std::time::Instant;

use crate::activity::PlayerEvent;
use crate::host::{AudioBackend, GameHost};
use crate::log::Subsystem;
use crate::music::{RegionCheck, Selection};
use crate::random::RandomSource;
use crate::sfx::SfxType;

use super::SpellSound;

/// What one call to [`SpellSound::update`] did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Events derived this tick, empty when the activity poll was skipped
    pub events: Vec<PlayerEvent>,
    /// Effects requested for those events
    pub sfx: Vec<SfxType>,
    /// Song started this tick, if any
    pub selection: Option<Selection>,
    /// Outcome of the region check, if it ran
    pub region_check: Option<RegionCheck>,
}

impl<H, A, R> SpellSound<H, A, R>
where
    H: GameHost,
    A: AudioBackend,
    R: RandomSource,
{
    /// Run one tick: sound effects, then the end-of-track timer, then the
    /// region check.
    pub fn update(&mut self, now: Instant) -> TickReport {
        let mut report = TickReport::default();
        if !self.running {
            return report;
        }

        let position = self.host.player_position();

        if let Some(events) = self.activity.poll(now, &self.host) {
            report.sfx = self
                .sfx
                .dispatch(&events, position, &mut self.audio, &mut self.rng);
            report.events = events;
        }

        if self.music.track_gap_elapsed(now) {
            if position.is_some() {
                report.selection = self.play_next();
            } else {
                self.log
                    .debug(Subsystem::Music, "Track gap elapsed without a player");
                self.needs_initial_track = true;
            }
        }

        if position.is_none() {
            return report;
        }

        if self.needs_initial_track && self.music.autoplay() {
            self.needs_initial_track = false;
            self.log
                .debug(Subsystem::Music, "Player available, starting first song");
            report.selection = self.play_next();
        }

        let (ground, layer) = self.location();
        let (check, selection) =
            self.music
                .check_region(now, &mut self.audio, &mut self.rng, ground, layer);
        report.region_check = Some(check);
        if selection.is_some() {
            report.selection = selection;
        }
        report
    }
}
