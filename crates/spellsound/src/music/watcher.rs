//! Tick-driven region change detection.

use std::time::Instant;

use super::{Priority, Song, SongCatalog};
use crate::config::timing::REGION_POLL_INTERVAL;
use crate::world::{RegionIndex, RegionLayer, RegionSet, Vector2};

/// Outcome of a region check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionCheck {
    /// Autoplay is off, nothing checked
    AutoplayOff,
    /// Less than the poll interval since the previous check
    Throttled,
    /// First position seen; only recorded
    FirstObservation,
    /// Same position and layer as last time
    Unmoved,
    /// Moved, but the active region names did not change
    SameRegions,
    /// Regions changed and the current song still fits them
    KeepPlaying,
    /// A new song should be selected
    Reselect,
}

/// Whether `song` has a tag for any region in `active`.
pub fn is_song_still_valid(song: &Song, active: &RegionSet) -> bool {
    song.plays_in(active)
}

/// Whether any song in `catalog` has a tag in `active` that beats the
/// current song's own priority for that same region.
///
/// A region the current song has no tag for counts as unranked for it.
pub fn has_higher_priority_candidate(
    catalog: &SongCatalog,
    current: &Song,
    active: &RegionSet,
) -> bool {
    active.iter().any(|&region| {
        let to_beat = current.priority_in(region);
        catalog
            .iter()
            .flat_map(|song| song.region_tags.iter())
            .any(|tag| tag.name == region && tag.priority < to_beat)
    })
}

/// Watches the player position for region changes
#[derive(Debug, Clone, Default)]
pub struct RegionWatcher {
    last_check: Option<Instant>,
    last_observed: Option<(Vector2, RegionLayer)>,
}

impl RegionWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-evaluate regions for a new position.
    ///
    /// `current` is the playing song with the region names recorded when it
    /// started. The position is always recorded unless throttled.
    pub fn check(
        &mut self,
        now: Instant,
        position: Vector2,
        layer: RegionLayer,
        index: &RegionIndex,
        catalog: &SongCatalog,
        current: Option<(&Song, &RegionSet)>,
    ) -> RegionCheck {
        if let Some(last) = self.last_check
            && now.duration_since(last) < REGION_POLL_INTERVAL
        {
            return RegionCheck::Throttled;
        }
        self.last_check = Some(now);

        let observed = (position, layer);
        let Some(previous) = self.last_observed.replace(observed) else {
            return RegionCheck::FirstObservation;
        };
        if previous == observed {
            return RegionCheck::Unmoved;
        }

        let active = index.names_containing(position, layer);
        let Some((song, song_regions)) = current else {
            return RegionCheck::Reselect;
        };
        if &active == song_regions {
            return RegionCheck::SameRegions;
        }

        if !is_song_still_valid(song, &active)
            || has_higher_priority_candidate(catalog, song, &active)
        {
            RegionCheck::Reselect
        } else {
            RegionCheck::KeepPlaying
        }
    }

    pub fn last_observed(&self) -> Option<(Vector2, RegionLayer)> {
        self.last_observed
    }
}

/// Best priority `song` has among `active`
pub fn best_priority(song: &Song, active: &RegionSet) -> Priority {
    song.matching_tags(active)
        .map(|tag| tag.priority)
        .min()
        .unwrap_or(Priority::Unranked)
}
