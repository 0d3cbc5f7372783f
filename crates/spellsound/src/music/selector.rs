//! Priority-bucketed song selection.

use std::collections::BTreeMap;

use tracing::debug;

use super::{Priority, Song, SongCatalog};
use crate::config::selection::MAX_REPEAT_RETRIES;
use crate::random::RandomSource;
use crate::world::{RegionName, RegionSet};

/// One (song, matching region tag) pair.
///
/// A song valid in two active regions contributes two candidates, one per
/// tag, since priority belongs to the pair and not to the song.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub song_index: usize,
    pub song: &'a Song,
    pub region: RegionName,
    pub priority: Priority,
}

/// Result of a selection run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub song_index: usize,
    /// Region whose tag won the pick
    pub region: RegionName,
    pub priority: Priority,
    /// Number of passes made, 1 when the first pick was accepted
    pub attempts: u32,
}

/// Expand every song playable in `active` into one candidate per matching tag.
pub fn candidates<'a>(catalog: &'a SongCatalog, active: &RegionSet) -> Vec<Candidate<'a>> {
    catalog
        .iter()
        .enumerate()
        .flat_map(|(song_index, song)| {
            song.matching_tags(active).map(move |tag| Candidate {
                song_index,
                song,
                region: tag.name,
                priority: tag.priority,
            })
        })
        .collect()
}

/// Candidates split into numbered buckets and the unranked fallback pool
#[derive(Debug, Default)]
struct Pools<'a> {
    buckets: BTreeMap<u32, Vec<Candidate<'a>>>,
    fallback: Vec<Candidate<'a>>,
}

impl<'a> Pools<'a> {
    fn build(candidates: &[Candidate<'a>], exclude_url: Option<&str>) -> Self {
        let mut pools = Self::default();
        for candidate in candidates {
            if exclude_url.is_some_and(|url| candidate.song.url == url) {
                continue;
            }
            match candidate.priority {
                Priority::Rank(rank) => pools.buckets.entry(rank).or_default().push(*candidate),
                Priority::Unranked => pools.fallback.push(*candidate),
            }
        }
        pools
    }

    /// Lowest non-empty numbered bucket, else the fallback pool
    fn best(&self) -> &[Candidate<'a>] {
        self.buckets
            .values()
            .find(|bucket| !bucket.is_empty())
            .map(Vec::as_slice)
            .unwrap_or(self.fallback.as_slice())
    }
}

/// Chooses the next song for a set of active regions
#[derive(Debug, Clone, Copy, Default)]
pub struct MusicSelector;

impl MusicSelector {
    pub fn new() -> Self {
        Self
    }

    /// Pick a song for `active`.
    ///
    /// `current_source` is the source of the playing track, if any. While more
    /// than one candidate exists it is left out of the pools; a pick that
    /// still lands on it is retried up to [`MAX_REPEAT_RETRIES`] times before
    /// the repeat is accepted. Returns `None` when nothing plays in `active`.
    pub fn select(
        &self,
        catalog: &SongCatalog,
        active: &RegionSet,
        current_source: Option<&str>,
        rng: &mut dyn RandomSource,
    ) -> Option<Selection> {
        let candidates = candidates(catalog, active);
        if candidates.is_empty() {
            debug!("No song plays in regions {:?}", active);
            return None;
        }

        let exclude_url = current_source.filter(|_| candidates.len() > 1);
        let mut pools = Pools::build(&candidates, exclude_url);
        if pools.best().is_empty() {
            // Only the playing song is left, so the repeat is unavoidable
            pools = Pools::build(&candidates, None);
        }
        let pool = pools.best();

        let mut attempts = 0;
        loop {
            attempts += 1;
            let chosen = pool[rng.pick_index(pool.len())];
            debug!(
                "Pass {}: chose \"{}\" for {} (priority {})",
                attempts, chosen.song.name, chosen.region, chosen.priority
            );

            let is_repeat = current_source.is_some_and(|url| chosen.song.url == url);
            if !is_repeat || attempts > MAX_REPEAT_RETRIES {
                return Some(Selection {
                    song_index: chosen.song_index,
                    region: chosen.region,
                    priority: chosen.priority,
                    attempts,
                });
            }
        }
    }
}
