use crate::error::{Error, Result};
use crate::world::{RegionName, RegionSet};

/// Precedence of a song inside a region. Lower ranks win; `Unranked` is the
/// fallback pool and loses to every rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Rank(u32),
    Unranked,
}

impl Priority {
    pub fn is_ranked(&self) -> bool {
        matches!(self, Self::Rank(_))
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rank(rank) => write!(f, "{}", rank),
            Self::Unranked => write!(f, "inf"),
        }
    }
}

/// Where a song may play, and with what precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegionTag {
    pub name: RegionName,
    pub priority: Priority,
}

impl RegionTag {
    pub const fn ranked(name: RegionName, rank: u32) -> Self {
        Self {
            name,
            priority: Priority::Rank(rank),
        }
    }

    pub const fn unranked(name: RegionName) -> Self {
        Self {
            name,
            priority: Priority::Unranked,
        }
    }
}

/// Song metadata
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    pub name: String,
    pub url: String,
    /// Minimum loop count (inclusive), -1 loops indefinitely
    pub min_loop_count: i32,
    /// Maximum loop count (inclusive), -1 loops indefinitely
    pub max_loop_count: i32,
    pub author: String,
    pub region_tags: Vec<RegionTag>,
}

impl Song {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        author: impl Into<String>,
        region_tags: Vec<RegionTag>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            min_loop_count: 0,
            max_loop_count: 0,
            author: author.into(),
            region_tags,
        }
    }

    /// Tags whose region is in `active`
    pub fn matching_tags<'a>(
        &'a self,
        active: &'a RegionSet,
    ) -> impl Iterator<Item = &'a RegionTag> {
        self.region_tags
            .iter()
            .filter(move |tag| active.contains(&tag.name))
    }

    /// Whether any tag names a region in `active`
    pub fn plays_in(&self, active: &RegionSet) -> bool {
        self.matching_tags(active).next().is_some()
    }

    /// Best priority this song has in `region`, `Unranked` if untagged there
    pub fn priority_in(&self, region: RegionName) -> Priority {
        self.region_tags
            .iter()
            .filter(|tag| tag.name == region)
            .map(|tag| tag.priority)
            .min()
            .unwrap_or(Priority::Unranked)
    }
}

/// Song catalog, sorted alphabetically at load
#[derive(Debug, Clone, Default)]
pub struct SongCatalog {
    songs: Vec<Song>,
}

impl SongCatalog {
    pub fn new(mut songs: Vec<Song>) -> Self {
        songs.sort_by_key(|song| song.name.to_lowercase());
        Self { songs }
    }

    pub fn get(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    /// Catalog index of a song by case-insensitive name
    pub fn find_index(&self, name: &str) -> Result<usize> {
        let wanted = name.to_lowercase();
        self.songs
            .iter()
            .position(|song| song.name.to_lowercase() == wanted)
            .ok_or_else(|| Error::SongNotFound(name.to_string()))
    }

    /// Catalog index of the song loaded from `url`
    pub fn index_of_url(&self, url: &str) -> Option<usize> {
        self.songs.iter().position(|song| song.url == url)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Song> {
        self.songs.iter()
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}
