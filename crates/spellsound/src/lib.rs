//! # spellsound
//!
//! Region-based music and activity sound effects for a game client.
//!
//! This crate provides:
//! - A static region table and song catalog (`world`, `music`)
//! - Priority-bucketed song selection with anti-repeat
//! - Activity inference from polled player state and inventory (`activity`)
//! - Sound effect dispatch for inferred events (`sfx`)
//! - The [`SpellSound`] session driven by a per-tick `update`
//!
//! The game client and audio output are reached only through the traits in
//! [`host`]; [`mock`] provides test doubles for both.

pub mod activity;
pub mod config;
pub mod error;
pub mod host;
pub mod log;
pub mod music;
pub mod random;
pub mod session;
pub mod sfx;
pub mod trace;
pub mod world;

pub use host::mock;

// Re-export from activity module
pub use activity::{
    ActivityDeriver, ActivityMonitor, DerivedEvent, InventoryChange, InventorySnapshot,
    InventoryTracker, ItemSlot, PlayerEvent, RawActivity,
};

// Re-export from config module
pub use config::{Settings, SfxOverlap};

// Re-export from error module
pub use error::{Error, Result};

// Re-export from host module
pub use host::{AudioBackend, GameHost, TrackHandle};

// Re-export from log module
pub use log::{LogGate, LogLevel, Subsystem};

// Re-export from music module
pub use music::{
    MusicPlayer, MusicSelector, NowPlaying, PlaybackSession, Priority, RegionCheck, RegionTag,
    RegionWatcher, Selection, Song, SongCatalog,
};

// Re-export from random module
pub use random::{RandomSource, SeededRandom, ThreadRandom};

// Re-export from session module
pub use session::{SpellSound, TickReport};

// Re-export from sfx module
pub use sfx::{SfxCatalog, SfxCategory, SfxClip, SfxDispatcher, SfxSource, SfxType};

// Re-export from trace module
pub use trace::{Trace, TraceAction, TraceFrame};

// Re-export from world module
pub use world::{Region, RegionIndex, RegionLayer, RegionName, RegionSet, Vector2, Vector3};
