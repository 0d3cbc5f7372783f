//! Host abstractions for testability.
//!
//! The plugin never touches the game client directly. Game state is read
//! through [`GameHost`] and audio goes through [`AudioBackend`], so both can
//! be replaced with the doubles in [`crate::mock`].

pub mod mock;

use crate::activity::InventorySnapshot;
use crate::error::Result;
use crate::world::Vector3;

/// Read-only view of the host game state, polled once per tick.
///
/// Every accessor returns `None` while the state is unavailable (not yet
/// spawned, loading screen); callers must treat that as "skip this tick".
pub trait GameHost {
    /// Current world position of the main player.
    fn player_position(&self) -> Option<Vector3>;

    /// Raw map level of the main player (0 = underworld, 1 = overworld, 2 = sky).
    fn map_level(&self) -> Option<i32>;

    /// Raw action state number of the main player.
    fn activity(&self) -> Option<i32>;

    /// Current inventory contents.
    fn inventory(&self) -> Option<InventorySnapshot>;
}

/// A single playable track created by an [`AudioBackend`].
pub trait TrackHandle {
    /// Start playback. Failures (e.g. autoplay policy) are reported, not retried.
    fn play(&mut self) -> Result<()>;

    fn pause(&mut self);

    fn volume(&self) -> f32;

    fn set_volume(&mut self, volume: f32);

    fn is_looping(&self) -> bool;

    fn set_looping(&mut self, looping: bool);

    /// Identity of the loaded source, used for repeat detection.
    fn source(&self) -> &str;

    /// Whether the track reached its end without being paused.
    fn is_finished(&self) -> bool;
}

/// Factory for playable tracks.
pub trait AudioBackend {
    /// Create a track for `url`. `volume` is the initial volume, if any.
    fn create_track(&mut self, url: &str, volume: Option<f32>) -> Box<dyn TrackHandle>;
}
