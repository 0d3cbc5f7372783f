//! Configuration and tuning constants.
//!
//! This module contains:
//! - `Settings` - user-facing plugin settings (TOML)
//! - Polling, selection and inventory constants

mod settings;

pub use settings::*;

/// Tick throttling and playback gap configuration.
pub mod timing {
    use std::time::Duration;

    /// Minimum time between two activity polls.
    pub const ACTIVITY_POLL_INTERVAL: Duration = Duration::from_millis(1500);

    /// Minimum time between two region-change checks.
    pub const REGION_POLL_INTERVAL: Duration = Duration::from_millis(5000);

    /// Quiet gap between a track ending naturally and the next autoplay pick.
    pub const TRACK_GAP: Duration = Duration::from_millis(5000);
}

/// Music selection configuration.
pub mod selection {
    /// Number of extra selection passes made when the pick equals the playing track.
    pub const MAX_REPEAT_RETRIES: u32 = 5;

    /// Song played on the title screen after logging out.
    pub const TITLE_SONG: &str = "Sound Main";
}

/// Inventory layout of the host game.
pub mod inventory {
    /// Number of slots in the player inventory.
    pub const CAPACITY: usize = 28;

    /// Item id of burnt food, produced by a failed cook.
    pub const BURNT_FOOD_ID: i32 = 325;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_constants() {
        assert_eq!(timing::ACTIVITY_POLL_INTERVAL.as_millis(), 1500);
        assert_eq!(timing::REGION_POLL_INTERVAL.as_secs(), 5);
        assert_eq!(timing::TRACK_GAP.as_secs(), 5);
    }

    #[test]
    fn test_selection_constants() {
        assert_eq!(selection::MAX_REPEAT_RETRIES, 5);
        assert_eq!(selection::TITLE_SONG, "Sound Main");
    }

    #[test]
    fn test_inventory_constants() {
        assert_eq!(inventory::CAPACITY, 28);
        assert_eq!(inventory::BURNT_FOOD_ID, 325);
    }
}
