use std::time::Instant;

use super::{ActivityDeriver, InventoryTracker, PlayerEvent, RawActivity};
use crate::config::timing::ACTIVITY_POLL_INTERVAL;
use crate::host::GameHost;

/// Polls the host for activity at most once per [`ACTIVITY_POLL_INTERVAL`].
#[derive(Debug, Clone, Default)]
pub struct ActivityMonitor {
    deriver: ActivityDeriver,
    inventory: InventoryTracker,
    last_poll: Option<Instant>,
}

impl ActivityMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Poll the host and derive this tick's events.
    ///
    /// Returns `None` when throttled or when the player or its state is not
    /// available; neither consumes a tick of deriver state.
    pub fn poll(&mut self, now: Instant, host: &dyn GameHost) -> Option<Vec<PlayerEvent>> {
        if let Some(last) = self.last_poll
            && now.duration_since(last) < ACTIVITY_POLL_INTERVAL
        {
            return None;
        }
        host.player_position()?;
        let raw = host.activity()?;
        self.last_poll = Some(now);

        match host.inventory() {
            Some(snapshot) => {
                self.inventory.observe(snapshot);
            }
            None => self.inventory.clear_change(),
        }

        let activity = RawActivity::from_raw(raw);
        Some(self.deriver.derive(activity, self.inventory.change()))
    }

    pub fn deriver(&self) -> &ActivityDeriver {
        &self.deriver
    }

    /// Start over as if no tick had been seen
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
