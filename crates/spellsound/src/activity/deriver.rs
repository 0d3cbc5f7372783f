use std::collections::BTreeSet;

use super::{DerivedEvent, InventoryChange, PlayerEvent, RawActivity};
use crate::config::inventory::{BURNT_FOOD_ID, CAPACITY};

/// Turns the polled action state and inventory delta into events.
///
/// Remembers which events fired on the previous tick; transitions such as
/// "stopped mining" are detected against that set.
#[derive(Debug, Clone)]
pub struct ActivityDeriver {
    last_events: BTreeSet<PlayerEvent>,
}

impl Default for ActivityDeriver {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityDeriver {
    pub fn new() -> Self {
        Self {
            last_events: BTreeSet::from([PlayerEvent::Any]),
        }
    }

    /// Events emitted on the previous tick
    pub fn last_events(&self) -> &BTreeSet<PlayerEvent> {
        &self.last_events
    }

    fn was(&self, activity: RawActivity) -> bool {
        self.last_events.contains(&PlayerEvent::Activity(activity))
    }

    /// Derive this tick's events.
    ///
    /// `current` is `None` for a state number the host added later. `change`
    /// is the inventory delta seen on this tick only.
    pub fn derive(
        &mut self,
        current: Option<RawActivity>,
        change: Option<&InventoryChange>,
    ) -> Vec<PlayerEvent> {
        let mut events = Vec::new();
        let is = |activity: RawActivity| current == Some(activity);

        if self.was(RawActivity::Pickpocketing)
            && !is(RawActivity::Pickpocketing)
            && !is(RawActivity::Stunned)
        {
            events.push(DerivedEvent::CrimeSuccess.into());
        }

        if self.was(RawActivity::Mining) && !is(RawActivity::Mining) {
            events.push(DerivedEvent::OreDepleted.into());
        }

        if is(RawActivity::Fishing) {
            events.push(if change.is_some() {
                DerivedEvent::FishCaught.into()
            } else {
                DerivedEvent::FishingInProgress.into()
            });
        }

        if is(RawActivity::Woodcutting) {
            events.push(if change.is_some() {
                DerivedEvent::WoodcutLogsReceived.into()
            } else {
                DerivedEvent::WoodcutInProgress.into()
            });
        }

        self.derive_cooking(&mut events, is(RawActivity::Cooking), change);

        if let Some(change) = change
            && change.became_full(CAPACITY)
        {
            events.push(DerivedEvent::FullInventory.into());
        }

        if let Some(activity) = current
            && activity.is_passthrough()
        {
            events.push(activity.into());
        }

        self.last_events = if events.is_empty() {
            BTreeSet::from([PlayerEvent::Any])
        } else {
            events.iter().copied().collect()
        };

        if events.is_empty() {
            events.push(PlayerEvent::Any);
        }
        events
    }

    /// Cooking reports one host state for both "still cooking" and "done".
    /// Done is only known once the inventory changes after a cooking tick.
    fn derive_cooking(
        &self,
        events: &mut Vec<PlayerEvent>,
        cooking: bool,
        change: Option<&InventoryChange>,
    ) {
        let mut in_progress = cooking;
        if cooking {
            events.push(RawActivity::Cooking.into());
        }

        if self.was(RawActivity::Cooking)
            && let Some(change) = change
        {
            in_progress = false;
            events.push(if change.gained(BURNT_FOOD_ID) {
                DerivedEvent::CookingFailure.into()
            } else {
                DerivedEvent::CookingSuccess.into()
            });
        }

        if in_progress {
            events.push(DerivedEvent::CookingInProgress.into());
        }
    }
}
