use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

use crate::activity::{DerivedEvent, PlayerEvent, RawActivity};
use crate::world::Vector3;

/// Group of interchangeable clips for one effect
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    IntoStaticStr,
)]
pub enum SfxType {
    PickaxeHit,
    OreSmelted,
    MetalSmithed,
    /// Thieving, nothing looted yet
    LootingAround,
    /// Stunned while thieving
    CaughtStealing,
    StealSuccessful,
    OreDepleted,
    FishingInProgress,
    FishCaught,
    FullInventory,
    WoodcutInProgress,
    WoodcutLogsReceived,
    CookingSuccess,
    CookingFailure,
}

/// Broad importance class of an effect.
///
/// Carried on every request; only [`SfxOverlap::OnePerCategory`] acts on it.
///
/// [`SfxOverlap::OnePerCategory`]: crate::config::SfxOverlap::OnePerCategory
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
pub enum SfxCategory {
    Ambient,
    NonCritical,
    Critical,
    #[strum(serialize = "UI")]
    Ui,
}

/// Where an effect comes from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SfxSource {
    Player { position: Option<Vector3> },
    Ui,
}

/// Effect type and category for an event, `None` for silent events.
pub fn sfx_for_event(event: PlayerEvent) -> Option<(SfxType, SfxCategory)> {
    use SfxCategory::*;

    let mapped = match event {
        PlayerEvent::Activity(RawActivity::Mining) => (SfxType::PickaxeHit, NonCritical),
        PlayerEvent::Activity(RawActivity::Smelting) => (SfxType::OreSmelted, NonCritical),
        PlayerEvent::Activity(RawActivity::Smithing) => (SfxType::MetalSmithed, NonCritical),
        PlayerEvent::Activity(RawActivity::Pickpocketing) => {
            (SfxType::LootingAround, NonCritical)
        }
        PlayerEvent::Activity(RawActivity::Stunned) => (SfxType::CaughtStealing, Critical),
        PlayerEvent::Derived(derived) => match derived {
            DerivedEvent::CrimeSuccess => (SfxType::StealSuccessful, NonCritical),
            DerivedEvent::OreDepleted => (SfxType::OreDepleted, NonCritical),
            DerivedEvent::FishingInProgress => (SfxType::FishingInProgress, NonCritical),
            DerivedEvent::FishCaught => (SfxType::FishCaught, NonCritical),
            DerivedEvent::WoodcutInProgress => (SfxType::WoodcutInProgress, NonCritical),
            DerivedEvent::WoodcutLogsReceived => (SfxType::WoodcutLogsReceived, NonCritical),
            DerivedEvent::CookingSuccess => (SfxType::CookingSuccess, NonCritical),
            DerivedEvent::CookingFailure => (SfxType::CookingFailure, NonCritical),
            DerivedEvent::FullInventory => (SfxType::FullInventory, Ui),
            DerivedEvent::CookingInProgress => return None,
        },
        _ => return None,
    };
    Some(mapped)
}
