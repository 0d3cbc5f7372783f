use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, FromRepr, IntoStaticStr};

/// Action state reported by the host, numbered as the host numbers it.
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
    FromRepr,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum RawActivity {
    Idle = 0,
    Moving = 1,
    MovingTowardTarget = 2,
    Banking = 3,
    MeleeCombat = 4,
    Trading = 5,
    Shopping = 6,
    Fishing = 7,
    Cooking = 8,
    Respawning = 9,
    PlayerDead = 10,
    Conversation = 11,
    ChangingAppearance = 12,
    Woodcutting = 13,
    Mining = 14,
    Harvesting = 15,
    TreeShaking = 16,
    Smelting = 17,
    Smithing = 18,
    Crafting = 19,
    GoThroughDoor = 20,
    MagicCombat = 21,
    RangeCombat = 22,
    Enchanting = 23,
    Teleporting = 24,
    NpcDead = 25,
    CreatingNonSkillItems = 26,
    SearchingWorldEntity = 27,
    PotionMaking = 28,
    MineThroughRocks = 29,
    UsingSpinningWheel = 30,
    ClimbSameMapLevel = 31,
    SmeltingKiln = 32,
    PlayerLoggingOut = 33,
    Pickpocketing = 34,
    Stunned = 35,
    Picklocking = 36,
    NpcConversation = 37,
    RubbingItem = 38,
    OpeningItem = 39,
    UsingItemOnEntity = 40,
    Digging = 41,
}

impl RawActivity {
    /// Decode the host's raw state number. Unknown numbers yield `None`.
    pub fn from_raw(value: i32) -> Option<Self> {
        u8::try_from(value).ok().and_then(Self::from_repr)
    }

    /// States reported as events on their own
    pub fn is_passthrough(&self) -> bool {
        matches!(
            self,
            Self::Idle
                | Self::Moving
                | Self::Mining
                | Self::Smelting
                | Self::Smithing
                | Self::Pickpocketing
                | Self::Stunned
        )
    }
}

/// Event inferred from state transitions or inventory changes; never polled.
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
pub enum DerivedEvent {
    CrimeSuccess,
    OreDepleted,
    FishingInProgress,
    FishCaught,
    FullInventory,
    WoodcutInProgress,
    WoodcutLogsReceived,
    CookingInProgress,
    CookingSuccess,
    CookingFailure,
}

/// Event emitted by the deriver for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Nothing recognisable happened
    Any,
    Activity(RawActivity),
    Derived(DerivedEvent),
}

impl std::fmt::Display for PlayerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Any => write!(f, "Any"),
            Self::Activity(activity) => write!(f, "{}", activity),
            Self::Derived(event) => write!(f, "{}", event),
        }
    }
}

impl From<RawActivity> for PlayerEvent {
    fn from(activity: RawActivity) -> Self {
        Self::Activity(activity)
    }
}

impl From<DerivedEvent> for PlayerEvent {
    fn from(event: DerivedEvent) -> Self {
        Self::Derived(event)
    }
}
