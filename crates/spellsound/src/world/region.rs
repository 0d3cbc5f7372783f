use std::collections::BTreeSet;

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use super::Vector2;

/// Semantic name of a music region.
///
/// Several [`Region`] records may share one name to cover a non-rectangular
/// area; region identity is the name, not the record.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum RegionName {
    #[strum(to_string = "title")]
    Title,
    #[strum(to_string = "anywhere - overworld", serialize = "anywhere-overworld")]
    AnywhereOverworld,
    #[strum(to_string = "anywhere - underworld", serialize = "anywhere-underworld")]
    AnywhereUnderworld,
    #[strum(to_string = "Hedgecastle")]
    Hedgecastle,
    #[strum(to_string = "Celadon")]
    Celadon,
    #[strum(to_string = "High Cove")]
    HighCove,
    #[strum(to_string = "Banton")]
    Banton,
    #[strum(to_string = "Ictirine")]
    Ictirine,
    #[strum(to_string = "Gnome Hill")]
    GnomeHill,
    #[strum(to_string = "Undercroft")]
    Undercroft,
    #[strum(to_string = "Wasteland")]
    Wasteland,
    #[strum(to_string = "Middlefern")]
    Middlefern,
    #[strum(to_string = "Summerton")]
    Summerton,
    #[strum(to_string = "Driftwood Isle")]
    DriftwoodIsle,
    #[strum(to_string = "Mount Tan")]
    MountTan,
    /// Not an in-game region; the lands where "Volrund the Honourable" plays
    #[strum(to_string = "Volrund's Land")]
    VolrundsLand,
    #[strum(to_string = "Wizard's Tower")]
    WizardsTower,
    #[strum(to_string = "Kabe Agility Course")]
    KabeAgilityCourse,
}

impl RegionName {
    /// Names that match any position on their layer
    pub fn is_unbounded(&self) -> bool {
        matches!(
            self,
            Self::Title | Self::AnywhereOverworld | Self::AnywhereUnderworld
        )
    }
}

/// Set of active region names
pub type RegionSet = BTreeSet<RegionName>;

/// Coarse vertical partition of the world
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum RegionLayer {
    Underworld,
    Overworld,
    Sky,
    /// Pre-login screen; has no spatial extent
    Title,
}

impl RegionLayer {
    /// Map the host's raw map level. A missing level means the title screen.
    pub fn from_map_level(level: Option<i32>) -> Self {
        match level {
            Some(0) => Self::Underworld,
            Some(1) => Self::Overworld,
            Some(2) => Self::Sky,
            _ => Self::Title,
        }
    }
}

/// Spatial extent of a region record
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extent {
    /// Matches every position on the layer
    Anywhere,
    /// Axis-aligned box, inclusive on every edge
    Box {
        bottom_left: Vector2,
        top_right: Vector2,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub name: RegionName,
    pub layer: RegionLayer,
    pub extent: Extent,
}

impl Region {
    /// Region covering the whole layer
    pub const fn anywhere(name: RegionName, layer: RegionLayer) -> Self {
        Self {
            name,
            layer,
            extent: Extent::Anywhere,
        }
    }

    pub const fn bounded(
        name: RegionName,
        layer: RegionLayer,
        bottom_left: Vector2,
        top_right: Vector2,
    ) -> Self {
        Self {
            name,
            layer,
            extent: Extent::Box {
                bottom_left,
                top_right,
            },
        }
    }

    /// Whether `position` on `layer` lies inside this region
    pub fn contains(&self, position: Vector2, layer: RegionLayer) -> bool {
        if self.layer != layer {
            return false;
        }
        match self.extent {
            Extent::Anywhere => true,
            Extent::Box {
                bottom_left,
                top_right,
            } => {
                position.x >= bottom_left.x
                    && position.x <= top_right.x
                    && position.z >= bottom_left.z
                    && position.z <= top_right.z
            }
        }
    }
}
