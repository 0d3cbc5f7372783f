use strum::IntoEnumIterator;

use super::SfxType;
use crate::error::{Error, Result};
use crate::random::RandomSource;

const SFX_DIR: &str = "sfx";

/// One sound file of an effect type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SfxClip {
    pub sfx_type: SfxType,
    pub url: String,
}

impl SfxClip {
    pub fn new(sfx_type: SfxType, url: impl Into<String>) -> Self {
        Self {
            sfx_type,
            url: url.into(),
        }
    }
}

/// All known sound effect clips
#[derive(Debug, Clone, Default)]
pub struct SfxCatalog {
    clips: Vec<SfxClip>,
}

impl SfxCatalog {
    pub fn new(clips: Vec<SfxClip>) -> Self {
        Self { clips }
    }

    /// Catalog of the clips shipped with the plugin
    pub fn builtin() -> Self {
        let sets: [(SfxType, &str, u32); 14] = [
            (SfxType::PickaxeHit, "pickaxe", 3),
            (SfxType::OreSmelted, "smelt", 3),
            (SfxType::MetalSmithed, "smith", 3),
            (SfxType::LootingAround, "carve", 3),
            (SfxType::CaughtStealing, "caughtstealing", 3),
            (SfxType::StealSuccessful, "steal", 3),
            (SfxType::OreDepleted, "ore_depleted", 3),
            (SfxType::FishingInProgress, "fishing", 3),
            (SfxType::FishCaught, "fish_caught", 3),
            (SfxType::FullInventory, "full_inventory", 1),
            (SfxType::WoodcutInProgress, "chop", 3),
            (SfxType::WoodcutLogsReceived, "log_received", 3),
            (SfxType::CookingSuccess, "cook", 3),
            (SfxType::CookingFailure, "burn", 1),
        ];

        let clips = sets
            .into_iter()
            .flat_map(|(sfx_type, stem, count)| {
                (1..=count).map(move |n| {
                    let url = if count == 1 {
                        format!("{}/{}.mp3", SFX_DIR, stem)
                    } else {
                        format!("{}/{}{}.mp3", SFX_DIR, stem, n)
                    };
                    SfxClip::new(sfx_type, url)
                })
            })
            .collect();
        Self { clips }
    }

    /// Every clip of `sfx_type`
    pub fn clips_of(&self, sfx_type: SfxType) -> Vec<&SfxClip> {
        self.clips
            .iter()
            .filter(|clip| clip.sfx_type == sfx_type)
            .collect()
    }

    /// Pick one clip of `sfx_type` uniformly at random
    pub fn pick(&self, sfx_type: SfxType, rng: &mut dyn RandomSource) -> Result<&SfxClip> {
        let clips = self.clips_of(sfx_type);
        if clips.is_empty() {
            return Err(Error::SfxNotFound(sfx_type));
        }
        Ok(clips[rng.pick_index(clips.len())])
    }

    /// Check that every effect type has at least one clip
    pub fn validate(&self) -> Result<()> {
        for sfx_type in SfxType::iter() {
            if self.clips_of(sfx_type).is_empty() {
                return Err(Error::SfxNotFound(sfx_type));
            }
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SfxClip> {
        self.clips.iter()
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}
