//! Built-in song list.

use super::{RegionTag, Song, SongCatalog};
use crate::world::RegionName;

const SONG_DIR: &str = "songs";

fn song(name: &str, file: &str, author: &str, region_tags: Vec<RegionTag>) -> Song {
    Song::new(name, format!("{}/{}", SONG_DIR, file), author, region_tags)
}

/// Every song shipped with the plugin
pub fn builtin_songs() -> Vec<Song> {
    use RegionName::*;

    let any = RegionTag::unranked;
    let rank = RegionTag::ranked;

    vec![
        // Anywhere on the overworld
        song(
            "Sound Main",
            "sound_main.mp3",
            "Bpcooldude",
            vec![any(Title), any(AnywhereOverworld)],
        ),
        song("Early Dawn", "early_dawn.mp3", "Bpcooldude", vec![any(AnywhereOverworld)]),
        song(
            "Spirit Realm Crossing Pt. 1",
            "spirit_realm_crossing_1.mp3",
            "Bpcooldude",
            vec![any(AnywhereOverworld)],
        ),
        song(
            "Spirit Realm Crossing Pt. 2",
            "spirit_realm_crossing_2.mp3",
            "Bpcooldude",
            vec![any(AnywhereOverworld)],
        ),
        song(
            "Spirit Realm Crossing Pt. 3",
            "spirit_realm_crossing_3.mp3",
            "Bpcooldude",
            vec![any(AnywhereOverworld)],
        ),
        // Rank 2 so Summerton and High Cove music still wins on overlap
        song(
            "Volrund the Honourable",
            "volrund_the_honourable.mp3",
            "Bpcooldude",
            vec![any(AnywhereOverworld), rank(VolrundsLand, 2)],
        ),
        // Anywhere underground
        song("Poisoned", "poisoned.mp3", "Bpcooldude", vec![any(AnywhereUnderworld)]),
        song("Spaces", "spaces.mp3", "Bpcooldude", vec![any(AnywhereUnderworld)]),
        // Places
        song("Lively City", "lively_city.mp3", "Bpcooldude", vec![rank(Celadon, 1)]),
        song("Winds of Siron", "winds_of_siron.mp3", "Bpcooldude", vec![rank(HighCove, 1)]),
        song("Marketplace", "marketplace.mp3", "Bpcooldude", vec![rank(Banton, 1)]),
        song("Emperor", "emperor.mp3", "Bpcooldude", vec![rank(Hedgecastle, 1)]),
        song("Fishin'", "fishin.mp3", "Bpcooldude", vec![rank(DriftwoodIsle, 1)]),
        song(
            "Middlefern",
            "middlefern.mp3",
            "Heath",
            vec![any(Title), rank(Middlefern, 1)],
        ),
        song("Wildy RS Style", "wildy_rs_style.mp3", "Heath", vec![rank(Wasteland, 2)]),
        song("Ictirine", "ictirine.mp3", "Heath", vec![rank(Ictirine, 1)]),
        song("Up On Gnome Hill", "up_on_gnome_hill.mp3", "Heath", vec![rank(GnomeHill, 1)]),
        song("Barbarian", "barbarian.mp3", "Heath", vec![rank(Undercroft, 1)]),
        song(
            "Glock & Piano",
            "glock_and_piano.mp3",
            "dpiper125",
            vec![any(Title), rank(Summerton, 1)],
        ),
        song("Tan Sand Man", "tan_sand_man.mp3", "Bpcooldude", vec![rank(MountTan, 1)]),
        song(
            "Distant Horizon",
            "distant_horizon.mp3",
            "Bpcooldude",
            vec![any(AnywhereOverworld), rank(WizardsTower, 1)],
        ),
        song("Barony", "barony.mp3", "Bpcooldude", vec![rank(KabeAgilityCourse, 1)]),
    ]
}

impl SongCatalog {
    /// Catalog over [`builtin_songs`]
    pub fn builtin() -> Self {
        Self::new(builtin_songs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::selection::TITLE_SONG;
    use crate::music::Priority;
    use crate::world::RegionSet;

    #[test]
    fn test_builtin_count() {
        assert_eq!(SongCatalog::builtin().len(), 22);
    }

    #[test]
    fn test_names_unique_case_insensitive() {
        let catalog = SongCatalog::builtin();
        let mut names: Vec<String> = catalog.iter().map(|s| s.name.to_lowercase()).collect();
        names.dedup();
        assert_eq!(names.len(), catalog.len());
    }

    #[test]
    fn test_title_song_present() {
        let catalog = SongCatalog::builtin();
        let index = catalog.find_index(TITLE_SONG).unwrap();
        assert!(
            catalog.get(index).unwrap().plays_in(&RegionSet::from([RegionName::Title]))
        );
    }

    #[test]
    fn test_emperor_ranked_in_hedgecastle() {
        let catalog = SongCatalog::builtin();
        let emperor = catalog.get(catalog.find_index("emperor").unwrap()).unwrap();
        assert_eq!(emperor.priority_in(RegionName::Hedgecastle), Priority::Rank(1));
        assert_eq!(emperor.author, "Bpcooldude");
        assert!(emperor.url.ends_with("emperor.mp3"));
    }

    #[test]
    fn test_every_song_has_a_region() {
        assert!(SongCatalog::builtin().iter().all(|s| !s.region_tags.is_empty()));
    }
}
