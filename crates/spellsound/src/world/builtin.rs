//! Built-in region table of the game world.

use super::{Region, RegionIndex, RegionLayer, RegionName, Vector2};

use super::RegionLayer::{Overworld, Underworld};

const fn bx(
    name: RegionName,
    layer: RegionLayer,
    left: f64,
    bottom: f64,
    right: f64,
    top: f64,
) -> Region {
    Region::bounded(
        name,
        layer,
        Vector2::new(left, bottom),
        Vector2::new(right, top),
    )
}

/// Every region shipped with the plugin
pub fn builtin_regions() -> Vec<Region> {
    vec![
        // Unbounded regions, matched by layer alone
        Region::anywhere(RegionName::Title, RegionLayer::Title),
        Region::anywhere(RegionName::AnywhereOverworld, Overworld),
        Region::anywhere(RegionName::AnywhereUnderworld, Underworld),
        bx(RegionName::Hedgecastle, Overworld, -407.0, -39.0, -279.0, 72.0),
        bx(RegionName::Middlefern, Overworld, -7.0, -151.0, 104.0, -55.0),
        bx(RegionName::Middlefern, Overworld, 104.0, -119.0, 120.0, -55.0),
        bx(RegionName::Wasteland, Overworld, 152.0, -519.0, 520.0, -127.0),
        bx(RegionName::Wasteland, Overworld, 104.0, -519.0, 152.0, -471.0),
        bx(RegionName::Ictirine, Overworld, -71.0, 152.0, 104.0, 312.0),
        bx(RegionName::Celadon, Overworld, 280.0, -71.0, 392.0, 8.0),
        bx(RegionName::GnomeHill, Overworld, 8.0, -39.0, 56.0, 24.0),
        bx(RegionName::GnomeHill, Underworld, 8.0, -39.0, 56.0, 24.0),
        bx(RegionName::HighCove, Overworld, -311.0, -423.0, -215.0, -327.0),
        bx(RegionName::Banton, Overworld, -135.0, -215.0, -39.0, -151.0),
        bx(RegionName::Banton, Overworld, -135.0, -151.0, -55.0, -135.0),
        bx(RegionName::DriftwoodIsle, Overworld, -167.0, -503.0, -135.0, -455.0),
        bx(RegionName::Undercroft, Underworld, 376.0, -247.0, 488.0, -23.0),
        bx(RegionName::Undercroft, Underworld, 424.0, -23.0, 488.0, 40.0),
        bx(RegionName::Summerton, Overworld, -183.0, -359.0, -103.0, -295.0),
        bx(RegionName::MountTan, Overworld, -7.0, 392.0, 72.0, 488.0),
        // Same z on both corners in game data
        bx(RegionName::VolrundsLand, Overworld, -279.0, -295.0, -167.0, -167.0),
        bx(RegionName::VolrundsLand, Overworld, -167.0, -231.0, -103.0, -151.0),
        bx(RegionName::WizardsTower, Overworld, 40.0, 24.0, 120.0, 88.0),
        bx(RegionName::KabeAgilityCourse, Overworld, -23.0, 24.0, 0.0, 72.0),
    ]
}

impl RegionIndex {
    /// Index over [`builtin_regions`]
    pub fn builtin() -> Self {
        Self::new(builtin_regions())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::RegionSet;

    #[test]
    fn test_every_playable_layer_has_fallback() {
        let index = RegionIndex::builtin();
        for layer in [Overworld, Underworld, RegionLayer::Title] {
            let far = index.regions_containing(Vector2::new(9999.0, 9999.0), layer);
            assert_eq!(far.len(), 1, "layer {layer} should have one unbounded region");
            assert!(far[0].name.is_unbounded());
        }
    }

    #[test]
    fn test_hedgecastle_center() {
        let index = RegionIndex::builtin();
        let names = index.names_containing(Vector2::new(-350.0, 0.0), Overworld);
        assert_eq!(
            names,
            RegionSet::from([RegionName::AnywhereOverworld, RegionName::Hedgecastle])
        );
    }

    #[test]
    fn test_middlefern_boxes_share_edge() {
        let index = RegionIndex::builtin();
        let regions = index.regions_containing(Vector2::new(104.0, -100.0), Overworld);
        let middlefern = regions
            .iter()
            .filter(|r| r.name == RegionName::Middlefern)
            .count();
        assert_eq!(middlefern, 2);
    }

    #[test]
    fn test_gnome_hill_on_both_layers() {
        let index = RegionIndex::builtin();
        let point = Vector2::new(30.0, 0.0);
        assert!(index.names_containing(point, Overworld).contains(&RegionName::GnomeHill));
        assert!(index.names_containing(point, Underworld).contains(&RegionName::GnomeHill));
    }

    #[test]
    fn test_wizards_tower_overlaps_gnome_hill_corner() {
        let index = RegionIndex::builtin();
        let names = index.names_containing(Vector2::new(50.0, 24.0), Overworld);
        assert!(names.contains(&RegionName::WizardsTower));
        assert!(names.contains(&RegionName::GnomeHill));
    }

    #[test]
    fn test_sky_has_no_regions() {
        let index = RegionIndex::builtin();
        assert!(
            index
                .regions_containing(Vector2::new(0.0, 0.0), RegionLayer::Sky)
                .is_empty()
        );
    }
}
