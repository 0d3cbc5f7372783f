use super::{Region, RegionLayer, RegionName, RegionSet, Vector2};

/// Read-only catalog of music regions
#[derive(Debug, Clone, Default)]
pub struct RegionIndex {
    regions: Vec<Region>,
}

impl RegionIndex {
    pub fn new(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    /// Every region on `layer` whose extent contains `position`.
    ///
    /// Overlapping boxes are all returned, as are the layer's unbounded regions.
    pub fn regions_containing(&self, position: Vector2, layer: RegionLayer) -> Vec<&Region> {
        self.regions
            .iter()
            .filter(|region| region.contains(position, layer))
            .collect()
    }

    /// Names of the regions containing `position` on `layer`
    pub fn names_containing(&self, position: Vector2, layer: RegionLayer) -> RegionSet {
        self.regions_containing(position, layer)
            .into_iter()
            .map(|region| region.name)
            .collect()
    }

    /// Every record with the given name on the given layer
    pub fn regions_named(&self, name: RegionName, layer: RegionLayer) -> Vec<&Region> {
        self.regions
            .iter()
            .filter(|region| region.name == name && region.layer == layer)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
