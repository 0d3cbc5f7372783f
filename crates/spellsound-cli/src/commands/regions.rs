//! Regions command for inspecting the region table at a position.

use anyhow::Result;
use spellsound::{RegionIndex, RegionLayer, Vector2};
use spellsound::world::Extent;

/// Print every region record containing (x, z) on `layer`
pub fn run(x: f64, z: f64, layer: RegionLayer) -> Result<()> {
    let index = RegionIndex::builtin();
    let position = Vector2::new(x, z);
    let regions = index.regions_containing(position, layer);

    if regions.is_empty() {
        eprintln!("No regions at {} on {}", position, layer);
        return Ok(());
    }

    println!("Regions at {} on {}:", position, layer);
    for region in regions {
        match region.extent {
            Extent::Anywhere => println!("  {:<24} (whole layer)", region.name.to_string()),
            Extent::Box {
                bottom_left,
                top_right,
            } => println!(
                "  {:<24} {} - {}",
                region.name.to_string(),
                bottom_left,
                top_right
            ),
        }
    }
    Ok(())
}
