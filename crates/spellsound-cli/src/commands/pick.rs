//! Pick command for previewing song selection at a position.

use anyhow::{Context, Result};
use spellsound::{
    MusicSelector, RandomSource, RegionIndex, RegionLayer, SeededRandom, SongCatalog,
    ThreadRandom, Vector2,
};

/// Make `count` picks for (x, z) on `layer`, each one following the last
pub fn run(
    x: f64,
    z: f64,
    layer: RegionLayer,
    current: Option<&str>,
    seed: Option<u64>,
    count: usize,
) -> Result<()> {
    let index = RegionIndex::builtin();
    let catalog = SongCatalog::builtin();
    let position = Vector2::new(x, z);
    let active = index.names_containing(position, layer);
    eprintln!("Active regions at {} on {}: {:?}", position, layer, active);

    let mut playing = match current {
        Some(name) => {
            let song_index = catalog
                .find_index(name)
                .with_context(|| format!("Unknown current song '{}'", name))?;
            catalog.get(song_index).map(|song| song.url.clone())
        }
        None => None,
    };

    let mut rng: Box<dyn RandomSource> = match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    };

    let selector = MusicSelector::new();
    for _ in 0..count {
        let Some(selection) = selector.select(&catalog, &active, playing.as_deref(), rng.as_mut())
        else {
            eprintln!("No song plays here");
            return Ok(());
        };
        let Some(song) = catalog.get(selection.song_index) else {
            continue;
        };
        println!(
            "{} by {} (region {}, priority {}, {} pass(es))",
            song.name, song.author, selection.region, selection.priority, selection.attempts
        );
        playing = Some(song.url.clone());
    }
    Ok(())
}
