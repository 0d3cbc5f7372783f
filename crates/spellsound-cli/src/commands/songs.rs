//! Songs command for listing the catalog.

use anyhow::Result;
use serde::Serialize;
use spellsound::{RegionName, RegionSet, Song, SongCatalog};

#[derive(Debug, Serialize)]
struct SongRow {
    index: usize,
    name: String,
    author: String,
    url: String,
    regions: Vec<String>,
}

impl SongRow {
    fn new(index: usize, song: &Song) -> Self {
        Self {
            index,
            name: song.name.clone(),
            author: song.author.clone(),
            url: song.url.clone(),
            regions: song
                .region_tags
                .iter()
                .map(|tag| format!("{} ({})", tag.name, tag.priority))
                .collect(),
        }
    }
}

fn rows(catalog: &SongCatalog, region: Option<RegionName>) -> Vec<SongRow> {
    catalog
        .iter()
        .enumerate()
        .filter(|(_, song)| region.is_none_or(|name| song.plays_in(&RegionSet::from([name]))))
        .map(|(index, song)| SongRow::new(index, song))
        .collect()
}

/// List songs, optionally only those tagged with `region`
pub fn run(region: Option<RegionName>, json: bool) -> Result<()> {
    let catalog = SongCatalog::builtin();
    let rows = rows(&catalog, region);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for row in &rows {
        println!(
            "{:>3}  {:<28} {:<12} {}",
            row.index,
            row.name,
            row.author,
            row.regions.join(", ")
        );
    }
    eprintln!("{} song(s)", rows.len());
    Ok(())
}
