//! Sfx command for listing the sound effect clips.

use anyhow::Result;
use serde::Serialize;
use spellsound::{SfxCatalog, SfxType};
use strum::IntoEnumIterator;

#[derive(Debug, Serialize)]
struct SfxRow {
    sfx_type: SfxType,
    clips: Vec<String>,
}

fn rows(catalog: &SfxCatalog) -> Vec<SfxRow> {
    SfxType::iter()
        .map(|sfx_type| SfxRow {
            sfx_type,
            clips: catalog
                .clips_of(sfx_type)
                .into_iter()
                .map(|clip| clip.url.clone())
                .collect(),
        })
        .collect()
}

/// List every effect type with its clips
pub fn run(json: bool) -> Result<()> {
    let catalog = SfxCatalog::builtin();
    catalog.validate()?;
    let rows = rows(&catalog);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for row in &rows {
        println!("{:<22} {}", row.sfx_type.to_string(), row.clips.join(", "));
    }
    eprintln!("{} clip(s)", catalog.len());
    Ok(())
}
