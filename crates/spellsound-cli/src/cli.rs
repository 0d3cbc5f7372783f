//! CLI argument definitions for spellsound.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use spellsound::{RegionLayer, RegionName};

use crate::cli_utils::{parse_layer, parse_region};

#[derive(Parser)]
#[command(name = "spellsound")]
#[command(about = "Region music and activity sound effects, offline tools", version)]
pub struct Args {
    /// Settings file (TOML); defaults apply when missing
    #[arg(short, long, value_name = "FILE", env = "SPELLSOUND_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the regions containing a position
    Regions {
        /// X coordinate
        #[arg(allow_negative_numbers = true)]
        x: f64,
        /// Z coordinate
        #[arg(allow_negative_numbers = true)]
        z: f64,
        /// Layer (underworld, overworld, sky, title)
        #[arg(long, default_value = "overworld", value_parser = parse_layer)]
        layer: RegionLayer,
    },
    /// List the song catalog
    Songs {
        /// Only songs tagged with this region
        #[arg(long, value_parser = parse_region)]
        region: Option<RegionName>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the sound effect clips
    Sfx {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Pick a song for a position
    Pick {
        /// X coordinate
        #[arg(allow_negative_numbers = true)]
        x: f64,
        /// Z coordinate
        #[arg(allow_negative_numbers = true)]
        z: f64,
        /// Layer (underworld, overworld, sky, title)
        #[arg(long, default_value = "overworld", value_parser = parse_layer)]
        layer: RegionLayer,
        /// Name of the song playing now, excluded from the pick
        #[arg(long)]
        current: Option<String>,
        /// Seed for the random pick
        #[arg(long)]
        seed: Option<u64>,
        /// Number of picks to make
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,
    },
    /// Drive a session from a JSON trace and print what it played
    Replay {
        /// Trace file (JSON)
        trace: PathBuf,
        /// Seed for song and clip picks, overriding the trace's own
        #[arg(long)]
        seed: Option<u64>,
        /// Output as JSON lines
        #[arg(long)]
        json: bool,
    },
}
