mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (warn unless RUST_LOG or --verbose says otherwise)
    let default_filter = if args.verbose {
        "spellsound=debug,spellsound_cli=debug"
    } else {
        "spellsound=warn,spellsound_cli=warn"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = cli_utils::load_settings(args.settings.as_deref())?;

    match args.command {
        Command::Regions { x, z, layer } => commands::regions::run(x, z, layer),
        Command::Songs { region, json } => commands::songs::run(region, json),
        Command::Sfx { json } => commands::sfx::run(json),
        Command::Pick {
            x,
            z,
            layer,
            current,
            seed,
            count,
        } => commands::pick::run(x, z, layer, current.as_deref(), seed, count),
        Command::Replay { trace, seed, json } => {
            commands::replay::run(&trace, settings, seed, json)
        }
    }
}
