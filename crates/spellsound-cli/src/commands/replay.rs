//! Replay command for driving a session from a recorded trace.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use spellsound::mock::{AudioCommand, MockAudio, MockHost};
use spellsound::{SeededRandom, Settings, SpellSound, Trace, TraceAction};
use tracing::{debug, warn};

use crate::cli_utils::{parse_layer, parse_region};

type ReplaySession = SpellSound<MockHost, MockAudio, SeededRandom>;

/// What the session did on one trace frame
#[derive(Debug, Serialize)]
pub struct FrameOutput {
    pub at_ms: u64,
    pub events: Vec<String>,
    pub sfx: Vec<String>,
    pub region_check: Option<String>,
    pub now_playing: Option<String>,
    pub audio: Vec<String>,
}

fn describe(command: &AudioCommand) -> String {
    match command {
        AudioCommand::Create {
            url,
            volume: Some(volume),
        } => format!("create {} (volume {})", url, volume),
        AudioCommand::Create { url, volume: None } => format!("create {}", url),
        AudioCommand::Play { url } => format!("play {}", url),
        AudioCommand::Pause { url } => format!("pause {}", url),
        AudioCommand::SetVolume { url, volume } => format!("volume {} {}", url, volume),
        AudioCommand::SetLooping { url, looping } => format!("looping {} {}", url, looping),
    }
}

fn apply_action(session: &mut ReplaySession, action: &TraceAction) -> Result<()> {
    debug!("Applying {:?}", action);
    match action {
        TraceAction::SetAutoplay { enabled } => session.set_autoplay(*enabled),
        TraceAction::SetRepeat { enabled } => session.set_repeat(*enabled),
        TraceAction::SetVolume { volume } => session.set_volume(*volume),
        TraceAction::PlaySong { name } => {
            if let Err(e) = session.play_song_by_name(name) {
                warn!("Trace asked for a missing song: {}", e);
            }
        }
        TraceAction::PlayRegion { region, layer } => {
            let region = parse_region(region).map_err(|e| anyhow!(e))?;
            let layer = parse_layer(layer).map_err(|e| anyhow!(e))?;
            session.play_by_region(region, layer);
        }
        TraceAction::StopMusic => session.stop_music(),
        TraceAction::FinishMusic => {
            if let Some(url) = session.music().current_song().map(|song| song.url.clone()) {
                session.audio().finish(&url);
            }
        }
        TraceAction::LoggedOut => session.on_logged_out(),
        TraceAction::LoggedIn => session.on_logged_in(),
    }
    Ok(())
}

/// Run `trace` through a fresh session and collect one output per frame.
///
/// The seed argument wins over the trace's own; with neither, 0 is used.
pub fn replay(trace: &Trace, settings: Settings, seed: Option<u64>) -> Result<Vec<FrameOutput>> {
    let seed = seed.or(trace.seed).unwrap_or(0);
    let audio = MockAudio::new();
    let mut session = SpellSound::new(
        settings,
        MockHost::new(),
        audio.clone(),
        SeededRandom::new(seed),
    )?;

    let t0 = Instant::now();
    session.start();

    let mut outputs = Vec::with_capacity(trace.frames.len());
    for frame in &trace.frames {
        frame.apply_to(session.host_mut());
        for action in &frame.actions {
            apply_action(&mut session, action)
                .with_context(|| format!("Bad action at {}ms", frame.at_ms))?;
        }

        let report = session.update(t0 + Duration::from_millis(frame.at_ms));
        outputs.push(FrameOutput {
            at_ms: frame.at_ms,
            events: report.events.iter().map(|e| e.to_string()).collect(),
            sfx: report.sfx.iter().map(|s| s.to_string()).collect(),
            region_check: report.region_check.map(|check| format!("{:?}", check)),
            now_playing: session.now_playing().map(|song| song.to_string()),
            audio: audio.take_commands().iter().map(describe).collect(),
        });
    }

    session.stop();
    Ok(outputs)
}

/// Replay the trace file at `path` and print each frame
pub fn run(path: &Path, settings: Settings, seed: Option<u64>, json: bool) -> Result<()> {
    let trace = Trace::load(path)
        .with_context(|| format!("Failed to load trace from {}", path.display()))?;
    eprintln!("Replaying {} frame(s) from {}", trace.frames.len(), path.display());

    for frame in replay(&trace, settings, seed)? {
        if json {
            println!("{}", serde_json::to_string(&frame)?);
            continue;
        }

        println!(
            "[{:>7}ms] {}",
            frame.at_ms,
            frame.now_playing.as_deref().unwrap_or("(silence)")
        );
        if !frame.events.is_empty() {
            println!("    events: {}", frame.events.join(", "));
        }
        if !frame.sfx.is_empty() {
            println!("    sfx:    {}", frame.sfx.join(", "));
        }
        for command in &frame.audio {
            println!("    audio:  {}", command);
        }
    }
    Ok(())
}
