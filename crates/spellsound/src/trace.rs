//! Scripted tick traces
//!
//! A trace is a JSON list of frames, each giving the host state at a point in
//! time plus optional user actions. It drives a session without a game
//! client.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::activity::InventorySnapshot;
use crate::error::Result;
use crate::host::mock::MockHost;
use crate::world::Vector3;

/// User action applied before a frame's tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum TraceAction {
    SetAutoplay { enabled: bool },
    SetRepeat { enabled: bool },
    SetVolume { volume: f32 },
    PlaySong { name: String },
    PlayRegion { region: String, layer: String },
    StopMusic,
    /// The playing song reaches its natural end
    FinishMusic,
    LoggedOut,
    LoggedIn,
}

/// Host state at one tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceFrame {
    /// Milliseconds since the session started
    pub at_ms: u64,
    pub position: Option<Vector3>,
    pub map_level: Option<i32>,
    pub activity: Option<i32>,
    pub inventory: Option<InventorySnapshot>,
    pub actions: Vec<TraceAction>,
}

impl TraceFrame {
    /// Copy this frame's host state onto `host`
    pub fn apply_to(&self, host: &mut MockHost) {
        host.position = self.position;
        host.map_level = self.map_level;
        host.activity = self.activity;
        host.inventory = self.inventory.clone();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    /// Seed for song and clip picks
    #[serde(default)]
    pub seed: Option<u64>,
    pub frames: Vec<TraceFrame>,
}

impl Trace {
    pub fn from_json_str(content: &str) -> Result<Self> {
        let mut trace: Trace = serde_json::from_str(content)?;
        trace.frames.sort_by_key(|frame| frame.at_ms);
        Ok(trace)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_trace() {
        let trace = Trace::from_json_str(r#"{"frames": [{"at_ms": 0}]}"#).unwrap();
        assert_eq!(trace.seed, None);
        assert_eq!(trace.frames.len(), 1);
        assert_eq!(trace.frames[0].position, None);
        assert!(trace.frames[0].actions.is_empty());
    }

    #[test]
    fn test_frames_sorted_by_time() {
        let trace = Trace::from_json_str(
            r#"{"frames": [{"at_ms": 3000}, {"at_ms": 0}, {"at_ms": 1500}]}"#,
        )
        .unwrap();
        let times: Vec<u64> = trace.frames.iter().map(|f| f.at_ms).collect();
        assert_eq!(times, vec![0, 1500, 3000]);
    }

    #[test]
    fn test_parse_actions_and_state() {
        let trace = Trace::from_json_str(
            r#"{
                "seed": 7,
                "frames": [{
                    "at_ms": 0,
                    "position": {"x": -350.0, "y": 0.0, "z": 0.0},
                    "map_level": 1,
                    "activity": 14,
                    "inventory": [{"id": 3, "amount": 1}, {"is_null": true}],
                    "actions": [
                        {"action": "set_autoplay", "enabled": false},
                        {"action": "play_region", "region": "Banton", "layer": "overworld"},
                        {"action": "finish_music"}
                    ]
                }]
            }"#,
        )
        .unwrap();
        let frame = &trace.frames[0];
        assert_eq!(trace.seed, Some(7));
        assert_eq!(frame.inventory.as_ref().unwrap().occupied(), 1);
        assert_eq!(
            frame.actions,
            vec![
                TraceAction::SetAutoplay { enabled: false },
                TraceAction::PlayRegion {
                    region: "Banton".to_string(),
                    layer: "overworld".to_string()
                },
                TraceAction::FinishMusic,
            ]
        );

        let mut host = MockHost::new();
        frame.apply_to(&mut host);
        assert_eq!(host.activity, Some(14));
        assert_eq!(host.map_level, Some(1));
    }

    #[test]
    fn test_invalid_json() {
        assert!(Trace::from_json_str("{").is_err());
    }
}
