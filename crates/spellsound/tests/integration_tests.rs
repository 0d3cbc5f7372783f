//! Integration tests for spellsound
//!
//! These tests drive a full session through the mock host and audio backend.

use std::time::{Duration, Instant};

use spellsound::config::inventory::{BURNT_FOOD_ID, CAPACITY};
use spellsound::config::timing::{ACTIVITY_POLL_INTERVAL, REGION_POLL_INTERVAL, TRACK_GAP};
use spellsound::mock::{AudioCommand, MockAudio, MockHost, SequenceRandom};
use spellsound::{
    DerivedEvent, InventorySnapshot, ItemSlot, MusicSelector, PlayerEvent, Priority, RawActivity,
    RegionCheck, RegionIndex, RegionLayer, RegionName, RegionSet, Settings, SfxType, SongCatalog,
    SpellSound, Vector2, Vector3,
};

type Session = SpellSound<MockHost, MockAudio, SequenceRandom>;

const HEDGECASTLE: Vector3 = Vector3 {
    x: -350.0,
    y: 0.0,
    z: 0.0,
};
const WILDERNESS: Vector3 = Vector3 {
    x: 5000.0,
    y: 0.0,
    z: 5000.0,
};

fn overworld_host(position: Vector3) -> MockHost {
    MockHost::new().with_position(position).with_map_level(1)
}

/// Session plus a handle on its audio backend
fn session_with(host: MockHost, settings: Settings, picks: Vec<usize>) -> (Session, MockAudio) {
    let audio = MockAudio::new();
    let session =
        SpellSound::new(settings, host, audio.clone(), SequenceRandom::new(picks)).unwrap();
    (session, audio)
}

fn session(host: MockHost) -> (Session, MockAudio) {
    session_with(host, Settings::default(), vec![0])
}

fn created(audio: &MockAudio) -> Vec<String> {
    audio
        .commands()
        .into_iter()
        .filter_map(|command| match command {
            AudioCommand::Create { url, .. } => Some(url),
            _ => None,
        })
        .collect()
}

/// Test the built-in region table
mod region_tests {
    use super::*;

    #[test]
    fn test_fallback_region_outside_every_box() {
        let index = RegionIndex::builtin();
        assert_eq!(
            index.names_containing(WILDERNESS.ground(), RegionLayer::Overworld),
            RegionSet::from([RegionName::AnywhereOverworld])
        );
        assert_eq!(
            index.names_containing(WILDERNESS.ground(), RegionLayer::Underworld),
            RegionSet::from([RegionName::AnywhereUnderworld])
        );
    }

    #[test]
    fn test_hedgecastle_and_overworld_both_active() {
        let index = RegionIndex::builtin();
        assert_eq!(
            index.names_containing(HEDGECASTLE.ground(), RegionLayer::Overworld),
            RegionSet::from([RegionName::AnywhereOverworld, RegionName::Hedgecastle])
        );
    }

    #[test]
    fn test_shared_edge_matches_both_boxes() {
        let index = RegionIndex::builtin();
        // Middlefern's two boxes meet at x = 104
        let names = index.names_containing(Vector2::new(104.0, -60.0), RegionLayer::Overworld);
        let records = index
            .regions_containing(Vector2::new(104.0, -60.0), RegionLayer::Overworld)
            .into_iter()
            .filter(|region| region.name == RegionName::Middlefern)
            .count();
        assert!(names.contains(&RegionName::Middlefern));
        assert_eq!(records, 2);
    }
}

/// Test song selection against the built-in catalog
mod selection_tests {
    use super::*;

    #[test]
    fn test_town_song_beats_overworld_songs() {
        let catalog = SongCatalog::builtin();
        let index = RegionIndex::builtin();
        let active = index.names_containing(HEDGECASTLE.ground(), RegionLayer::Overworld);

        for pick in 0..8 {
            let mut rng = SequenceRandom::new(vec![pick]);
            let selection = MusicSelector::new()
                .select(&catalog, &active, None, &mut rng)
                .unwrap();
            let song = catalog.get(selection.song_index).unwrap();
            assert_eq!(song.name, "Emperor");
            assert_eq!(selection.priority, Priority::Rank(1));
        }
    }

    #[test]
    fn test_volrund_rank_two_loses_to_rank_one() {
        let catalog = SongCatalog::builtin();
        let active = RegionSet::from([
            RegionName::AnywhereOverworld,
            RegionName::VolrundsLand,
            RegionName::Summerton,
        ]);
        let mut rng = SequenceRandom::new(vec![0]);
        let selection = MusicSelector::new()
            .select(&catalog, &active, None, &mut rng)
            .unwrap();
        assert_eq!(catalog.get(selection.song_index).unwrap().name, "Glock & Piano");
    }

    #[test]
    fn test_playing_song_never_picked_first() {
        let catalog = SongCatalog::builtin();
        let active = RegionSet::from([RegionName::AnywhereOverworld]);
        let current = "songs/early_dawn.mp3";

        for pick in 0..10 {
            let mut rng = SequenceRandom::new(vec![pick]);
            let selection = MusicSelector::new()
                .select(&catalog, &active, Some(current), &mut rng)
                .unwrap();
            assert_ne!(catalog.get(selection.song_index).unwrap().url, current);
            assert_eq!(selection.attempts, 1);
        }
    }

    #[test]
    fn test_unranked_only_when_no_rank_available() {
        let catalog = SongCatalog::builtin();
        let mut rng = SequenceRandom::new(vec![0]);
        let selection = MusicSelector::new()
            .select(
                &catalog,
                &RegionSet::from([RegionName::AnywhereUnderworld]),
                None,
                &mut rng,
            )
            .unwrap();
        assert_eq!(selection.priority, Priority::Unranked);

        let selection = MusicSelector::new()
            .select(
                &catalog,
                &RegionSet::from([RegionName::AnywhereUnderworld, RegionName::Undercroft]),
                None,
                &mut rng,
            )
            .unwrap();
        assert_eq!(catalog.get(selection.song_index).unwrap().name, "Barbarian");
    }
}

/// Test music through the session
mod music_session_tests {
    use super::*;

    #[test]
    fn test_emperor_in_hedgecastle() {
        let (mut session, audio) = session(overworld_host(HEDGECASTLE));
        session.start();
        assert_eq!(session.now_playing().unwrap().name, "Emperor");
        assert_eq!(created(&audio), vec!["songs/emperor.mp3".to_string()]);
    }

    #[test]
    fn test_region_check_is_idempotent() {
        let (mut session, audio) = session(overworld_host(HEDGECASTLE));
        let t0 = Instant::now();
        session.start();
        let before = audio.commands();

        let first = session.update(t0);
        let second = session.update(t0 + REGION_POLL_INTERVAL);
        let third = session.update(t0 + REGION_POLL_INTERVAL * 2);

        assert_eq!(first.region_check, Some(RegionCheck::FirstObservation));
        assert_eq!(second.region_check, Some(RegionCheck::Unmoved));
        assert_eq!(third.region_check, Some(RegionCheck::Unmoved));
        assert_eq!(audio.commands(), before);
        assert_eq!(session.now_playing().unwrap().name, "Emperor");
    }

    #[test]
    fn test_entering_town_switches_song() {
        let (mut session, audio) = session(overworld_host(WILDERNESS));
        let t0 = Instant::now();
        session.start();
        assert_ne!(session.now_playing().unwrap().name, "Emperor");
        session.update(t0);

        session.host_mut().position = Some(HEDGECASTLE);
        let report = session.update(t0 + REGION_POLL_INTERVAL);

        assert_eq!(report.region_check, Some(RegionCheck::Reselect));
        assert_eq!(session.now_playing().unwrap().name, "Emperor");
        assert_eq!(audio.playing_urls(), vec!["songs/emperor.mp3".to_string()]);
    }

    #[test]
    fn test_moving_within_town_keeps_song() {
        let (mut session, audio) = session(overworld_host(HEDGECASTLE));
        let t0 = Instant::now();
        session.start();
        session.update(t0);

        session.host_mut().position = Some(Vector3::new(-300.0, 0.0, 50.0));
        let report = session.update(t0 + REGION_POLL_INTERVAL);

        assert_eq!(report.region_check, Some(RegionCheck::SameRegions));
        assert_eq!(created(&audio).len(), 1);
    }

    #[test]
    fn test_region_check_throttled() {
        let (mut session, _audio) = session(overworld_host(HEDGECASTLE));
        let t0 = Instant::now();
        session.start();
        session.update(t0);

        session.host_mut().position = Some(WILDERNESS);
        let report = session.update(t0 + Duration::from_secs(2));
        assert_eq!(report.region_check, Some(RegionCheck::Throttled));
        assert_eq!(session.now_playing().unwrap().name, "Emperor");
    }

    #[test]
    fn test_next_song_after_gap() {
        let (mut session, audio) = session(overworld_host(HEDGECASTLE));
        let t0 = Instant::now();
        session.start();

        audio.finish("songs/emperor.mp3");
        let report = session.update(t0);
        assert!(report.selection.is_none());

        let report = session.update(t0 + Duration::from_secs(3));
        assert!(report.selection.is_none());

        let report = session.update(t0 + TRACK_GAP);
        assert!(report.selection.is_some());
        assert_eq!(created(&audio).len(), 2);
        // Emperor just played, so an overworld song follows
        assert_ne!(session.now_playing().unwrap().name, "Emperor");
    }

    #[test]
    fn test_gap_honours_autoplay_toggled_off() {
        let (mut session, audio) = session(overworld_host(HEDGECASTLE));
        let t0 = Instant::now();
        session.start();

        audio.finish("songs/emperor.mp3");
        session.update(t0);
        session.set_autoplay(false);
        let report = session.update(t0 + TRACK_GAP);

        assert!(report.selection.is_none());
        assert_eq!(created(&audio).len(), 1);
    }

    #[test]
    fn test_gap_without_player_waits_for_position() {
        let (mut session, audio) = session(overworld_host(HEDGECASTLE));
        let t0 = Instant::now();
        session.start();

        audio.finish("songs/emperor.mp3");
        session.update(t0);
        session.host_mut().position = None;
        let report = session.update(t0 + TRACK_GAP);
        assert!(report.selection.is_none());
        assert_eq!(created(&audio).len(), 1);

        session.host_mut().position = Some(HEDGECASTLE);
        let report = session.update(t0 + TRACK_GAP + ACTIVITY_POLL_INTERVAL);
        assert!(report.selection.is_some());
        assert_eq!(created(&audio).len(), 2);
        assert_ne!(session.now_playing().unwrap().name, "Emperor");
    }

    #[test]
    fn test_stop_cancels_pending_song() {
        let (mut session, audio) = session(overworld_host(HEDGECASTLE));
        let t0 = Instant::now();
        session.start();

        audio.finish("songs/emperor.mp3");
        session.update(t0);
        session.stop();
        let after_stop = audio.commands().len();

        let report = session.update(t0 + TRACK_GAP);
        assert_eq!(report, Default::default());
        assert_eq!(audio.commands().len(), after_stop);
        assert!(audio.playing_urls().is_empty());
    }

    #[test]
    fn test_deferred_first_song_until_player_exists() {
        let (mut session, audio) = session(MockHost::new());
        let t0 = Instant::now();
        session.start();
        assert!(session.update(t0).selection.is_none());
        assert!(audio.commands().is_empty());

        session.host_mut().position = Some(HEDGECASTLE);
        session.host_mut().map_level = Some(1);
        let report = session.update(t0 + ACTIVITY_POLL_INTERVAL);
        assert!(report.selection.is_some());
        assert_eq!(session.now_playing().unwrap().name, "Emperor");
    }

    #[test]
    fn test_title_layer_plays_title_song() {
        let host = MockHost::new().with_position(Vector3::new(0.0, 0.0, 0.0));
        let (mut session, _audio) = session(host);
        session.start();
        let title_songs = ["Glock & Piano", "Middlefern", "Sound Main"];
        assert!(title_songs.contains(&session.now_playing().unwrap().name.as_str()));
    }

    #[test]
    fn test_volume_and_repeat_carry_to_next_track() {
        let (mut session, audio) = session(overworld_host(HEDGECASTLE));
        session.start();
        session.set_volume(0.8);
        session.set_repeat(true);
        audio.take_commands();

        session.play_song_by_name("barony").unwrap();
        let commands = audio.commands();
        assert!(commands.contains(&AudioCommand::Create {
            url: "songs/barony.mp3".to_string(),
            volume: Some(0.8)
        }));
        assert!(commands.contains(&AudioCommand::SetLooping {
            url: "songs/barony.mp3".to_string(),
            looping: true
        }));
    }

    #[test]
    fn test_play_by_region_override() {
        let (mut session, _audio) = session(overworld_host(HEDGECASTLE));
        session.start();
        let selection = session
            .play_by_region(RegionName::DriftwoodIsle, RegionLayer::Overworld)
            .unwrap();
        assert_eq!(selection.region, RegionName::DriftwoodIsle);
        assert_eq!(session.now_playing().unwrap().name, "Fishin'");
    }

    #[test]
    fn test_logout_and_login() {
        let (mut session, _audio) = session(overworld_host(HEDGECASTLE));
        session.start();
        session.on_logged_out();
        assert_eq!(session.now_playing().unwrap().name, "Sound Main");
        assert!(!session.autoplay());

        session.on_logged_in();
        assert!(session.autoplay());
        assert_eq!(session.now_playing().unwrap().name, "Emperor");
    }
}

/// Test activity inference and sound effects through the session
mod activity_session_tests {
    use super::*;

    fn busy_host(activity: RawActivity, inventory: InventorySnapshot) -> MockHost {
        overworld_host(HEDGECASTLE)
            .with_activity(activity as i32)
            .with_inventory(inventory)
    }

    fn quiet_settings() -> Settings {
        Settings {
            autoplay: false,
            ..Settings::default()
        }
    }

    #[test]
    fn test_full_inventory_once() {
        let host = busy_host(RawActivity::Idle, InventorySnapshot::filled(CAPACITY, 27, 1));
        let (mut session, audio) = session_with(host, quiet_settings(), vec![0]);
        let t0 = Instant::now();
        session.start();
        session.update(t0);

        session.host_mut().inventory = Some(InventorySnapshot::filled(CAPACITY, 28, 1));
        let report = session.update(t0 + ACTIVITY_POLL_INTERVAL);
        let full = report
            .events
            .iter()
            .filter(|e| **e == PlayerEvent::Derived(DerivedEvent::FullInventory))
            .count();
        assert_eq!(full, 1);
        assert_eq!(report.sfx, vec![SfxType::FullInventory]);
        assert_eq!(created(&audio), vec!["sfx/full_inventory.mp3".to_string()]);

        session.host_mut().inventory = Some(InventorySnapshot::filled(CAPACITY, 28, 2));
        let report = session.update(t0 + ACTIVITY_POLL_INTERVAL * 2);
        assert!(!report.sfx.contains(&SfxType::FullInventory));
    }

    #[test]
    fn test_cooking_success() {
        let raw = InventorySnapshot::new(vec![ItemSlot::item(1, 1), ItemSlot::empty()]);
        let cooked = InventorySnapshot::new(vec![ItemSlot::item(2, 1), ItemSlot::empty()]);
        let (mut session, audio) =
            session_with(busy_host(RawActivity::Cooking, raw), quiet_settings(), vec![0]);
        let t0 = Instant::now();
        session.start();

        let report = session.update(t0);
        assert!(
            report
                .events
                .contains(&PlayerEvent::Derived(DerivedEvent::CookingInProgress))
        );

        session.host_mut().activity = Some(RawActivity::Idle as i32);
        session.host_mut().inventory = Some(cooked);
        let report = session.update(t0 + ACTIVITY_POLL_INTERVAL);
        assert!(
            report
                .events
                .contains(&PlayerEvent::Derived(DerivedEvent::CookingSuccess))
        );
        assert!(
            !report
                .events
                .contains(&PlayerEvent::Derived(DerivedEvent::CookingFailure))
        );
        assert_eq!(created(&audio), vec!["sfx/cook1.mp3".to_string()]);
    }

    #[test]
    fn test_cooking_failure() {
        let raw = InventorySnapshot::new(vec![ItemSlot::item(1, 1), ItemSlot::empty()]);
        let burnt =
            InventorySnapshot::new(vec![ItemSlot::item(BURNT_FOOD_ID, 1), ItemSlot::empty()]);
        let (mut session, audio) =
            session_with(busy_host(RawActivity::Cooking, raw), quiet_settings(), vec![0]);
        let t0 = Instant::now();
        session.start();
        session.update(t0);

        session.host_mut().inventory = Some(burnt);
        let report = session.update(t0 + ACTIVITY_POLL_INTERVAL);
        assert_eq!(report.sfx, vec![SfxType::CookingFailure]);
        assert_eq!(created(&audio), vec!["sfx/burn.mp3".to_string()]);
    }

    #[test]
    fn test_crime_success_exactly_once() {
        let inventory = InventorySnapshot::filled(CAPACITY, 3, 1);
        let (mut session, _audio) = session_with(
            busy_host(RawActivity::Pickpocketing, inventory),
            quiet_settings(),
            vec![0],
        );
        let t0 = Instant::now();
        session.start();

        let crime = PlayerEvent::Derived(DerivedEvent::CrimeSuccess);
        let mut counts = Vec::new();
        for (tick, activity) in [
            RawActivity::Pickpocketing,
            RawActivity::Pickpocketing,
            RawActivity::Idle,
        ]
        .into_iter()
        .enumerate()
        {
            session.host_mut().activity = Some(activity as i32);
            let report = session.update(t0 + ACTIVITY_POLL_INTERVAL * tick as u32);
            counts.push(report.events.iter().filter(|e| **e == crime).count());
        }
        assert_eq!(counts, vec![0, 0, 1]);
    }

    #[test]
    fn test_mining_then_depleted() {
        let inventory = InventorySnapshot::filled(CAPACITY, 3, 1);
        let (mut session, _audio) = session_with(
            busy_host(RawActivity::Mining, inventory),
            quiet_settings(),
            vec![0],
        );
        let t0 = Instant::now();
        session.start();

        let report = session.update(t0);
        assert_eq!(report.sfx, vec![SfxType::PickaxeHit]);

        session.host_mut().activity = Some(RawActivity::Idle as i32);
        let report = session.update(t0 + ACTIVITY_POLL_INTERVAL);
        assert_eq!(report.sfx, vec![SfxType::OreDepleted]);
    }

    #[test]
    fn test_activity_throttled() {
        let inventory = InventorySnapshot::filled(CAPACITY, 3, 1);
        let (mut session, _audio) = session_with(
            busy_host(RawActivity::Mining, inventory),
            quiet_settings(),
            vec![0],
        );
        let t0 = Instant::now();
        session.start();

        assert!(!session.update(t0).events.is_empty());
        assert!(session.update(t0 + Duration::from_millis(500)).events.is_empty());
    }

    #[test]
    fn test_stop_halts_sfx() {
        let inventory = InventorySnapshot::filled(CAPACITY, 3, 1);
        let (mut session, audio) = session_with(
            busy_host(RawActivity::Smithing, inventory),
            quiet_settings(),
            vec![0],
        );
        let t0 = Instant::now();
        session.start();
        session.update(t0);
        assert_eq!(audio.playing_urls(), vec!["sfx/smith1.mp3".to_string()]);

        session.stop();
        assert!(audio.playing_urls().is_empty());
        assert!(
            session
                .update(t0 + ACTIVITY_POLL_INTERVAL)
                .events
                .is_empty()
        );
    }
}
