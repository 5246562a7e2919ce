use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use super::debouncer::{DEBOUNCE_MS, Debouncer};
use super::{SettingsWatcher, watch_dir};
use crate::config::SETTINGS_FILE;
use crate::recipe::{FurnaceOverride, OverrideRegistry};
use crate::store::{HostEvent, ReloadStatus, SettingsStore};

fn make_event(paths: Vec<&str>, kind: notify::EventKind) -> notify::Event {
    notify::Event {
        kind,
        paths: paths.into_iter().map(PathBuf::from).collect(),
        attrs: Default::default(),
    }
}

fn modify_kind() -> notify::EventKind {
    notify::EventKind::Modify(notify::event::ModifyKind::Data(
        notify::event::DataChange::Any,
    ))
}

fn metadata_kind() -> notify::EventKind {
    notify::EventKind::Modify(notify::event::ModifyKind::Metadata(
        notify::event::MetadataKind::Any,
    ))
}

fn create_kind() -> notify::EventKind {
    notify::EventKind::Create(notify::event::CreateKind::File)
}

const FILE: &str = "engineersdecor.toml";

#[test]
fn test_relevant_event_marks_pending() {
    let mut debouncer = Debouncer::new();
    let event = make_event(vec!["/game/config/engineersdecor.toml"], modify_kind());

    assert!(debouncer.add_event(&event, OsStr::new(FILE)));
    assert!(debouncer.pending);
}

#[test]
fn test_other_files_ignored() {
    let mut debouncer = Debouncer::new();
    let event = make_event(
        vec!["/game/config/forge.toml", "/game/config/.engineersdecor.toml.swp"],
        modify_kind(),
    );

    assert!(!debouncer.add_event(&event, OsStr::new(FILE)));
    assert!(!debouncer.pending);
}

#[test]
fn test_metadata_changes_ignored() {
    let mut debouncer = Debouncer::new();
    let event = make_event(vec!["/game/config/engineersdecor.toml"], metadata_kind());

    assert!(!debouncer.add_event(&event, OsStr::new(FILE)));
}

#[test]
fn test_rename_into_place_counts() {
    let mut debouncer = Debouncer::new();
    let event = make_event(vec!["/game/config/engineersdecor.toml"], create_kind());
    assert!(debouncer.add_event(&event, OsStr::new(FILE)));
}

#[test]
fn test_not_ready_within_window() {
    let mut debouncer = Debouncer::new();
    let event = make_event(vec!["engineersdecor.toml"], modify_kind());
    debouncer.add_event(&event, OsStr::new(FILE));

    assert!(!debouncer.take_if_ready());
    assert!(debouncer.sleep_duration() <= Duration::from_millis(DEBOUNCE_MS));
}

#[test]
fn test_burst_coalesces_into_one_change() {
    let mut debouncer = Debouncer::new();
    let event = make_event(vec!["engineersdecor.toml"], modify_kind());
    for _ in 0..5 {
        debouncer.add_event(&event, OsStr::new(FILE));
    }

    // pretend the window has passed
    debouncer.last_event = Some(Instant::now() - Duration::from_millis(DEBOUNCE_MS + 10));

    assert!(debouncer.take_if_ready());
    assert!(!debouncer.take_if_ready());
    assert!(!debouncer.pending);
}

#[test]
fn test_idle_sleeps_long() {
    let debouncer = Debouncer::new();
    assert!(!debouncer.is_ready());
    assert!(debouncer.sleep_duration() > Duration::from_secs(60));
}

#[test]
fn test_watch_dir() {
    assert_eq!(watch_dir(Path::new("engineersdecor.toml")), PathBuf::from("."));
    assert_eq!(
        watch_dir(Path::new("config/engineersdecor.toml")),
        PathBuf::from("config")
    );
}

#[test]
fn test_file_write_reaches_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(SETTINGS_FILE);
    fs::write(&path, "").unwrap();

    let registry = Arc::new(OverrideRegistry::new());
    let store = SettingsStore::new(&path, registry.clone());
    store.load();

    let mut watcher = SettingsWatcher::new(&path).unwrap();
    let (tx, rx) = crossbeam::channel::bounded(1);
    let waiter = thread::spawn(move || {
        let _ = tx.send(watcher.wait_for_change());
    });

    fs::write(&path, "[tweaks]\nfurnace_smelts_nuggets = true\n").unwrap();

    let changed = rx
        .recv_timeout(Duration::from_millis(DEBOUNCE_MS) * 20)
        .expect("no debounced change after writing the settings file");
    assert!(changed);
    waiter.join().unwrap();

    let status = store.handle(&HostEvent::settings_changed(store.module_id()));
    assert!(matches!(status, Some(ReloadStatus::Reloaded { .. })));
    assert!(store.settings().tweaks.furnace_smelts_nuggets);
    assert_eq!(registry.installed(), Some(FurnaceOverride::SmeltOresToNuggets));
}
