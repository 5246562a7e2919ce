//! Settings file watcher.
//!
//! Turns edits of the settings file into [`HostEvent::SettingsChanged`]
//! notifications for a [`SettingsStore`].
//!
//! Architecture:
//! ```text
//! notify → crossbeam channel → Debouncer (pure timing) → store.handle()
//! ```
//!
//! The parent directory is watched rather than the file itself, so editors
//! that save by writing a temp file and renaming it are still seen.

mod debouncer;

#[cfg(test)]
mod tests;

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crossbeam::channel::{self, Receiver, RecvTimeoutError};
use notify::{RecommendedWatcher, RecursiveMode, Watcher};

use crate::store::{HostEvent, ReloadStatus, SettingsStore};
use debouncer::Debouncer;

/// Watches one settings file.
pub struct SettingsWatcher {
    /// Channel to receive notify events
    events: Receiver<notify::Result<notify::Event>>,
    /// Watcher handle (must be kept alive)
    _watcher: RecommendedWatcher,
    /// File name events are filtered on
    file_name: OsString,
    debouncer: Debouncer,
}

impl SettingsWatcher {
    /// Start watching `path`. Events are buffered from this point on.
    pub fn new(path: &Path) -> notify::Result<Self> {
        let file_name = path
            .file_name()
            .map(OsString::from)
            .ok_or_else(|| notify::Error::generic("settings path has no file name"))?;
        let dir = watch_dir(path);

        let (tx, rx) = channel::unbounded();
        let mut watcher = notify::recommended_watcher(move |res| {
            let _ = tx.send(res);
        })?;
        watcher.watch(&dir, RecursiveMode::NonRecursive)?;

        crate::debug!("watch"; "watching {}", dir.display());

        Ok(Self {
            events: rx,
            _watcher: watcher,
            file_name,
            debouncer: Debouncer::new(),
        })
    }

    /// Block until a debounced change arrives.
    ///
    /// Returns `false` once the watcher has shut down.
    pub fn wait_for_change(&mut self) -> bool {
        loop {
            match self.events.recv_timeout(self.debouncer.sleep_duration()) {
                Ok(Ok(event)) => {
                    self.debouncer.add_event(&event, &self.file_name);
                }
                Ok(Err(err)) => crate::log!("watch"; "notify error: {}", err),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => return false,
            }

            if self.debouncer.take_if_ready() {
                return true;
            }
        }
    }

    /// Forward every change to `store` until the watcher shuts down.
    ///
    /// `on_reload` sees the status of each reload the store performed.
    pub fn run(mut self, store: &SettingsStore, mut on_reload: impl FnMut(&ReloadStatus)) {
        let event = HostEvent::settings_changed(store.module_id());
        while self.wait_for_change() {
            if let Some(status) = store.handle(&event) {
                on_reload(&status);
            }
        }
    }
}

/// Directory to watch for `path`; a bare file name means the cwd.
fn watch_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
