//! Settings store with atomic reload support.
//!
//! Uses `arc-swap` for lock-free reads and atomic snapshot replacement:
//! every query loads one `Arc<Settings>` and evaluates against it, so a
//! reload can never be observed half-applied.
//!
//! Lifecycle:
//!
//! ```text
//! new() ──load()──► loaded ──HostEvent::PostInit──► apply()
//!                     │
//!                     └──HostEvent::SettingsChanged──► resync ──► apply()
//! ```

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use arc_swap::ArcSwap;
use parking_lot::Mutex;

use crate::block::BlockDescriptor;
use crate::config::{FieldPath, Settings};
use crate::optout::RegistrationDecision;
use crate::recipe::{FurnaceOverrides, apply_tweaks};
use crate::utils::hash;
use crate::{debug, log};

/// Module identifier change notifications are filtered by.
pub const MODULE_ID: &str = "engineersdecor";

/// Content hash recorded while the settings file does not exist.
const MISSING_HASH: u64 = 0;

/// Inbound notifications from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// Host finished initialization; install recipe overrides.
    PostInit,
    /// Settings of `module_id` were edited.
    SettingsChanged { module_id: String },
}

impl HostEvent {
    pub fn settings_changed(module_id: impl Into<String>) -> Self {
        Self::SettingsChanged {
            module_id: module_id.into(),
        }
    }
}

/// Where the snapshot published by [`SettingsStore::load`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Parsed from the settings file.
    File,
    /// No settings file; defaults.
    Missing,
    /// File unreadable or malformed; defaults.
    Invalid,
}

/// Result of [`SettingsStore::on_settings_changed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReloadStatus {
    /// File content identical to the last sync.
    Unchanged,
    /// New snapshot published. Lists restart-gated fields that changed.
    Reloaded { restart_pending: Vec<FieldPath> },
    /// File unreadable or malformed; previous snapshot kept.
    Rejected,
}

type Listener = Box<dyn Fn(&Settings) + Send + Sync>;

/// Owns the published settings and drives the recipe override.
pub struct SettingsStore {
    module_id: String,
    path: PathBuf,
    current: ArcSwap<Settings>,
    /// Hash of the file content the current snapshot was built from.
    hash: AtomicU64,
    overrides: Arc<dyn FurnaceOverrides>,
    listeners: Mutex<Vec<Listener>>,
    /// Serializes load / resync / apply.
    sync: Mutex<()>,
}

impl SettingsStore {
    /// Store with default settings; nothing is read until [`Self::load`].
    pub fn new(path: impl Into<PathBuf>, overrides: Arc<dyn FurnaceOverrides>) -> Self {
        Self {
            module_id: MODULE_ID.to_string(),
            path: path.into(),
            current: ArcSwap::from_pointee(Settings::default()),
            hash: AtomicU64::new(MISSING_HASH),
            overrides,
            listeners: Mutex::new(Vec::new()),
            sync: Mutex::new(()),
        }
    }

    /// Answer change notifications for `module_id` instead of [`MODULE_ID`].
    pub fn with_module_id(mut self, module_id: impl Into<String>) -> Self {
        self.module_id = module_id.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn module_id(&self) -> &str {
        &self.module_id
    }

    /// Current snapshot.
    #[inline]
    pub fn settings(&self) -> Arc<Settings> {
        self.current.load_full()
    }

    /// Register a callback run with every snapshot published by a reload.
    ///
    /// Callbacks run on the reloading thread and must not subscribe or
    /// reload themselves.
    pub fn subscribe(&self, listener: impl Fn(&Settings) + Send + Sync + 'static) {
        self.listeners.lock().push(Box::new(listener));
    }

    // ========================================================================
    // lifecycle
    // ========================================================================

    /// Read the settings file into a fresh snapshot.
    ///
    /// Never fails: a missing file yields defaults silently, an unreadable
    /// or malformed one yields defaults with a warning. The file is never
    /// created here.
    pub fn load(&self) -> LoadStatus {
        let _guard = self.sync.lock();

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("config"; "{} not found, using defaults", self.path.display());
                self.publish(Settings::default(), MISSING_HASH);
                return LoadStatus::Missing;
            }
            Err(err) => {
                log!("warning"; "cannot read {}: {}, using defaults", self.path.display(), err);
                self.publish(Settings::default(), MISSING_HASH);
                return LoadStatus::Invalid;
            }
        };

        let content_hash = hash::compute(&content);
        match Settings::parse_with_ignored(&content) {
            Ok((settings, ignored)) => {
                Settings::warn_unknown_fields(&ignored, &self.path);
                self.publish(settings, content_hash);
                LoadStatus::File
            }
            Err(err) => {
                log!("warning"; "{}: {}, using defaults", self.path.display(), err);
                self.publish(Settings::default(), content_hash);
                LoadStatus::Invalid
            }
        }
    }

    /// Re-read the settings file, publish it, then [`Self::apply`].
    ///
    /// The new snapshot is fully published before the override is
    /// reapplied, so `apply` always sees the new tweak values.
    pub fn on_settings_changed(&self) -> ReloadStatus {
        let _guard = self.sync.lock();
        let status = self.resync();
        self.apply_current();
        status
    }

    /// Reset the furnace override, then install it again if enabled.
    pub fn apply(&self) {
        let _guard = self.sync.lock();
        self.apply_current();
    }

    /// Dispatch a host notification.
    ///
    /// Returns the reload status for change notifications addressed to
    /// this store, `None` otherwise.
    pub fn handle(&self, event: &HostEvent) -> Option<ReloadStatus> {
        match event {
            HostEvent::PostInit => {
                self.apply();
                None
            }
            HostEvent::SettingsChanged { module_id } if *module_id == self.module_id => {
                Some(self.on_settings_changed())
            }
            HostEvent::SettingsChanged { module_id } => {
                debug!("config"; "ignoring change notification for `{}`", module_id);
                None
            }
        }
    }

    fn resync(&self) -> ReloadStatus {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => Some(content),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                log!("error"; "cannot read {}: {}, keeping current settings", self.path.display(), err);
                return ReloadStatus::Rejected;
            }
        };

        let new_hash = content.as_deref().map_or(MISSING_HASH, |c| hash::compute(c));
        if new_hash == self.hash.load(Ordering::Acquire) {
            debug!("config"; "{} unchanged", self.path.display());
            return ReloadStatus::Unchanged;
        }

        let next = match content {
            None => {
                log!("config"; "{} removed, using defaults", self.path.display());
                Settings::default()
            }
            Some(content) => match Settings::parse_with_ignored(&content) {
                Ok((settings, ignored)) => {
                    Settings::warn_unknown_fields(&ignored, &self.path);
                    settings
                }
                Err(err) => {
                    log!("error"; "{}: {}, keeping current settings", self.path.display(), err);
                    // Remember the broken content so repeated events stay quiet
                    self.hash.store(new_hash, Ordering::Release);
                    return ReloadStatus::Rejected;
                }
            },
        };

        let restart_pending = self.current.load().restart_pending(&next);
        for field in &restart_pending {
            log!("restart"; "{} changed, takes effect after restart", field);
        }

        self.publish(next, new_hash);
        log!("config"; "reloaded {}", self.path.display());

        let snapshot = self.current.load_full();
        for listener in self.listeners.lock().iter() {
            listener(&snapshot);
        }

        ReloadStatus::Reloaded { restart_pending }
    }

    fn publish(&self, settings: Settings, content_hash: u64) {
        self.current.store(Arc::new(settings));
        self.hash.store(content_hash, Ordering::Release);
    }

    fn apply_current(&self) {
        let settings = self.current.load();
        apply_tweaks(&settings.tweaks, self.overrides.as_ref());
        debug!(
            "apply";
            "furnace nugget smelting {}",
            if settings.tweaks.furnace_smelts_nuggets { "on" } else { "off" }
        );
    }

    // ========================================================================
    // queries
    // ========================================================================

    /// See [`crate::config::OptOutSettings::is_opted_out`].
    #[inline]
    pub fn is_opted_out(&self, block: Option<&BlockDescriptor>) -> bool {
        self.current.load().is_opted_out(block)
    }

    #[inline]
    pub fn registration_decision(&self, block: Option<&BlockDescriptor>) -> RegistrationDecision {
        self.current.load().registration_decision(block)
    }

    #[inline]
    pub fn is_without_recipes(&self) -> bool {
        self.current.load().is_without_recipes()
    }

    #[inline]
    pub fn is_without_optout_registration(&self) -> bool {
        self.current.load().is_without_optout_registration()
    }

    #[inline]
    pub fn with_experimental(&self) -> bool {
        self.current.load().with_experimental()
    }
}
