//! Watch mode: keep the furnace override in sync with the settings file.

use anyhow::{Context, Result};
use decor_settings::recipe::OverrideRegistry;
use decor_settings::store::{HostEvent, ReloadStatus, SettingsStore};
use decor_settings::watch::SettingsWatcher;
use decor_settings::log;

/// Load, apply once, then reload and reapply on every edit.
pub fn watch_settings(store: &SettingsStore, registry: &OverrideRegistry) -> Result<()> {
    // Start watching before the initial load so no edit is missed
    let watcher = SettingsWatcher::new(store.path())
        .with_context(|| format!("Failed to watch '{}'", store.path().display()))?;

    store.load();
    store.handle(&HostEvent::PostInit);
    report_override(registry);

    log!("watch"; "watching {} (Ctrl+C to stop)", store.path().display());
    watcher.run(store, |status| {
        if let ReloadStatus::Reloaded { restart_pending } = status
            && !restart_pending.is_empty()
        {
            log!("watch"; "{} field(s) need a restart", restart_pending.len());
        }
        report_override(registry);
    });

    Ok(())
}

fn report_override(registry: &OverrideRegistry) {
    match registry.installed() {
        Some(policy) => log!("apply"; "furnace override: {}", policy.label()),
        None => log!("apply"; "furnace override: none"),
    }
}
