//! Print effective settings.

use anyhow::Result;
use decor_settings::store::{LoadStatus, SettingsStore};
use decor_settings::log;

/// Load the settings file and print it back with the values in effect.
pub fn show_settings(store: &SettingsStore) -> Result<()> {
    match store.load() {
        LoadStatus::File => {}
        LoadStatus::Missing => log!("config"; "{} not found, showing defaults", store.path().display()),
        LoadStatus::Invalid => log!("config"; "{} is invalid, showing defaults", store.path().display()),
    }

    print!("{}", store.settings().render()?);
    Ok(())
}
