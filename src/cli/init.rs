//! Settings file generation.

use anyhow::{Context, Result, bail};
use decor_settings::config::Settings;
use decor_settings::log;
use std::{fs, path::Path};

/// Write the commented default settings file.
pub fn write_settings(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "settings file '{}' already exists (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }

    Settings::default()
        .save(path)
        .with_context(|| format!("Failed to write settings file '{}'", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}
