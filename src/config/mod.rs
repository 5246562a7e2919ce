//! Settings file management for `engineersdecor.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Section definitions
//! │   ├── optout     # [optout]
//! │   ├── misc       # [zmisc]
//! │   └── tweaks     # [tweaks]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError
//! │   ├── field      # FieldPath
//! │   └── schema     # FieldSchema, SectionSchema, Section
//! ├── writer.rs      # Commented TOML output
//! └── mod.rs         # Settings (this file)
//! ```
//!
//! # Sections
//!
//! | Section    | Purpose                                         |
//! |------------|-------------------------------------------------|
//! | `[optout]` | Feature opt-outs (restart required)             |
//! | `[zmisc]`  | Experimental / testing switches (restart required) |
//! | `[tweaks]` | Behaviour tweaks, reapplied on change           |

pub mod section;
pub mod types;
mod writer;

pub use section::{OptOutSettings, TestingSettings, TweakSettings};
pub use types::{ConfigError, FieldPath, FieldSchema, Section, SectionSchema, restart_pending};

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Default settings filename
pub const SETTINGS_FILE: &str = "engineersdecor.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root settings structure representing `engineersdecor.toml`.
///
/// Published as an immutable snapshot; see [`crate::store::SettingsStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Feature opt-outs
    #[serde(default)]
    pub optout: OptOutSettings,

    /// Testing and trouble shooting
    #[serde(default)]
    pub zmisc: TestingSettings,

    /// Behaviour tweaks
    #[serde(default)]
    pub tweaks: TweakSettings,
}

impl Settings {
    /// Schemas of all sections in file order.
    pub const SECTIONS: [SectionSchema; 3] = [
        OptOutSettings::SCHEMA,
        TestingSettings::SCHEMA,
        TweakSettings::SCHEMA,
    ];

    /// Parse settings from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(content)?;
        Ok(settings)
    }

    /// Load settings from a file, warning about unknown fields.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (settings, ignored) = Self::parse_with_ignored(&content)?;
        Self::warn_unknown_fields(&ignored, path);

        Ok(settings)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let settings = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((settings, ignored))
    }

    /// Log unknown fields. They are ignored, never fatal.
    pub fn warn_unknown_fields(fields: &[String], path: &Path) {
        if fields.is_empty() {
            return;
        }
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        crate::log!("warning"; "ignoring unknown fields in {}: {}", display_path, fields.join(", "));
    }

    /// Commented TOML document with default values.
    pub fn template() -> Result<String, ConfigError> {
        Self::default().render()
    }

    /// Commented TOML document with the current values.
    pub fn render(&self) -> Result<String, ConfigError> {
        let mut out = writer::document_header();
        out.push_str(&writer::render_section(&self.optout)?);
        out.push('\n');
        out.push_str(&writer::render_section(&self.zmisc)?);
        out.push('\n');
        out.push_str(&writer::render_section(&self.tweaks)?);
        Ok(out)
    }

    /// Write the rendered document to `path`.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = self.render()?;
        fs::write(path, content).map_err(|err| ConfigError::Write(path.to_path_buf(), err))
    }

    /// Restart-gated fields that differ between `self` and `next`.
    pub fn restart_pending(&self, next: &Self) -> Vec<FieldPath> {
        let mut pending = restart_pending(&self.optout, &next.optout);
        pending.extend(restart_pending(&self.zmisc, &next.zmisc));
        pending.extend(restart_pending(&self.tweaks, &next.tweaks));
        pending
    }

    /// Look up a field schema by dotted path (`optout.without_walls`).
    pub fn field_schema(path: &str) -> Option<&'static FieldSchema> {
        Self::SECTIONS
            .iter()
            .flat_map(|schema| schema.fields)
            .find(|field| field.path.matches(path))
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse settings from TOML.
/// Panics if there are unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_parse_settings(content: &str) -> Settings {
    let (parsed, ignored) = Settings::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test settings have unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result = Settings::from_str("[optout\nwithout_walls = true");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Settings::from_str("").unwrap(), Settings::default());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[optout]\nwithout_walls = true\nwithout_bridges = true\n[legacy]\nx = 1";
        let (settings, ignored) = Settings::parse_with_ignored(content).unwrap();

        assert!(settings.optout.without_walls);
        assert!(ignored.iter().any(|f| f.contains("without_bridges")));
        assert!(ignored.iter().any(|f| f.contains("legacy")));
    }

    #[test]
    fn test_template_parses_back_to_defaults() {
        let template = Settings::template().unwrap();
        let parsed = test_parse_settings(&template);
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);

        let mut settings = Settings::default();
        settings.optout.without_panzer_glass = true;
        settings.tweaks.furnace_smelts_nuggets = true;
        settings.save(&path).unwrap();

        let loaded = Settings::from_path(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Settings::from_path(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io(..))));
    }

    #[test]
    fn test_restart_pending_across_sections() {
        let old = Settings::default();
        let mut new = Settings::default();
        new.optout.without_lab_furnace = true;
        new.zmisc.without_recipes = true;
        new.tweaks.furnace_smelts_nuggets = true;

        let pending = old.restart_pending(&new);
        assert_eq!(
            pending,
            vec![
                OptOutSettings::FIELDS.without_lab_furnace,
                TestingSettings::FIELDS.without_recipes,
            ]
        );
    }

    #[test]
    fn test_field_schema_lookup() {
        let field = Settings::field_schema("tweaks.furnace_smelts_nuggets").unwrap();
        assert_eq!(field.label, "Furnace: Nugget smelting");
        assert!(!field.restart);

        assert!(Settings::field_schema("optout.unknown").is_none());
        assert!(Settings::field_schema("nosection").is_none());
    }
}
