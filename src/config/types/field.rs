//! Dotted settings field paths (`optout.without_walls`).

use owo_colors::OwoColorize;
use std::fmt;

/// A settings field, addressed by section and TOML key.
///
/// `#[derive(Config)]` emits one per field, e.g.
/// `OptOutSettings::FIELDS.without_walls`. Displayed as a highlighted
/// dotted path in reload and restart messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath {
    section: &'static str,
    key: &'static str,
}

impl FieldPath {
    #[inline]
    pub const fn new(section: &'static str, key: &'static str) -> Self {
        Self { section, key }
    }

    /// Section name, without brackets.
    #[inline]
    pub const fn section(&self) -> &'static str {
        self.section
    }

    /// Key inside the section; also the serde field name.
    #[inline]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Whether `dotted` (`section.key`) names this field.
    pub fn matches(&self, dotted: &str) -> bool {
        dotted
            .split_once('.')
            .is_some_and(|(section, key)| section == self.section && key == self.key)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dotted = format!("`{}.{}`", self.section, self.key);
        write!(f, "{}", dotted.bright_blue())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OptOutSettings, TweakSettings};

    #[test]
    fn test_generated_paths_split_section_and_key() {
        let path = OptOutSettings::FIELDS.without_walls;
        assert_eq!(path.section(), "optout");
        assert_eq!(path.key(), "without_walls");

        let path = TweakSettings::FIELDS.furnace_smelts_nuggets;
        assert_eq!(path.section(), "tweaks");
        assert_eq!(path.key(), "furnace_smelts_nuggets");
    }

    #[test]
    fn test_matches_dotted_path() {
        let path = OptOutSettings::FIELDS.without_ladders;
        assert!(path.matches("optout.without_ladders"));
        assert!(!path.matches("zmisc.without_ladders"));
        assert!(!path.matches("optout"));
        assert!(!path.matches("without_ladders"));
    }

    #[test]
    fn test_display_contains_dotted_path() {
        let shown = OptOutSettings::FIELDS.without_stairs.to_string();
        assert!(shown.contains("optout.without_stairs"));
    }
}
