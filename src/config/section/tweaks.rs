//! `[tweaks]` section configuration.
//!
//! Unlike the other sections these values are reapplied as soon as the
//! file changes.

use macros::Config;
use serde::{Deserialize, Serialize};

/// Tweaks and block behaviour adaptions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "tweaks", label = "Tweaks")]
pub struct TweakSettings {
    /// Smelts ores to nuggets that are normally smelted to ingots,
    /// if detectable in the Forge ore dict. Prefers IE recipe results.
    #[config(label = "Furnace: Nugget smelting")]
    pub furnace_smelts_nuggets: bool,
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_settings;

    #[test]
    fn test_tweaks_config() {
        let settings = test_parse_settings("[tweaks]\nfurnace_smelts_nuggets = true");
        assert!(settings.tweaks.furnace_smelts_nuggets);
    }

    #[test]
    fn test_tweaks_wrong_type_is_error() {
        let result: Result<crate::config::Settings, _> =
            toml::from_str("[tweaks]\nfurnace_smelts_nuggets = \"yes\"");
        assert!(result.is_err());
    }
}
