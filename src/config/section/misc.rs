//! `[zmisc]` section configuration.
//!
//! Beta testing and trouble shooting switches.

use macros::Config;
use serde::{Deserialize, Serialize};

/// Settings for beta testing and trouble shooting. Some of the settings
/// may be moved to other categories after testing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "zmisc", label = "Miscellaneous")]
pub struct TestingSettings {
    /// Enables experimental features. Use at own risk.
    #[config(label = "With experimental", restart)]
    pub with_experimental: bool,

    /// Disable all internal recipes, allowing to use alternative pack recipes.
    #[config(label = "Without recipes", restart)]
    pub without_recipes: bool,

    /// Disable registration of opt'ed out blocks. That is normally not a good idea. Your choice.
    #[config(label = "Without opt-out registration", restart)]
    pub without_optout_registration: bool,
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_settings;

    #[test]
    fn test_zmisc_config() {
        let settings = test_parse_settings(
            "[zmisc]\nwith_experimental = true\nwithout_optout_registration = true",
        );

        assert!(settings.zmisc.with_experimental);
        assert!(!settings.zmisc.without_recipes);
        assert!(settings.zmisc.without_optout_registration);
    }
}
