//! Furnace recipe overrides driven by `[tweaks]`.
//!
//! The recipe system itself belongs to the host. This module only knows
//! the two calls it needs ([`FurnaceOverrides`]) and keeps an in-memory
//! [`OverrideRegistry`] for the CLI and tests.

use parking_lot::Mutex;

use crate::config::TweakSettings;

/// Substitutions the settings can ask the furnace to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FurnaceOverride {
    /// Ores normally smelted to ingots yield nuggets instead.
    SmeltOresToNuggets,
}

impl FurnaceOverride {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::SmeltOresToNuggets => "smelt ores to nuggets",
        }
    }
}

/// Outbound recipe-override collaborator.
pub trait FurnaceOverrides: Send + Sync {
    /// Remove whatever override is installed. No-op if none.
    fn reset_furnace_override(&self);

    /// Install `policy`, replacing nothing (callers reset first).
    fn install_furnace_override(&self, policy: FurnaceOverride);
}

/// Reset, then install what `tweaks` asks for.
///
/// Calling it repeatedly with the same tweaks leaves the same state.
pub fn apply_tweaks(tweaks: &TweakSettings, overrides: &dyn FurnaceOverrides) {
    overrides.reset_furnace_override();
    if tweaks.furnace_smelts_nuggets {
        overrides.install_furnace_override(FurnaceOverride::SmeltOresToNuggets);
    }
}

#[derive(Debug, Default)]
struct OverrideState {
    installed: Option<FurnaceOverride>,
    resets: usize,
    installs: usize,
}

/// In-memory [`FurnaceOverrides`] that records the active override.
#[derive(Debug, Default)]
pub struct OverrideRegistry {
    state: Mutex<OverrideState>,
}

impl OverrideRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently installed override, if any.
    pub fn installed(&self) -> Option<FurnaceOverride> {
        self.state.lock().installed
    }

    pub fn resets(&self) -> usize {
        self.state.lock().resets
    }

    pub fn installs(&self) -> usize {
        self.state.lock().installs
    }
}

impl FurnaceOverrides for OverrideRegistry {
    fn reset_furnace_override(&self) {
        let mut state = self.state.lock();
        state.installed = None;
        state.resets += 1;
    }

    fn install_furnace_override(&self, policy: FurnaceOverride) {
        let mut state = self.state.lock();
        state.installed = Some(policy);
        state.installs += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tweaks(nuggets: bool) -> TweakSettings {
        TweakSettings {
            furnace_smelts_nuggets: nuggets,
        }
    }

    #[test]
    fn test_apply_installs_when_enabled() {
        let registry = OverrideRegistry::new();
        apply_tweaks(&tweaks(true), &registry);

        assert_eq!(registry.installed(), Some(FurnaceOverride::SmeltOresToNuggets));
        assert_eq!(registry.resets(), 1);
        assert_eq!(registry.installs(), 1);
    }

    #[test]
    fn test_apply_disabled_after_enabled_clears() {
        let registry = OverrideRegistry::new();
        apply_tweaks(&tweaks(true), &registry);
        apply_tweaks(&tweaks(false), &registry);

        assert_eq!(registry.installed(), None);
        assert_eq!(registry.resets(), 2);
    }

    #[test]
    fn test_apply_is_idempotent() {
        let once = OverrideRegistry::new();
        apply_tweaks(&tweaks(true), &once);

        let twice = OverrideRegistry::new();
        apply_tweaks(&tweaks(true), &twice);
        apply_tweaks(&tweaks(true), &twice);

        assert_eq!(once.installed(), twice.installed());
    }

    #[test]
    fn test_reset_without_override_is_noop() {
        let registry = OverrideRegistry::new();
        apply_tweaks(&tweaks(false), &registry);
        assert_eq!(registry.installed(), None);
        assert_eq!(registry.installs(), 0);
    }
}
