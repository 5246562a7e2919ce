//! Block opt-out rules.
//!
//! Each rule pairs one `[optout]` flag with a name or kind test. Rules are
//! independent: a block is opted out as soon as any enabled rule matches.
//! Name tests are plain, case-sensitive prefix/suffix/equality checks on
//! the registry path.
//!
//! | Rule                   | Flag                             | Test                         |
//! |------------------------|----------------------------------|------------------------------|
//! | clinker                | `without_clinker_bricks`         | prefix `clinker_brick_`      |
//! | slag                   | `without_slag_bricks`            | prefix `slag_brick_`         |
//! | rebar                  | `without_rebar_concrete`         | prefix `rebar_concrete`      |
//! | concrete wall          | `without_ie_concrete_wall`       | prefix `concrete_wall`       |
//! | panzer glass           | `without_panzer_glass`           | prefix `panzerglass_`        |
//! | crafting table         | `without_crafting_table`         | kind `CraftingTable`         |
//! | lab furnace            | `without_lab_furnace`            | kind `LabFurnace`            |
//! | window                 | `without_windows`                | suffix `_window`             |
//! | light                  | `without_light_sources`          | suffix `_light`              |
//! | ladder                 | `without_ladders`                | kind `Ladder`                |
//! | wall                   | `without_walls`                  | suffix `_wall`               |
//! | stairs                 | `without_stairs`                 | suffix `_stairs`             |
//! | treated-wood furniture | `without_treated_wood_furniture` | kind `Chair` or listed name  |
//!
//! `treated_wood_window` is caught both by the window suffix rule and by
//! the furniture list. Either flag alone removes it.

use crate::block::{BlockDescriptor, BlockKind};
use crate::config::{OptOutSettings, Settings};

/// Names removed together with the treated wood chairs.
pub const TREATED_WOOD_FURNITURE: &[&str] = &[
    "treated_wood_pole",
    "treated_wood_table",
    "treated_wood_stool",
    "treated_wood_windowsill",
    "treated_wood_window",
];

#[derive(Debug, Clone, Copy)]
enum Matcher {
    Prefix(&'static str),
    Suffix(&'static str),
    Kind(BlockKind),
    KindOrName(BlockKind, &'static [&'static str]),
}

impl Matcher {
    fn matches(self, path: &str, kind: BlockKind) -> bool {
        match self {
            Self::Prefix(prefix) => path.starts_with(prefix),
            Self::Suffix(suffix) => path.ends_with(suffix),
            Self::Kind(k) => kind == k,
            Self::KindOrName(k, names) => kind == k || names.contains(&path),
        }
    }
}

struct OptOutRule {
    name: &'static str,
    enabled: fn(&OptOutSettings) -> bool,
    matcher: Matcher,
}

impl OptOutRule {
    #[inline]
    fn applies(&self, settings: &OptOutSettings, path: &str, kind: BlockKind) -> bool {
        (self.enabled)(settings) && self.matcher.matches(path, kind)
    }
}

const RULES: &[OptOutRule] = &[
    OptOutRule {
        name: "clinker",
        enabled: |s| s.without_clinker_bricks,
        matcher: Matcher::Prefix("clinker_brick_"),
    },
    OptOutRule {
        name: "slag",
        enabled: |s| s.without_slag_bricks,
        matcher: Matcher::Prefix("slag_brick_"),
    },
    OptOutRule {
        name: "rebar",
        enabled: |s| s.without_rebar_concrete,
        matcher: Matcher::Prefix("rebar_concrete"),
    },
    OptOutRule {
        name: "concrete wall",
        enabled: |s| s.without_ie_concrete_wall,
        matcher: Matcher::Prefix("concrete_wall"),
    },
    OptOutRule {
        name: "panzer glass",
        enabled: |s| s.without_panzer_glass,
        matcher: Matcher::Prefix("panzerglass_"),
    },
    OptOutRule {
        name: "crafting table",
        enabled: |s| s.without_crafting_table,
        matcher: Matcher::Kind(BlockKind::CraftingTable),
    },
    OptOutRule {
        name: "lab furnace",
        enabled: |s| s.without_lab_furnace,
        matcher: Matcher::Kind(BlockKind::LabFurnace),
    },
    OptOutRule {
        name: "window",
        enabled: |s| s.without_windows,
        matcher: Matcher::Suffix("_window"),
    },
    OptOutRule {
        name: "light",
        enabled: |s| s.without_light_sources,
        matcher: Matcher::Suffix("_light"),
    },
    OptOutRule {
        name: "ladder",
        enabled: |s| s.without_ladders,
        matcher: Matcher::Kind(BlockKind::Ladder),
    },
    OptOutRule {
        name: "wall",
        enabled: |s| s.without_walls,
        matcher: Matcher::Suffix("_wall"),
    },
    OptOutRule {
        name: "stairs",
        enabled: |s| s.without_stairs,
        matcher: Matcher::Suffix("_stairs"),
    },
    OptOutRule {
        name: "treated-wood furniture",
        enabled: |s| s.without_treated_wood_furniture,
        matcher: Matcher::KindOrName(BlockKind::Chair, TREATED_WOOD_FURNITURE),
    },
];

impl OptOutSettings {
    /// Whether `block` should be left out of registration.
    ///
    /// A missing descriptor or registry name counts as opted out.
    pub fn is_opted_out(&self, block: Option<&BlockDescriptor>) -> bool {
        let Some(block) = block else {
            return true;
        };
        let Some(path) = block.registry_path() else {
            return true;
        };
        RULES
            .iter()
            .any(|rule| rule.applies(self, path, block.kind()))
    }

    /// Names of all enabled rules matching `block`, in rule order.
    pub fn matching_rules(&self, block: &BlockDescriptor) -> Vec<&'static str> {
        let Some(path) = block.registry_path() else {
            return Vec::new();
        };
        RULES
            .iter()
            .filter(|rule| rule.applies(self, path, block.kind()))
            .map(|rule| rule.name)
            .collect()
    }
}

// ============================================================================
// registration
// ============================================================================

/// What the host registration routine should do with a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationDecision {
    /// Register normally.
    Register,
    /// Opted out, but still registered so existing worlds keep their blocks.
    /// Hidden from creative tabs and left without recipes.
    RegisterHidden,
    /// Do not register at all.
    Skip,
}

impl RegistrationDecision {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::RegisterHidden => "register hidden",
            Self::Skip => "skip",
        }
    }
}

impl Settings {
    /// See [`OptOutSettings::is_opted_out`].
    #[inline]
    pub fn is_opted_out(&self, block: Option<&BlockDescriptor>) -> bool {
        self.optout.is_opted_out(block)
    }

    #[inline]
    pub fn with_experimental(&self) -> bool {
        self.zmisc.with_experimental
    }

    #[inline]
    pub fn is_without_recipes(&self) -> bool {
        self.zmisc.without_recipes
    }

    #[inline]
    pub fn is_without_optout_registration(&self) -> bool {
        self.zmisc.without_optout_registration
    }

    /// Combine the opt-out rules with the `[zmisc]` switches.
    ///
    /// A missing descriptor or registry name is never registered.
    pub fn registration_decision(&self, block: Option<&BlockDescriptor>) -> RegistrationDecision {
        let Some(block) = block.filter(|b| b.registry_path().is_some()) else {
            return RegistrationDecision::Skip;
        };
        if block.is_experimental() && !self.with_experimental() {
            return RegistrationDecision::Skip;
        }
        if !self.is_opted_out(Some(block)) {
            RegistrationDecision::Register
        } else if self.is_without_optout_registration() {
            RegistrationDecision::Skip
        } else {
            RegistrationDecision::RegisterHidden
        }
    }
}
