//! Block descriptors supplied by the host's registration code.
//!
//! The opt-out rules never see engine types. The host adapter maps each
//! candidate block to a [`BlockDescriptor`]: its registry name and a tag
//! from the closed [`BlockKind`] set.

use std::{fmt, str::FromStr};

/// Namespace used when a registry name has none (`stone` → `minecraft:stone`).
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// A `namespace:path` registry identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegistryName {
    namespace: String,
    path: String,
}

impl RegistryName {
    pub fn new(namespace: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            path: path.into(),
        }
    }

    /// Split `namespace:path`; a bare path gets [`DEFAULT_NAMESPACE`].
    pub fn parse(name: &str) -> Self {
        match name.split_once(':') {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::new(DEFAULT_NAMESPACE, name),
        }
    }

    #[inline]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The part the opt-out rules match against.
    #[inline]
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl FromStr for RegistryName {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for RegistryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

/// Block families the type-based opt-out rules distinguish.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum BlockKind {
    /// Anything without a dedicated rule.
    #[default]
    Standard,
    CraftingTable,
    LabFurnace,
    Ladder,
    Chair,
}

impl BlockKind {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::CraftingTable => "crafting table",
            Self::LabFurnace => "lab furnace",
            Self::Ladder => "ladder",
            Self::Chair => "chair",
        }
    }
}

/// A candidate block as seen by the opt-out predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockDescriptor {
    name: Option<RegistryName>,
    kind: BlockKind,
    experimental: bool,
}

impl BlockDescriptor {
    /// Descriptor for a named block of [`BlockKind::Standard`].
    pub fn new(name: &str) -> Self {
        Self {
            name: Some(RegistryName::parse(name)),
            kind: BlockKind::Standard,
            experimental: false,
        }
    }

    /// Descriptor whose registry name is not available (yet).
    pub fn unnamed(kind: BlockKind) -> Self {
        Self {
            name: None,
            kind,
            experimental: false,
        }
    }

    pub fn with_kind(mut self, kind: BlockKind) -> Self {
        self.kind = kind;
        self
    }

    /// Mark as only available with `zmisc.with_experimental`.
    pub fn with_experimental(mut self, experimental: bool) -> Self {
        self.experimental = experimental;
        self
    }

    pub fn name(&self) -> Option<&RegistryName> {
        self.name.as_ref()
    }

    /// Registry path, e.g. `clinker_brick_block`.
    pub fn registry_path(&self) -> Option<&str> {
        self.name.as_ref().map(RegistryName::path)
    }

    #[inline]
    pub const fn kind(&self) -> BlockKind {
        self.kind
    }

    #[inline]
    pub const fn is_experimental(&self) -> bool {
        self.experimental
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_name_parse() {
        let name = RegistryName::parse("engineersdecor:clinker_brick_block");
        assert_eq!(name.namespace(), "engineersdecor");
        assert_eq!(name.path(), "clinker_brick_block");
        assert_eq!(name.to_string(), "engineersdecor:clinker_brick_block");
    }

    #[test]
    fn test_registry_name_default_namespace() {
        let name: RegistryName = "treated_wood_pole".parse().unwrap();
        assert_eq!(name.namespace(), DEFAULT_NAMESPACE);
        assert_eq!(name.path(), "treated_wood_pole");
    }

    #[test]
    fn test_descriptor_builder() {
        let block = BlockDescriptor::new("engineersdecor:metal_rung_ladder")
            .with_kind(BlockKind::Ladder)
            .with_experimental(true);

        assert_eq!(block.registry_path(), Some("metal_rung_ladder"));
        assert_eq!(block.kind(), BlockKind::Ladder);
        assert!(block.is_experimental());
    }

    #[test]
    fn test_unnamed_descriptor() {
        let block = BlockDescriptor::unnamed(BlockKind::Chair);
        assert!(block.name().is_none());
        assert!(block.registry_path().is_none());
    }
}
