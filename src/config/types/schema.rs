//! Section schema: the data `#[derive(Config)]` emits for each section.
//!
//! The loader and writer only ever look at this description, never at
//! the concrete section structs.

use serde::{Serialize, de::DeserializeOwned};

use super::FieldPath;

/// One persisted field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    /// Section and TOML key.
    pub path: FieldPath,
    /// Human-readable name shown next to the value.
    pub label: &'static str,
    /// Doc comment written above the value.
    pub comment: &'static str,
    /// Change only takes effect after the host restarts.
    pub restart: bool,
}

/// One `[section]` of the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSchema {
    pub name: &'static str,
    pub label: &'static str,
    pub comment: &'static str,
    pub fields: &'static [FieldSchema],
}

impl SectionSchema {
    /// Look up a field by its TOML key.
    pub fn field(&self, key: &str) -> Option<&'static FieldSchema> {
        self.fields.iter().find(|f| f.path.key() == key)
    }

    /// Whether any field in this section is restart-gated.
    pub fn has_restart_fields(&self) -> bool {
        self.fields.iter().any(|f| f.restart)
    }
}

/// A typed settings section with a static schema.
///
/// Implemented by `#[derive(Config)]`.
pub trait Section: Serialize + DeserializeOwned + Default {
    const SCHEMA: SectionSchema;
}

/// Restart-gated fields whose values differ between `old` and `new`.
///
/// Values are compared in their serialized TOML form, so the comparison
/// works for any section without requiring `PartialEq` on it.
pub fn restart_pending<S: Section>(old: &S, new: &S) -> Vec<FieldPath> {
    let (Ok(old), Ok(new)) = (toml::Value::try_from(old), toml::Value::try_from(new)) else {
        return Vec::new();
    };

    S::SCHEMA
        .fields
        .iter()
        .filter(|field| field.restart)
        .filter(|field| old.get(field.path.key()) != new.get(field.path.key()))
        .map(|field| field.path)
        .collect()
}
