//! Proc macros for decor-settings.
//!
//! # Config derive macro
//!
//! Generates field path accessors and the section schema.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "optout", label = "Feature opt-outs")]
//! /// Allows disabling specific features.
//! pub struct OptOutSettings {
//!     /// Disable all mod wall blocks.
//!     #[config(label = "Without walls", restart)]
//!     pub without_walls: bool,
//! }
//!
//! // Generates:
//! // - OptOutSettings::FIELDS.without_walls -> FieldPath::new("optout", "without_walls")
//! // - impl Section for OptOutSettings { const SCHEMA: SectionSchema = ... }
//! ```
//!
//! # Attributes
//!
//! Struct-level (both required):
//! - `#[config(section = "path")]` - TOML section path
//! - `#[config(label = "x")]` - Human-readable section label
//!
//! Field-level:
//! - `#[config(label = "x")]` - Human-readable field label (required)
//! - `#[config(restart)]` - Changes only take effect after a restart
//!
//! TOML keys are the Rust field names; serde renames are not supported.

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and the section schema.
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
