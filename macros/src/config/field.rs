//! Field information structures and parsing.

use crate::config::attr::{extract_doc_comment, get_label, has_attr};

/// Parsed field information.
pub struct FieldInfo {
    pub name: syn::Ident,
    pub label: String,
    pub doc: String,
    pub restart: bool,
}

impl FieldInfo {
    /// Parse field info from a syn::Field.
    ///
    /// Fields without `#[config(label = "...")]` yield `Err` with the field name.
    pub fn from_field(field: &syn::Field) -> Option<Result<Self, syn::Ident>> {
        let ident = field.ident.as_ref()?;
        let attrs = &field.attrs;

        let Some(label) = get_label(attrs) else {
            return Some(Err(ident.clone()));
        };
        Some(Ok(Self {
            name: ident.clone(),
            label,
            doc: extract_doc_comment(attrs).unwrap_or_default(),
            restart: has_attr(attrs, "restart"),
        }))
    }

    /// TOML key, identical to the serde field name.
    pub fn key(&self) -> String {
        self.name.to_string()
    }
}
