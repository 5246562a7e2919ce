//! Config derive macro - generates FIELDS and the section schema.
//!
//! The schema is plain data; loading and writing live in the runtime crate.

mod attr;
mod field;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

use attr::{extract_doc_comment, get_label, get_section};
use field::FieldInfo;

/// Generate Config implementation (FIELDS + Section schema).
pub fn derive(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;
    let fields_struct_name = syn::Ident::new(&format!("{}Fields", name), name.span());

    let Some(section) = get_section(&input.attrs) else {
        return quote! { compile_error!("Config requires #[config(section = \"...\")]"); };
    };
    let Some(section_label) = get_label(&input.attrs) else {
        return quote! { compile_error!("Config requires #[config(label = \"...\")] on the struct"); };
    };
    let section_doc = extract_doc_comment(&input.attrs).unwrap_or_default();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return quote! { compile_error!("Config only works on structs with named fields"); };
            }
        },
        _ => return quote! { compile_error!("Config only works on structs"); },
    };

    let field_infos: Vec<FieldInfo> = match fields
        .iter()
        .filter_map(FieldInfo::from_field)
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(infos) => infos,
        Err(field) => {
            let message = format!("field `{field}` requires #[config(label = \"...\")]");
            return quote! { compile_error!(#message); };
        }
    };

    let field_defs = field_infos.iter().map(|f| {
        let name = &f.name;
        quote! { pub #name: crate::config::FieldPath, }
    });

    let field_inits = field_infos.iter().map(|f| {
        let name = &f.name;
        let key = f.key();
        quote! { #name: crate::config::FieldPath::new(#section, #key), }
    });

    let schema_entries = field_infos.iter().map(|f| {
        let key = f.key();
        let label = &f.label;
        let comment = &f.doc;
        let restart = f.restart;
        quote! {
            crate::config::FieldSchema {
                path: crate::config::FieldPath::new(#section, #key),
                label: #label,
                comment: #comment,
                restart: #restart,
            },
        }
    });

    quote! {
        /// Generated field path accessors.
        #[allow(non_camel_case_types)]
        pub struct #fields_struct_name {
            #(#field_defs)*
        }

        impl #name {
            /// Field paths for diagnostic messages.
            pub const FIELDS: #fields_struct_name = #fields_struct_name {
                #(#field_inits)*
            };
        }

        impl crate::config::Section for #name {
            const SCHEMA: crate::config::SectionSchema = crate::config::SectionSchema {
                name: #section,
                label: #section_label,
                comment: #section_doc,
                fields: &[
                    #(#schema_entries)*
                ],
            };
        }
    }
}
