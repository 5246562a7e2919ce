//! Configuration utility types.
//!
//! | Module    | Purpose                                        |
//! |-----------|------------------------------------------------|
//! | `error`   | Configuration error types                      |
//! | `field`   | Type-safe dotted field paths                   |
//! | `schema`  | Section/field schema emitted by `#[derive(Config)]` |

mod error;
mod field;
mod schema;

pub use error::ConfigError;
pub use field::FieldPath;
pub use schema::{FieldSchema, Section, SectionSchema, restart_pending};
