//! Commented TOML output driven by section schemas.
//!
//! Labels and comments are metadata only: they are written as `#` lines
//! and ignored again on load.

use super::{ConfigError, Section};

/// File header written above the first section.
pub(super) fn document_header() -> String {
    format!(
        "# Engineer's Decor settings (decor-settings v{})\n\
         # Fields marked \"requires restart\" take effect after the game restarts.\n\n",
        env!("CARGO_PKG_VERSION")
    )
}

/// Render one section with its current values.
///
/// ```text
/// # Feature opt-outs
/// # Allows disabling specific features.
/// [optout]
///
/// # Without walls (requires restart)
/// # Disable all mod wall blocks.
/// without_walls = false
/// ```
pub(super) fn render_section<S: Section>(value: &S) -> Result<String, ConfigError> {
    let schema = &S::SCHEMA;
    let toml::Value::Table(table) = toml::Value::try_from(value)? else {
        return Err(ConfigError::Shape(schema.name));
    };

    let mut out = String::new();
    out.push_str("# ");
    out.push_str(schema.label);
    out.push('\n');
    push_comment(&mut out, schema.comment);
    out.push('[');
    out.push_str(schema.name);
    out.push_str("]\n");

    for field in schema.fields {
        out.push('\n');
        out.push_str("# ");
        out.push_str(field.label);
        if field.restart {
            out.push_str(" (requires restart)");
        }
        out.push('\n');
        push_comment(&mut out, field.comment);

        match table.get(field.path.key()) {
            Some(v) => {
                out.push_str(field.path.key());
                out.push_str(" = ");
                out.push_str(&v.to_string());
                out.push('\n');
            }
            // Unset optional values stay commented out
            None => {
                out.push_str("# ");
                out.push_str(field.path.key());
                out.push_str(" =\n");
            }
        }
    }

    Ok(out)
}

fn push_comment(out: &mut String, comment: &str) {
    for line in comment.lines() {
        out.push_str("# ");
        out.push_str(line.trim());
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OptOutSettings, TweakSettings};

    #[test]
    fn test_render_section_header() {
        let out = render_section(&OptOutSettings::default()).unwrap();
        assert!(out.starts_with("# Feature opt-outs\n# Allows disabling specific features.\n[optout]\n"));
    }

    #[test]
    fn test_render_field_metadata() {
        let out = render_section(&OptOutSettings::default()).unwrap();
        assert!(out.contains(
            "# Without clinker bricks (requires restart)\n\
             # Disable clinker bricks and derived blocks.\n\
             without_clinker_bricks = false\n"
        ));
    }

    #[test]
    fn test_render_current_values_and_live_fields() {
        let tweaks = TweakSettings {
            furnace_smelts_nuggets: true,
        };
        let out = render_section(&tweaks).unwrap();

        assert!(out.contains("furnace_smelts_nuggets = true"));
        // live field: no restart marker, multi-line comment kept
        assert!(out.contains("# Furnace: Nugget smelting\n# Smelts ores"));
        assert!(!out.contains("requires restart"));
    }

    #[test]
    fn test_every_schema_key_is_written() {
        // schema keys must match the serde keys or values would be lost
        let out = render_section(&OptOutSettings::default()).unwrap();
        for field in OptOutSettings::SCHEMA.fields {
            let line = format!("\n{} = false\n", field.path.key());
            assert!(out.contains(&line), "missing {}", field.path);
        }
        assert!(!out.contains("\n# without"));
    }

    #[test]
    fn test_header_mentions_version() {
        assert!(document_header().contains(env!("CARGO_PKG_VERSION")));
    }
}
