use anyhow::Result;
use std::path::PathBuf;

use super::format::resolve_config;
use crate::config::ResolvedConfig;

/// Pure function to render the resolved configuration as text
pub fn render_text(resolved: &ResolvedConfig) -> String {
    let format = &resolved.format;
    let symbols = &format.symbols;
    let mut lines = vec![
        format!(
            "preset:            {}",
            resolved
                .preset
                .map(|p| p.to_string())
                .unwrap_or_else(|| "(none)".to_string())
        ),
        format!("decimal separator: '{}'", format.decimal_separator),
        format!(
            "field length:      {}",
            format
                .field
                .field_length
                .map(|l| l.to_string())
                .unwrap_or_else(|| "(natural width)".to_string())
        ),
        format!("justification:     {}", format.field.justification),
    ];

    for (name, spec) in [
        ("positive", symbols.positive()),
        ("negative", symbols.negative()),
        ("zero", symbols.zero()),
        ("currency", symbols.currency()),
    ] {
        if spec.is_nop() {
            lines.push(format!("{:<18} NOP", format!("{name}:")));
        } else {
            lines.push(format!(
                "{:<18} leading '{}' ({}), trailing '{}' ({})",
                format!("{name}:"),
                spec.leading_str(),
                spec.leading_position(),
                spec.trailing_str(),
                spec.trailing_position()
            ));
        }
    }

    if let Some(filler) = &resolved.filler {
        lines.push(format!(
            "filler:            '{}' x {}",
            filler.filler_chars(),
            filler.filler_chars_repeat_count()
        ));
    }

    lines.join("\n")
}

pub fn handle_show_config(config: Option<PathBuf>, json: bool) -> Result<()> {
    let config = resolve_config(config.as_ref())?;
    let resolved = ResolvedConfig::from_config(&config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    } else {
        println!("{}", render_text(&resolved));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NumStrConfig;

    #[test]
    fn test_render_text_marks_nop_members() {
        let resolved = ResolvedConfig::from_config(&NumStrConfig::default()).unwrap();
        let text = render_text(&resolved);
        assert!(text.contains("positive:          NOP"));
        assert!(text.contains("negative:          leading '-'"));
        assert!(text.contains("(natural width)"));
    }

    #[test]
    fn test_resolved_config_serializes_to_json() {
        let resolved = ResolvedConfig::from_config(&NumStrConfig::default()).unwrap();
        let json = serde_json::to_value(&resolved).unwrap();
        assert_eq!(json["format"]["decimal_separator"], ".");
        assert_eq!(json["format"]["symbols"]["negative"]["leading_symbols"], "-");
        assert!(json["filler"].is_null());
    }
}
