use anyhow::Result;
use std::path::PathBuf;

use super::format::resolve_config;
use crate::config::NumStrConfig;
use crate::text::TextFieldSpecFiller;

/// Pure function to merge `[filler]` with `--chars` / `--count`
pub fn build_filler(
    config: &NumStrConfig,
    chars: Option<&str>,
    count: Option<usize>,
) -> Result<TextFieldSpecFiller> {
    let configured = config.filler.as_ref();
    let chars = chars
        .map(str::to_string)
        .or_else(|| configured.map(|f| f.chars.clone()));
    let count = count.or_else(|| configured.map(|f| f.count));

    let (Some(chars), Some(count)) = (chars, count) else {
        anyhow::bail!("No filler configured. Pass --chars and --count or add a [filler] section.");
    };

    Ok(TextFieldSpecFiller::new(&chars, count)?)
}

pub fn handle_filler(
    chars: Option<String>,
    count: Option<usize>,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = resolve_config(config.as_ref())?;
    let filler = build_filler(&config, chars.as_deref(), count)?;
    log::debug!(
        "Filler '{}' x {} ({} characters)",
        filler.filler_chars(),
        filler.filler_chars_repeat_count(),
        filler.text_width()
    );
    println!("{}", filler);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FillerSection;

    #[test]
    fn test_flags_override_config() {
        let config = NumStrConfig {
            filler: Some(FillerSection {
                chars: "=".to_string(),
                count: 3,
            }),
            ..Default::default()
        };
        let filler = build_filler(&config, Some("*"), None).unwrap();
        assert_eq!(filler.formatted_text(), "***");
    }

    #[test]
    fn test_missing_filler_is_an_error() {
        let err = build_filler(&NumStrConfig::default(), Some("-"), None).unwrap_err();
        assert!(err.to_string().contains("No filler configured"));
    }

    #[test]
    fn test_invalid_count_is_reported() {
        assert!(build_filler(&NumStrConfig::default(), Some("-"), Some(0)).is_err());
    }
}
