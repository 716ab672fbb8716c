use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::{load_config, load_config_file, NumStrConfig};
use crate::core::{NumericSignValue, TextJustify};
use crate::formatting::{
    formatter_for, validate_field_length, ColorMode, FormattingConfig, NumStrFormatSpec,
    NumberString,
};
use crate::symbols::{NumberSymbolGroup, SymbolPreset};

/// Command line settings for `numstr format`.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    pub value: String,
    pub preset: Option<SymbolPreset>,
    pub currency: Option<String>,
    pub trailing: bool,
    pub field_length: Option<usize>,
    pub justify: Option<TextJustify>,
    pub config: Option<PathBuf>,
    pub color: ColorMode,
}

/// Load the named config file, or search for `.numstr.toml` when none is given.
pub fn resolve_config(path: Option<&PathBuf>) -> Result<NumStrConfig> {
    match path {
        Some(path) => load_config_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(load_config()),
    }
}

/// Pure function to merge file configuration with command line flags.
///
/// Flags win: `--preset` replaces the configured preset, `--currency`
/// and `--trailing` replace the symbol group, and field flags replace the
/// configured field.
pub fn build_format_spec(
    config: &NumStrConfig,
    opts: &FormatOptions,
) -> crate::core::Result<NumStrFormatSpec> {
    let mut config = config.clone();
    if let Some(preset) = opts.preset {
        config.format.get_or_insert_with(Default::default).preset = Some(preset);
    }

    let mut spec = config.format_spec();

    if let Some(currency) = &opts.currency {
        spec.symbols =
            NumberSymbolGroup::new_simple_currency(currency, !opts.trailing, !opts.trailing)?;
    } else if opts.trailing && opts.preset.is_none() {
        spec.symbols = NumberSymbolGroup::new_simple_signed_number(false);
    }

    if let Some(length) = opts.field_length {
        validate_field_length(length)?;
        spec.field.field_length = Some(length);
    }
    if let Some(justify) = opts.justify {
        spec.field.justification = justify;
    }

    Ok(spec)
}

pub fn handle_format(opts: FormatOptions) -> Result<()> {
    let config = resolve_config(opts.config.as_ref())?;
    let spec = build_format_spec(&config, &opts)?;

    let number = NumberString::parse(&opts.value)?;
    let text = spec.format_number(&number)?;

    let formatter = formatter_for(FormattingConfig::resolve(opts.color));
    if number.sign() == NumericSignValue::Negative {
        println!("{}", formatter.negative(&text));
    } else {
        println!("{}", text);
    }
    Ok(())
}
