use serde::{Deserialize, Serialize};

use crate::core::{
    CurrencyNumSignRelativePosition, NumberFieldSymbolPosition, Result, TextJustify,
};
use crate::formatting::{NumStrFormatSpec, NumberFieldSpec};
use crate::symbols::{NumberSymbolGroup, NumberSymbolSpec, SymbolPreset};
use crate::text::TextFieldSpecFiller;

/// Root configuration structure for `.numstr.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct NumStrConfig {
    /// Preset, separator and number field settings
    #[serde(default)]
    pub format: Option<FormatSection>,

    /// Explicit per-sign and currency symbol overrides
    #[serde(default)]
    pub symbols: Option<SymbolsSection>,

    /// Filler field used by `numstr filler`
    #[serde(default)]
    pub filler: Option<FillerSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct FormatSection {
    pub preset: Option<SymbolPreset>,
    pub decimal_separator: Option<String>,
    pub field_length: Option<usize>,
    pub justification: Option<TextJustify>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SymbolsSection {
    pub positive: Option<SymbolOverride>,
    pub negative: Option<SymbolOverride>,
    pub zero: Option<SymbolOverride>,
    pub currency: Option<SymbolOverride>,
}

/// One `[symbols.*]` table.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SymbolOverride {
    #[serde(default)]
    pub leading: String,
    #[serde(default)]
    pub trailing: String,
    #[serde(default)]
    pub position: NumberFieldSymbolPosition,
    /// Only meaningful for `[symbols.currency]`
    #[serde(default)]
    pub currency_sign_position: Option<CurrencyNumSignRelativePosition>,
}

impl SymbolOverride {
    pub fn to_sign_spec(&self) -> NumberSymbolSpec {
        NumberSymbolSpec::new_leading_trailing(
            &self.leading,
            self.position,
            &self.trailing,
            self.position,
        )
    }

    /// Currency spec; empty leading and trailing symbols give a NOP spec.
    pub fn to_currency_spec(&self) -> NumberSymbolSpec {
        let mut spec = NumberSymbolSpec::new_nop();
        let relation = self.currency_sign_position.unwrap_or_default();
        if spec
            .set_currency_basic(&self.leading, &self.trailing, relation, self.position)
            .is_err()
        {
            log::debug!("Currency override has no symbols; currency disabled");
        }
        spec
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FillerSection {
    pub chars: String,
    pub count: usize,
}

impl NumStrConfig {
    pub fn preset(&self) -> Option<SymbolPreset> {
        self.format.as_ref().and_then(|f| f.preset)
    }

    /// Symbol group from the preset with `[symbols.*]` overrides applied.
    ///
    /// Without a preset the group starts as a leading minus sign.
    pub fn symbol_group(&self) -> NumberSymbolGroup {
        let mut group = self
            .preset()
            .map(SymbolPreset::to_group)
            .unwrap_or_else(|| NumberSymbolGroup::new_simple_signed_number(true));

        if let Some(symbols) = &self.symbols {
            apply_symbol_overrides(&mut group, symbols);
        }
        group
    }

    pub fn number_field(&self) -> NumberFieldSpec {
        let format = self.format.clone().unwrap_or_default();
        NumberFieldSpec {
            field_length: format.field_length,
            justification: format.justification.unwrap_or_default(),
        }
    }

    pub fn decimal_separator(&self) -> String {
        self.format
            .as_ref()
            .and_then(|f| f.decimal_separator.clone())
            .unwrap_or_else(|| ".".to_string())
    }

    pub fn format_spec(&self) -> NumStrFormatSpec {
        NumStrFormatSpec::new(self.symbol_group())
            .with_decimal_separator(self.decimal_separator())
            .with_field(self.number_field())
    }

    /// The configured filler, if any.
    pub fn filler_spec(&self) -> Result<Option<TextFieldSpecFiller>> {
        self.filler
            .as_ref()
            .map(|f| TextFieldSpecFiller::new(&f.chars, f.count))
            .transpose()
    }
}

/// Pure function to apply explicit symbol tables on top of a group
pub fn apply_symbol_overrides(group: &mut NumberSymbolGroup, symbols: &SymbolsSection) {
    if let Some(positive) = &symbols.positive {
        group.set_positive_spec(&positive.to_sign_spec());
    }
    if let Some(negative) = &symbols.negative {
        group.set_negative_spec(&negative.to_sign_spec());
    }
    if let Some(zero) = &symbols.zero {
        group.set_zero_spec(&zero.to_sign_spec());
    }
    if let Some(currency) = &symbols.currency {
        group.set_currency_spec(&currency.to_currency_spec());
    }
}

/// Fully resolved settings, as printed by `numstr show-config`.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedConfig {
    pub preset: Option<SymbolPreset>,
    pub format: NumStrFormatSpec,
    pub filler: Option<TextFieldSpecFiller>,
}

impl ResolvedConfig {
    pub fn from_config(config: &NumStrConfig) -> Result<Self> {
        Ok(Self {
            preset: config.preset(),
            format: config.format_spec(),
            filler: config.filler_spec()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_leading_minus() {
        let config = NumStrConfig::default();
        assert_eq!(
            config.symbol_group(),
            NumberSymbolGroup::new_simple_signed_number(true)
        );
        assert_eq!(config.decimal_separator(), ".");
        assert_eq!(config.number_field(), NumberFieldSpec::unbounded());
    }

    #[test]
    fn test_override_replaces_preset_member() {
        let config = NumStrConfig {
            format: Some(FormatSection {
                preset: Some(SymbolPreset::UsCurrency),
                ..Default::default()
            }),
            symbols: Some(SymbolsSection {
                negative: Some(SymbolOverride {
                    leading: "(".to_string(),
                    trailing: ")".to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            filler: None,
        };

        let group = config.symbol_group();
        assert_eq!(group.negative().leading_str(), "(");
        assert_eq!(group.negative().trailing_str(), ")");
        assert_eq!(group.currency().leading_str(), "$ ");
    }

    #[test]
    fn test_empty_currency_override_disables_currency() {
        let symbols = SymbolsSection {
            currency: Some(SymbolOverride::default()),
            ..Default::default()
        };
        let mut group = NumberSymbolGroup::currency_default_us_minus();
        apply_symbol_overrides(&mut group, &symbols);
        assert!(group.is_nop_currency());
    }

    #[test]
    fn test_filler_spec_validates() {
        let config = NumStrConfig {
            filler: Some(FillerSection {
                chars: "-".to_string(),
                count: 0,
            }),
            ..Default::default()
        };
        assert!(config.filler_spec().is_err());
    }
}
