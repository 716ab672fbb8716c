//! Named symbol configurations for common locales.
//!
//! Each preset expands to a complete [`NumberSymbolGroup`]:
//! - **signed-leading / signed-trailing**: a bare minus sign, no currency
//! - **us-minus, us-paren, france, germany**: signed-number country defaults
//! - **us-currency, eu-currency, uk-currency**: currency country defaults
//!
//! # Example
//!
//! ```rust
//! use numstr::symbols::presets::SymbolPreset;
//!
//! let group = SymbolPreset::UsParen.to_group();
//! assert_eq!(group.negative().leading_str(), "(");
//! ```

use serde::{Deserialize, Serialize};

use super::group::NumberSymbolGroup;
use crate::core::Error;

/// Preset symbol configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SymbolPreset {
    /// `-123.45`
    SignedLeading,
    /// `123.45-`
    SignedTrailing,
    /// `-123.45`
    UsMinus,
    /// `(123.45)`
    UsParen,
    /// `123,45-`
    France,
    /// `123,45-`
    Germany,
    /// `$ -123.45`
    UsCurrency,
    /// `123,45- €`
    EuCurrency,
    /// `£ -123.45`
    UkCurrency,
}

impl SymbolPreset {
    /// Every preset, in display order.
    pub fn all() -> &'static [SymbolPreset] {
        &[
            SymbolPreset::SignedLeading,
            SymbolPreset::SignedTrailing,
            SymbolPreset::UsMinus,
            SymbolPreset::UsParen,
            SymbolPreset::France,
            SymbolPreset::Germany,
            SymbolPreset::UsCurrency,
            SymbolPreset::EuCurrency,
            SymbolPreset::UkCurrency,
        ]
    }

    /// Expand the preset into a full symbol group.
    pub fn to_group(self) -> NumberSymbolGroup {
        log::debug!("Applying symbol preset '{}'", self);
        match self {
            SymbolPreset::SignedLeading => NumberSymbolGroup::new_simple_signed_number(true),
            SymbolPreset::SignedTrailing => NumberSymbolGroup::new_simple_signed_number(false),
            SymbolPreset::UsMinus => NumberSymbolGroup::signed_default_us_minus(),
            SymbolPreset::UsParen => NumberSymbolGroup::signed_default_us_paren(),
            SymbolPreset::France => NumberSymbolGroup::signed_default_france(),
            SymbolPreset::Germany => NumberSymbolGroup::signed_default_germany(),
            SymbolPreset::UsCurrency => NumberSymbolGroup::currency_default_us_minus(),
            SymbolPreset::EuCurrency => NumberSymbolGroup::currency_default_germany(),
            SymbolPreset::UkCurrency => NumberSymbolGroup::currency_default_uk_minus_inside(),
        }
    }

    /// Parse preset from its kebab-case name (returns Option instead of Result).
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.trim().to_lowercase();
        Self::all().iter().copied().find(|p| p.as_str() == lower)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SymbolPreset::SignedLeading => "signed-leading",
            SymbolPreset::SignedTrailing => "signed-trailing",
            SymbolPreset::UsMinus => "us-minus",
            SymbolPreset::UsParen => "us-paren",
            SymbolPreset::France => "france",
            SymbolPreset::Germany => "germany",
            SymbolPreset::UsCurrency => "us-currency",
            SymbolPreset::EuCurrency => "eu-currency",
            SymbolPreset::UkCurrency => "uk-currency",
        }
    }

    /// One-line description shown by `numstr presets`.
    pub fn description(self) -> &'static str {
        match self {
            SymbolPreset::SignedLeading => "Leading minus sign, no currency",
            SymbolPreset::SignedTrailing => "Trailing minus sign, no currency",
            SymbolPreset::UsMinus => "United States signed number",
            SymbolPreset::UsParen => "United States accounting parentheses",
            SymbolPreset::France => "France signed number",
            SymbolPreset::Germany => "Germany signed number",
            SymbolPreset::UsCurrency => "United States dollar with leading minus",
            SymbolPreset::EuCurrency => "Euro with trailing minus",
            SymbolPreset::UkCurrency => "Pound sterling, minus inside the currency symbol",
        }
    }
}

impl std::fmt::Display for SymbolPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SymbolPreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SymbolPreset::parse(s).ok_or_else(|| Error::invalid_enum("symbol preset", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_parse() {
        assert_eq!(SymbolPreset::parse("us-paren"), Some(SymbolPreset::UsParen));
        assert_eq!(SymbolPreset::parse("US-PAREN"), Some(SymbolPreset::UsParen));
        assert_eq!(SymbolPreset::parse("france"), Some(SymbolPreset::France));
        assert_eq!(SymbolPreset::parse("invalid"), None);
    }

    #[test]
    fn test_names_round_trip_through_display() {
        for preset in SymbolPreset::all() {
            let parsed: SymbolPreset = preset.to_string().parse().unwrap();
            assert_eq!(&parsed, preset);
        }
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&SymbolPreset::EuCurrency).unwrap();
        assert_eq!(json, "\"eu-currency\"");
    }

    #[test]
    fn test_every_preset_configures_negative_sign() {
        for preset in SymbolPreset::all() {
            let group = preset.to_group();
            assert!(!group.is_nop_negative(), "{preset} has no negative sign");
        }
    }

    #[test]
    fn test_currency_presets_carry_currency() {
        assert!(!SymbolPreset::UsCurrency.to_group().is_nop_currency());
        assert!(!SymbolPreset::EuCurrency.to_group().is_nop_currency());
        assert!(!SymbolPreset::UkCurrency.to_group().is_nop_currency());
        assert!(SymbolPreset::UsMinus.to_group().is_nop_currency());
    }
}
