//! Sign symbols plus an independent currency symbol.
//!
//! [`NumberSymbolGroup`] keeps the number sign symbols (positive, negative,
//! zero) separate from the currency symbol, so the currency can be placed
//! inside or outside the sign at format time. Country defaults combine a
//! currency spec with the matching signed-number layout.

use super::spec::NumberSymbolSpec;
use super::symbols_spec::{NumberSymbolsSpec, SymbolTriple};
use crate::core::{Error, NumberFieldSymbolPosition, NumericSignValue, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberSymbolGroup {
    #[serde(flatten)]
    signs: NumberSymbolsSpec,
    #[serde(default)]
    currency: NumberSymbolSpec,
}

impl NumberSymbolGroup {
    pub fn new_nop() -> Self {
        Self::default()
    }

    pub fn new(
        positive: NumberSymbolSpec,
        negative: NumberSymbolSpec,
        zero: NumberSymbolSpec,
        currency: NumberSymbolSpec,
    ) -> Self {
        Self {
            signs: NumberSymbolsSpec::new(positive, negative, zero),
            currency,
        }
    }

    pub fn new_symbols_strings(
        positive: SymbolTriple<&str>,
        negative: SymbolTriple<&str>,
        zero: SymbolTriple<&str>,
        currency: SymbolTriple<&str>,
    ) -> Self {
        let mut group = Self::new_nop();
        group.set_symbols_strings(positive, negative, zero, currency);
        group
    }

    pub fn new_symbols_runes(
        positive: SymbolTriple<&[char]>,
        negative: SymbolTriple<&[char]>,
        zero: SymbolTriple<&[char]>,
        currency: SymbolTriple<&[char]>,
    ) -> Self {
        let mut group = Self::new_nop();
        group.set_symbols_runes(positive, negative, zero, currency);
        group
    }

    /// A currency symbol plus a minus sign for negative values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySymbols`] when `currency` is empty.
    pub fn new_simple_currency(
        currency: &str,
        leading_currency: bool,
        leading_minus: bool,
    ) -> Result<Self> {
        let mut group = Self::new_nop();
        group.set_simple_currency(currency, leading_currency, leading_minus)?;
        Ok(group)
    }

    /// A minus sign for negative values and no currency.
    pub fn new_simple_signed_number(leading_minus: bool) -> Self {
        let mut group = Self::new_nop();
        group.set_simple_signed_number(leading_minus);
        group
    }

    // Country defaults

    /// `"$ -123.45"`
    pub fn currency_default_us_minus() -> Self {
        Self {
            signs: NumberSymbolsSpec::signed_default_us_minus(),
            currency: NumberSymbolSpec::currency_default_us(),
        }
    }

    /// `"$ (123.45)"`
    pub fn currency_default_us_paren() -> Self {
        Self {
            signs: NumberSymbolsSpec::signed_default_us_paren(),
            currency: NumberSymbolSpec::currency_default_us(),
        }
    }

    /// `"123,45- €"`
    pub fn currency_default_france() -> Self {
        Self {
            signs: NumberSymbolsSpec::signed_default_france(),
            currency: NumberSymbolSpec::currency_default_eu(),
        }
    }

    /// `"123,45- €"`
    pub fn currency_default_germany() -> Self {
        Self {
            signs: NumberSymbolsSpec::signed_default_germany(),
            currency: NumberSymbolSpec::currency_default_eu(),
        }
    }

    /// `"£ -123.45"`
    pub fn currency_default_uk_minus_inside() -> Self {
        Self {
            signs: NumberSymbolsSpec::signed_default_us_minus(),
            currency: NumberSymbolSpec::currency_default_uk_minus_inside(),
        }
    }

    /// `"-£ 123.45"`
    pub fn currency_default_uk_minus_outside() -> Self {
        Self {
            signs: NumberSymbolsSpec::signed_default_us_minus(),
            currency: NumberSymbolSpec::currency_default_uk_minus_outside(),
        }
    }

    pub fn signed_default_us_minus() -> Self {
        NumberSymbolsSpec::signed_default_us_minus().into()
    }

    pub fn signed_default_us_paren() -> Self {
        NumberSymbolsSpec::signed_default_us_paren().into()
    }

    pub fn signed_default_france() -> Self {
        NumberSymbolsSpec::signed_default_france().into()
    }

    pub fn signed_default_germany() -> Self {
        NumberSymbolsSpec::signed_default_germany().into()
    }

    // Getters

    pub fn positive(&self) -> &NumberSymbolSpec {
        self.signs.positive()
    }

    pub fn negative(&self) -> &NumberSymbolSpec {
        self.signs.negative()
    }

    pub fn zero(&self) -> &NumberSymbolSpec {
        self.signs.zero()
    }

    pub fn currency(&self) -> &NumberSymbolSpec {
        &self.currency
    }

    pub fn signs(&self) -> &NumberSymbolsSpec {
        &self.signs
    }

    pub fn symbols_for(&self, sign: NumericSignValue) -> &NumberSymbolSpec {
        self.signs.symbols_for(sign)
    }

    // NOP state

    /// True when the sign symbols and the currency symbol are all NOP.
    pub fn is_nop(&self) -> bool {
        self.signs.is_nop() && self.currency.is_nop()
    }

    pub fn is_nop_positive(&self) -> bool {
        self.signs.is_nop_positive()
    }

    pub fn is_nop_negative(&self) -> bool {
        self.signs.is_nop_negative()
    }

    pub fn is_nop_zero(&self) -> bool {
        self.signs.is_nop_zero()
    }

    pub fn is_nop_currency(&self) -> bool {
        self.currency.is_nop()
    }

    pub fn empty(&mut self) {
        self.signs.empty();
        self.currency.empty();
    }

    pub fn set_nop(&mut self) {
        self.empty();
    }

    pub fn empty_positive(&mut self) {
        self.signs.empty_positive();
    }

    pub fn empty_negative(&mut self) {
        self.signs.empty_negative();
    }

    pub fn empty_zero(&mut self) {
        self.signs.empty_zero();
    }

    pub fn empty_currency(&mut self) {
        self.currency.empty();
    }

    pub fn set_nop_positive(&mut self) {
        self.empty_positive();
    }

    pub fn set_nop_negative(&mut self) {
        self.empty_negative();
    }

    pub fn set_nop_zero(&mut self) {
        self.empty_zero();
    }

    pub fn set_nop_currency(&mut self) {
        self.empty_currency();
    }

    pub fn copy_in(&mut self, other: &NumberSymbolGroup) {
        self.clone_from(other);
    }

    // Setters

    pub fn set_symbols_specs(
        &mut self,
        positive: &NumberSymbolSpec,
        negative: &NumberSymbolSpec,
        zero: &NumberSymbolSpec,
        currency: &NumberSymbolSpec,
    ) {
        self.signs.set_symbols_specs(positive, negative, zero);
        self.currency.copy_in(currency);
    }

    /// Replace the sign specs and the currency spec from strings.
    pub fn set_symbols_strings(
        &mut self,
        positive: SymbolTriple<&str>,
        negative: SymbolTriple<&str>,
        zero: SymbolTriple<&str>,
        currency: SymbolTriple<&str>,
    ) {
        self.signs.set_symbols_strings(positive, negative, zero);
        self.currency = currency.to_spec();
    }

    pub fn set_symbols_runes(
        &mut self,
        positive: SymbolTriple<&[char]>,
        negative: SymbolTriple<&[char]>,
        zero: SymbolTriple<&[char]>,
        currency: SymbolTriple<&[char]>,
    ) {
        self.signs.set_symbols_runes(positive, negative, zero);
        self.currency = currency.to_spec();
    }

    pub fn set_positive_spec(&mut self, spec: &NumberSymbolSpec) {
        self.signs.set_positive_spec(spec);
    }

    pub fn set_negative_spec(&mut self, spec: &NumberSymbolSpec) {
        self.signs.set_negative_spec(spec);
    }

    pub fn set_zero_spec(&mut self, spec: &NumberSymbolSpec) {
        self.signs.set_zero_spec(spec);
    }

    pub fn set_currency_spec(&mut self, spec: &NumberSymbolSpec) {
        self.currency.copy_in(spec);
    }

    pub fn set_positive_symbols(
        &mut self,
        leading: &str,
        trailing: &str,
        position: NumberFieldSymbolPosition,
    ) {
        self.signs.set_positive_symbols(leading, trailing, position);
    }

    pub fn set_positive_symbols_runes(
        &mut self,
        leading: &[char],
        trailing: &[char],
        position: NumberFieldSymbolPosition,
    ) {
        self.signs
            .set_positive_symbols_runes(leading, trailing, position);
    }

    pub fn set_negative_symbols(
        &mut self,
        leading: &str,
        trailing: &str,
        position: NumberFieldSymbolPosition,
    ) {
        self.signs.set_negative_symbols(leading, trailing, position);
    }

    pub fn set_negative_symbols_runes(
        &mut self,
        leading: &[char],
        trailing: &[char],
        position: NumberFieldSymbolPosition,
    ) {
        self.signs
            .set_negative_symbols_runes(leading, trailing, position);
    }

    pub fn set_zero_symbols(
        &mut self,
        leading: &str,
        trailing: &str,
        position: NumberFieldSymbolPosition,
    ) {
        self.signs.set_zero_symbols(leading, trailing, position);
    }

    pub fn set_zero_symbols_runes(
        &mut self,
        leading: &[char],
        trailing: &[char],
        position: NumberFieldSymbolPosition,
    ) {
        self.signs.set_zero_symbols_runes(leading, trailing, position);
    }

    /// Reset the group to a currency symbol and a plain minus sign.
    ///
    /// Positive and zero values carry no sign symbols. `self` is left
    /// unchanged when `currency` is empty.
    pub fn set_simple_currency(
        &mut self,
        currency: &str,
        leading_currency: bool,
        leading_minus: bool,
    ) -> Result<()> {
        if currency.is_empty() {
            return Err(Error::EmptySymbols(
                "currency symbol has zero characters".to_string(),
            ));
        }

        let mut currency_spec = NumberSymbolSpec::new_nop();
        currency_spec.set_currency_simple(currency, leading_currency)?;

        self.signs.set_simple_signed_number(leading_minus);
        self.currency = currency_spec;
        log::debug!(
            "Configured simple currency '{}' (leading currency: {}, leading minus: {})",
            currency,
            leading_currency,
            leading_minus
        );
        Ok(())
    }

    pub fn set_simple_signed_number(&mut self, leading_minus: bool) {
        self.signs.set_simple_signed_number(leading_minus);
        self.currency.empty();
    }
}

impl From<NumberSymbolsSpec> for NumberSymbolGroup {
    fn from(signs: NumberSymbolsSpec) -> Self {
        Self {
            signs,
            currency: NumberSymbolSpec::new_nop(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_symbols_strings_replaces_currency() {
        let inside = NumberFieldSymbolPosition::InsideNumField;
        let mut group = NumberSymbolGroup::currency_default_us_minus();
        group.set_symbols_strings(
            SymbolTriple::new("", "", inside),
            SymbolTriple::new("(", ")", inside),
            SymbolTriple::new("", "", inside),
            SymbolTriple::new("", " €", inside),
        );

        assert!(group.is_nop_positive());
        assert_eq!(group.negative().leading_str(), "(");
        assert_eq!(group.currency().trailing_str(), " €");
        assert!(group.currency().leading_symbols().is_empty());
    }
    use crate::core::CurrencyNumSignRelativePosition;

    #[test]
    fn test_new_nop_includes_currency() {
        let group = NumberSymbolGroup::new_nop();
        assert!(group.is_nop());
        assert!(group.is_nop_currency());
    }

    #[test]
    fn test_simple_currency_rejects_empty_currency() {
        let result = NumberSymbolGroup::new_simple_currency("", true, true);
        assert!(matches!(result, Err(Error::EmptySymbols(_))));
    }

    #[test]
    fn test_failed_simple_currency_leaves_group_unchanged() {
        let mut group = NumberSymbolGroup::currency_default_us_paren();
        assert!(group.set_simple_currency("", false, false).is_err());
        assert_eq!(group, NumberSymbolGroup::currency_default_us_paren());
    }

    #[test]
    fn test_simple_currency_separates_sign_and_currency() {
        let group = NumberSymbolGroup::new_simple_currency("€", false, false).unwrap();
        assert!(group.is_nop_positive());
        assert!(group.is_nop_zero());
        assert_eq!(group.negative().trailing_str(), "-");
        assert_eq!(group.currency().trailing_str(), " €");
        assert_eq!(
            group.currency().currency_sign_position(),
            CurrencyNumSignRelativePosition::OutsideNumSign
        );
    }

    #[test]
    fn test_signed_number_has_nop_currency() {
        let group = NumberSymbolGroup::new_simple_signed_number(true);
        assert!(group.is_nop_currency());
        assert_eq!(group.negative().leading_str(), "-");
        assert!(!group.is_nop());
    }

    #[test]
    fn test_from_symbols_spec() {
        let signs = NumberSymbolsSpec::signed_default_us_paren();
        let group = NumberSymbolGroup::from(signs.clone());
        assert_eq!(group.signs(), &signs);
        assert!(group.is_nop_currency());
    }

    #[test]
    fn test_empty_currency_keeps_signs() {
        let mut group = NumberSymbolGroup::currency_default_germany();
        group.set_nop_currency();
        assert!(group.is_nop_currency());
        assert_eq!(group, NumberSymbolGroup::signed_default_germany());
        group.empty();
        assert_eq!(group, NumberSymbolGroup::new_nop());
    }
}
