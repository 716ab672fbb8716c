//! Leading and trailing symbols for a single sign category.
//!
//! A [`NumberSymbolSpec`] holds the characters placed before and after the
//! digits of a number string together with their position relative to the
//! number field. When it describes a currency symbol it also records
//! where the currency sits relative to a number sign sharing the same side.

use crate::core::{
    CurrencyNumSignRelativePosition, Error, NumberFieldSymbolPosition, Result, RuneArray,
};
use serde::{Deserialize, Serialize};

/// Symbol specification for positive, negative, zero or currency symbols.
///
/// An instance whose leading and trailing sequences are both empty is a
/// NOP (no operation) and contributes nothing to a formatted number string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberSymbolSpec {
    #[serde(default)]
    leading_symbols: RuneArray,
    #[serde(default)]
    leading_position: NumberFieldSymbolPosition,
    #[serde(default)]
    trailing_symbols: RuneArray,
    #[serde(default)]
    trailing_position: NumberFieldSymbolPosition,
    #[serde(default)]
    currency_sign_position: CurrencyNumSignRelativePosition,
}

impl NumberSymbolSpec {
    /// An empty spec that emits no symbols.
    pub fn new_nop() -> Self {
        Self::default()
    }

    pub fn new_leading(symbols: &str, position: NumberFieldSymbolPosition) -> Self {
        let mut spec = Self::new_nop();
        spec.set_leading(symbols, position);
        spec
    }

    pub fn new_leading_runes(symbols: &[char], position: NumberFieldSymbolPosition) -> Self {
        let mut spec = Self::new_nop();
        spec.set_leading_runes(symbols, position);
        spec
    }

    pub fn new_trailing(symbols: &str, position: NumberFieldSymbolPosition) -> Self {
        let mut spec = Self::new_nop();
        spec.set_trailing(symbols, position);
        spec
    }

    pub fn new_trailing_runes(symbols: &[char], position: NumberFieldSymbolPosition) -> Self {
        let mut spec = Self::new_nop();
        spec.set_trailing_runes(symbols, position);
        spec
    }

    pub fn new_leading_trailing(
        leading: &str,
        leading_position: NumberFieldSymbolPosition,
        trailing: &str,
        trailing_position: NumberFieldSymbolPosition,
    ) -> Self {
        let mut spec = Self::new_nop();
        spec.set_leading_trailing(leading, leading_position, trailing, trailing_position);
        spec
    }

    pub fn new_leading_trailing_runes(
        leading: &[char],
        leading_position: NumberFieldSymbolPosition,
        trailing: &[char],
        trailing_position: NumberFieldSymbolPosition,
    ) -> Self {
        let mut spec = Self::new_nop();
        spec.set_leading_trailing_runes(leading, leading_position, trailing, trailing_position);
        spec
    }

    /// US currency: `"$ "` leading, inside the number field.
    pub fn currency_default_us() -> Self {
        Self::simple_currency("$ ", true)
    }

    /// Euro currency: `" €"` trailing, inside the number field.
    pub fn currency_default_eu() -> Self {
        Self::simple_currency(" €", false)
    }

    /// UK currency with the minus sign inside the currency symbol: `"£ -123.45"`.
    pub fn currency_default_uk_minus_inside() -> Self {
        let mut spec = Self::simple_currency("£ ", true);
        spec.currency_sign_position = CurrencyNumSignRelativePosition::OutsideNumSign;
        spec
    }

    /// UK currency with the minus sign outside the currency symbol: `"-£ 123.45"`.
    pub fn currency_default_uk_minus_outside() -> Self {
        let mut spec = Self::simple_currency("£ ", true);
        spec.currency_sign_position = CurrencyNumSignRelativePosition::InsideNumSign;
        spec
    }

    fn simple_currency(symbols: &str, leading: bool) -> Self {
        let runes = RuneArray::from(symbols);
        let mut spec = Self::new_nop();
        if leading {
            spec.leading_symbols = runes;
        } else {
            spec.trailing_symbols = runes;
        }
        spec
    }

    // Accessors

    pub fn leading_symbols(&self) -> &RuneArray {
        &self.leading_symbols
    }

    pub fn leading_str(&self) -> String {
        self.leading_symbols.char_string()
    }

    pub fn leading_position(&self) -> NumberFieldSymbolPosition {
        self.leading_position
    }

    pub fn trailing_symbols(&self) -> &RuneArray {
        &self.trailing_symbols
    }

    pub fn trailing_str(&self) -> String {
        self.trailing_symbols.char_string()
    }

    pub fn trailing_position(&self) -> NumberFieldSymbolPosition {
        self.trailing_position
    }

    pub fn currency_sign_position(&self) -> CurrencyNumSignRelativePosition {
        self.currency_sign_position
    }

    /// True when neither leading nor trailing symbols are configured.
    pub fn is_nop(&self) -> bool {
        self.leading_symbols.is_empty() && self.trailing_symbols.is_empty()
    }

    // Mutation

    /// Reset every field, leaving a NOP spec.
    pub fn empty(&mut self) {
        self.empty_leading();
        self.empty_trailing();
        self.currency_sign_position = CurrencyNumSignRelativePosition::default();
    }

    /// Alias for [`NumberSymbolSpec::empty`].
    pub fn set_nop(&mut self) {
        self.empty();
    }

    pub fn empty_leading(&mut self) {
        self.leading_symbols.clear();
        self.leading_position = NumberFieldSymbolPosition::default();
    }

    pub fn empty_trailing(&mut self) {
        self.trailing_symbols.clear();
        self.trailing_position = NumberFieldSymbolPosition::default();
    }

    /// Replace every field with the values held by `other`.
    pub fn copy_in(&mut self, other: &NumberSymbolSpec) {
        self.clone_from(other);
    }

    /// Set the leading symbols. An empty sequence empties the leading side.
    pub fn set_leading(&mut self, symbols: &str, position: NumberFieldSymbolPosition) {
        let runes: Vec<char> = symbols.chars().collect();
        self.set_leading_runes(&runes, position);
    }

    pub fn set_leading_runes(&mut self, symbols: &[char], position: NumberFieldSymbolPosition) {
        if symbols.is_empty() {
            self.empty_leading();
            return;
        }
        self.leading_symbols.set_chars(symbols);
        self.leading_position = position;
    }

    /// Set the trailing symbols. An empty sequence empties the trailing side.
    pub fn set_trailing(&mut self, symbols: &str, position: NumberFieldSymbolPosition) {
        let runes: Vec<char> = symbols.chars().collect();
        self.set_trailing_runes(&runes, position);
    }

    pub fn set_trailing_runes(&mut self, symbols: &[char], position: NumberFieldSymbolPosition) {
        if symbols.is_empty() {
            self.empty_trailing();
            return;
        }
        self.trailing_symbols.set_chars(symbols);
        self.trailing_position = position;
    }

    pub fn set_leading_trailing(
        &mut self,
        leading: &str,
        leading_position: NumberFieldSymbolPosition,
        trailing: &str,
        trailing_position: NumberFieldSymbolPosition,
    ) {
        self.set_leading(leading, leading_position);
        self.set_trailing(trailing, trailing_position);
    }

    pub fn set_leading_trailing_runes(
        &mut self,
        leading: &[char],
        leading_position: NumberFieldSymbolPosition,
        trailing: &[char],
        trailing_position: NumberFieldSymbolPosition,
    ) {
        self.set_leading_runes(leading, leading_position);
        self.set_trailing_runes(trailing, trailing_position);
    }

    // Currency configuration

    /// Configure a leading currency symbol, discarding any previous settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySymbols`] when `symbols` is empty; `self` is
    /// left unchanged in that case.
    pub fn set_leading_currency(
        &mut self,
        symbols: &str,
        currency_sign_position: CurrencyNumSignRelativePosition,
        field_position: NumberFieldSymbolPosition,
    ) -> Result<()> {
        if symbols.is_empty() {
            return Err(Error::EmptySymbols(
                "leading currency symbol has zero characters".to_string(),
            ));
        }
        self.empty();
        self.set_leading(symbols, field_position);
        self.currency_sign_position = currency_sign_position;
        Ok(())
    }

    /// Configure a trailing currency symbol, discarding any previous settings.
    pub fn set_trailing_currency(
        &mut self,
        symbols: &str,
        currency_sign_position: CurrencyNumSignRelativePosition,
        field_position: NumberFieldSymbolPosition,
    ) -> Result<()> {
        if symbols.is_empty() {
            return Err(Error::EmptySymbols(
                "trailing currency symbol has zero characters".to_string(),
            ));
        }
        self.empty();
        self.set_trailing(symbols, field_position);
        self.currency_sign_position = currency_sign_position;
        Ok(())
    }

    /// Configure leading and trailing currency symbols together.
    ///
    /// One side may be empty; both empty is an error.
    pub fn set_leading_trailing_currency(
        &mut self,
        leading: &str,
        trailing: &str,
        currency_sign_position: CurrencyNumSignRelativePosition,
        field_position: NumberFieldSymbolPosition,
    ) -> Result<()> {
        if leading.is_empty() && trailing.is_empty() {
            return Err(Error::EmptySymbols(
                "leading and trailing currency symbols both have zero characters".to_string(),
            ));
        }
        self.empty();
        self.set_leading_trailing(leading, field_position, trailing, field_position);
        self.currency_sign_position = currency_sign_position;
        Ok(())
    }

    /// Dispatch to the leading, trailing or combined currency setter
    /// depending on which sides carry characters.
    pub fn set_currency_basic(
        &mut self,
        leading: &str,
        trailing: &str,
        currency_sign_position: CurrencyNumSignRelativePosition,
        field_position: NumberFieldSymbolPosition,
    ) -> Result<()> {
        match (leading.is_empty(), trailing.is_empty()) {
            (false, true) => {
                self.set_leading_currency(leading, currency_sign_position, field_position)
            }
            (true, false) => {
                self.set_trailing_currency(trailing, currency_sign_position, field_position)
            }
            _ => self.set_leading_trailing_currency(
                leading,
                trailing,
                currency_sign_position,
                field_position,
            ),
        }
    }

    /// Configure a currency symbol with a separating space.
    ///
    /// A leading currency gets a trailing space (`"$"` becomes `"$ "`), a
    /// trailing currency gets a leading space (`"€"` becomes `" €"`). The
    /// symbol sits inside the number field and outside any number sign.
    pub fn set_currency_simple(&mut self, symbols: &str, leading: bool) -> Result<()> {
        if symbols.is_empty() {
            return Err(Error::EmptySymbols(
                "currency symbol has zero characters".to_string(),
            ));
        }

        if leading {
            let padded = if symbols.ends_with(' ') {
                symbols.to_string()
            } else {
                format!("{symbols} ")
            };
            self.set_leading_currency(
                &padded,
                CurrencyNumSignRelativePosition::OutsideNumSign,
                NumberFieldSymbolPosition::InsideNumField,
            )
        } else {
            let padded = if symbols.starts_with(' ') {
                symbols.to_string()
            } else {
                format!(" {symbols}")
            };
            self.set_trailing_currency(
                &padded,
                CurrencyNumSignRelativePosition::OutsideNumSign,
                NumberFieldSymbolPosition::InsideNumField,
            )
        }
    }
}
