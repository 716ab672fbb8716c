//! Assembly of number strings from a symbol group and a number field.
//!
//! A plain decimal such as `-1234.5` is split into sign and digits, the
//! digits are decorated with the sign and currency symbols of a
//! [`NumberSymbolGroup`], and the result is justified in an optional
//! fixed-width number field.
//!
//! Symbols positioned `InsideNumField` are justified together with the
//! digits; symbols positioned `OutsideNumField` are attached after
//! justification and make the output longer than the field.

use crate::core::{
    CurrencyNumSignRelativePosition, Error, NumberFieldSymbolPosition, NumericSignValue, Result,
    TextJustify,
};
use crate::symbols::{NumberSymbolGroup, NumberSymbolSpec, SymbolPreset};
use crate::text::justify_text;
use serde::{Deserialize, Serialize};

/// A parsed plain decimal: sign plus integer and fractional digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberString {
    sign: NumericSignValue,
    integer: String,
    fraction: Option<String>,
}

impl NumberString {
    /// Parse `[+-]?digits[.digits]`. Surrounding whitespace is rejected.
    ///
    /// Excess leading zeros in the integer part are dropped. A value whose
    /// digits are all zero is classified as zero even when written `-0.00`.
    pub fn parse(value: &str) -> Result<Self> {
        let (negative, unsigned) = match value.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, value.strip_prefix('+').unwrap_or(value)),
        };

        let (integer, fraction) = match unsigned.split_once('.') {
            Some((int, frac)) => (int, Some(frac)),
            None => (unsigned, None),
        };

        let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
        if !all_digits(integer) || fraction.is_some_and(|f| !all_digits(f)) {
            return Err(Error::InvalidNumber(value.to_string()));
        }

        let stripped = integer.trim_start_matches('0');
        let integer = if stripped.is_empty() { "0" } else { stripped };

        let is_zero = integer == "0" && fraction.is_none_or(|f| f.chars().all(|c| c == '0'));
        let sign = match (is_zero, negative) {
            (true, _) => NumericSignValue::Zero,
            (false, true) => NumericSignValue::Negative,
            (false, false) => NumericSignValue::Positive,
        };

        Ok(Self {
            sign,
            integer: integer.to_string(),
            fraction: fraction.map(str::to_string),
        })
    }

    pub fn sign(&self) -> NumericSignValue {
        self.sign
    }

    pub fn integer_digits(&self) -> &str {
        &self.integer
    }

    pub fn fraction_digits(&self) -> Option<&str> {
        self.fraction.as_deref()
    }

    /// Digits joined by `decimal_separator`, without any sign.
    pub fn digits(&self, decimal_separator: &str) -> String {
        match &self.fraction {
            Some(fraction) => format!("{}{}{}", self.integer, decimal_separator, fraction),
            None => self.integer.clone(),
        }
    }
}

/// Widest accepted number field.
pub const MAX_FIELD_LENGTH: usize = 1_000_000;

/// Pure function to validate a number field width
pub fn validate_field_length(length: usize) -> Result<()> {
    if !(1..=MAX_FIELD_LENGTH).contains(&length) {
        return Err(Error::InvalidFieldLength {
            length,
            max: MAX_FIELD_LENGTH,
        });
    }
    Ok(())
}

/// Width and justification of the number field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberFieldSpec {
    /// `None` leaves the number string at its natural width.
    pub field_length: Option<usize>,
    #[serde(default)]
    pub justification: TextJustify,
}

impl NumberFieldSpec {
    pub fn new(field_length: usize, justification: TextJustify) -> Self {
        Self {
            field_length: Some(field_length),
            justification,
        }
    }

    /// No fixed field; output is as wide as its content.
    pub fn unbounded() -> Self {
        Self::default()
    }
}

/// Complete formatting parameters for a number string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumStrFormatSpec {
    pub decimal_separator: String,
    pub symbols: NumberSymbolGroup,
    pub field: NumberFieldSpec,
}

impl Default for NumStrFormatSpec {
    fn default() -> Self {
        Self {
            decimal_separator: ".".to_string(),
            symbols: NumberSymbolGroup::new_simple_signed_number(true),
            field: NumberFieldSpec::default(),
        }
    }
}

#[derive(Debug, Default)]
struct Zones {
    outside_leading: String,
    inside_leading: String,
    inside_trailing: String,
    outside_trailing: String,
}

impl Zones {
    fn leading_mut(&mut self, position: NumberFieldSymbolPosition) -> &mut String {
        match position {
            NumberFieldSymbolPosition::InsideNumField => &mut self.inside_leading,
            NumberFieldSymbolPosition::OutsideNumField => &mut self.outside_leading,
        }
    }

    fn trailing_mut(&mut self, position: NumberFieldSymbolPosition) -> &mut String {
        match position {
            NumberFieldSymbolPosition::InsideNumField => &mut self.inside_trailing,
            NumberFieldSymbolPosition::OutsideNumField => &mut self.outside_trailing,
        }
    }
}

/// Pure function to place sign and currency symbols into the four zones
/// surrounding the digits.
fn place_symbols(sign: &NumberSymbolSpec, currency: &NumberSymbolSpec) -> Zones {
    let mut zones = Zones::default();
    let currency_outside_sign =
        currency.currency_sign_position() == CurrencyNumSignRelativePosition::OutsideNumSign;

    let sign_leading = sign.leading_str();
    let currency_leading = currency.leading_str();
    if sign.leading_position() == currency.leading_position() {
        // Leading zone reads far-to-near: the outer symbol comes first.
        let zone = zones.leading_mut(sign.leading_position());
        if currency_outside_sign {
            zone.push_str(&currency_leading);
            zone.push_str(&sign_leading);
        } else {
            zone.push_str(&sign_leading);
            zone.push_str(&currency_leading);
        }
    } else {
        zones
            .leading_mut(sign.leading_position())
            .push_str(&sign_leading);
        zones
            .leading_mut(currency.leading_position())
            .push_str(&currency_leading);
    }

    let sign_trailing = sign.trailing_str();
    let currency_trailing = currency.trailing_str();
    if sign.trailing_position() == currency.trailing_position() {
        // Trailing zone reads near-to-far: the inner symbol comes first.
        let zone = zones.trailing_mut(sign.trailing_position());
        if currency_outside_sign {
            zone.push_str(&sign_trailing);
            zone.push_str(&currency_trailing);
        } else {
            zone.push_str(&currency_trailing);
            zone.push_str(&sign_trailing);
        }
    } else {
        zones
            .trailing_mut(sign.trailing_position())
            .push_str(&sign_trailing);
        zones
            .trailing_mut(currency.trailing_position())
            .push_str(&currency_trailing);
    }

    zones
}

impl NumStrFormatSpec {
    pub fn new(symbols: NumberSymbolGroup) -> Self {
        Self {
            symbols,
            ..Default::default()
        }
    }

    pub fn from_preset(preset: SymbolPreset) -> Self {
        Self::new(preset.to_group())
    }

    pub fn with_decimal_separator(mut self, separator: impl Into<String>) -> Self {
        self.decimal_separator = separator.into();
        self
    }

    pub fn with_field(mut self, field: NumberFieldSpec) -> Self {
        self.field = field;
        self
    }

    /// Format a plain decimal string.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidNumber`] when `value` is not a plain decimal
    /// - [`Error::NegativeSignNotConfigured`] when `value` is negative and
    ///   the negative sign spec is NOP
    /// - [`Error::InvalidFieldLength`] when the field is zero or wider than
    ///   [`MAX_FIELD_LENGTH`]
    pub fn format(&self, value: &str) -> Result<String> {
        let number = NumberString::parse(value)?;
        self.format_number(&number)
    }

    pub fn format_number(&self, number: &NumberString) -> Result<String> {
        if let Some(length) = self.field.field_length {
            validate_field_length(length)?;
        }

        let sign = number.sign();
        let sign_spec = self.symbols.symbols_for(sign);
        if sign == NumericSignValue::Negative && sign_spec.is_nop() {
            return Err(Error::NegativeSignNotConfigured);
        }

        let zones = place_symbols(sign_spec, self.symbols.currency());
        let inside = format!(
            "{}{}{}",
            zones.inside_leading,
            number.digits(&self.decimal_separator),
            zones.inside_trailing
        );

        let justified = match self.field.field_length {
            Some(length) => justify_text(&inside, length, self.field.justification),
            None => inside,
        };

        log::debug!(
            "Formatted {} value with field {:?}: outside leading '{}', outside trailing '{}'",
            sign,
            self.field.field_length,
            zones.outside_leading,
            zones.outside_trailing
        );

        Ok(format!(
            "{}{}{}",
            zones.outside_leading, justified, zones.outside_trailing
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_strips_leading_zeros() {
        let number = NumberString::parse("-000123.4500").unwrap();
        assert_eq!(number.sign(), NumericSignValue::Negative);
        assert_eq!(number.integer_digits(), "123");
        assert_eq!(number.fraction_digits(), Some("4500"));
    }

    #[test]
    fn test_parse_negative_zero_is_zero() {
        let number = NumberString::parse("-0.000").unwrap();
        assert_eq!(number.sign(), NumericSignValue::Zero);
        assert_eq!(number.digits(","), "0,000");
    }

    #[test]
    fn test_parse_rejects_malformed_values() {
        for bad in ["", "-", "12a", "1.2.3", ".5", "5.", "+-1", "1,5", " 1", "1\n"] {
            assert!(
                matches!(NumberString::parse(bad), Err(Error::InvalidNumber(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn test_signed_number_without_field() {
        let spec = NumStrFormatSpec::from_preset(SymbolPreset::SignedLeading);
        assert_eq!(spec.format("-123.456").unwrap(), "-123.456");
        assert_eq!(spec.format("123.456").unwrap(), "123.456");
    }

    #[test]
    fn test_outside_sign_is_added_after_justification() {
        let mut group = NumberSymbolGroup::new_nop();
        group.set_negative_symbols("-", "", NumberFieldSymbolPosition::OutsideNumField);
        let spec = NumStrFormatSpec::new(group)
            .with_field(NumberFieldSpec::new(8, TextJustify::Right));
        assert_eq!(spec.format("-123.45").unwrap(), "-  123.45");
    }

    #[test]
    fn test_inside_sign_is_justified_with_digits() {
        let spec = NumStrFormatSpec::from_preset(SymbolPreset::UsMinus)
            .with_field(NumberFieldSpec::new(8, TextJustify::Right));
        assert_eq!(spec.format("-123.45").unwrap(), " -123.45");
    }

    #[test]
    fn test_nop_negative_spec_is_an_error() {
        let spec = NumStrFormatSpec::new(NumberSymbolGroup::new_nop());
        assert!(matches!(
            spec.format("-1"),
            Err(Error::NegativeSignNotConfigured)
        ));
        assert_eq!(spec.format("1").unwrap(), "1");
    }

    #[test]
    fn test_field_length_is_bounded() {
        let spec = NumStrFormatSpec::from_preset(SymbolPreset::UkCurrency);
        for length in [0, MAX_FIELD_LENGTH + 1, usize::MAX] {
            let wide = spec
                .clone()
                .with_field(NumberFieldSpec::new(length, TextJustify::Right));
            assert!(matches!(
                wide.format("-1.5"),
                Err(Error::InvalidFieldLength { max, .. }) if max == MAX_FIELD_LENGTH
            ));
        }

        let widest = spec.with_field(NumberFieldSpec::new(MAX_FIELD_LENGTH, TextJustify::Left));
        assert_eq!(widest.format("-1.5").unwrap().chars().count(), MAX_FIELD_LENGTH);
    }

    #[test]
    fn test_currency_inside_sign_sits_next_to_digits() {
        let spec = NumStrFormatSpec::new(NumberSymbolGroup::currency_default_uk_minus_outside());
        assert_eq!(spec.format("-123.45").unwrap(), "-£ 123.45");
    }
}
