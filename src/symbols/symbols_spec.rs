//! Positive, negative and zero symbol specifications as one unit.

use super::spec::NumberSymbolSpec;
use crate::core::{NumberFieldSymbolPosition, NumericSignValue};
use serde::{Deserialize, Serialize};

/// Leading symbols, trailing symbols and their shared field position.
///
/// Used to build all three members of a [`NumberSymbolsSpec`] in one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbolTriple<T> {
    pub leading: T,
    pub trailing: T,
    pub position: NumberFieldSymbolPosition,
}

impl<T> SymbolTriple<T> {
    pub fn new(leading: T, trailing: T, position: NumberFieldSymbolPosition) -> Self {
        Self {
            leading,
            trailing,
            position,
        }
    }
}

impl SymbolTriple<&str> {
    pub(crate) fn to_spec(self) -> NumberSymbolSpec {
        NumberSymbolSpec::new_leading_trailing(
            self.leading,
            self.position,
            self.trailing,
            self.position,
        )
    }
}

impl SymbolTriple<&[char]> {
    pub(crate) fn to_spec(self) -> NumberSymbolSpec {
        NumberSymbolSpec::new_leading_trailing_runes(
            self.leading,
            self.position,
            self.trailing,
            self.position,
        )
    }
}

/// Number symbols applied to positive, negative and zero values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberSymbolsSpec {
    #[serde(default)]
    positive: NumberSymbolSpec,
    #[serde(default)]
    negative: NumberSymbolSpec,
    #[serde(default)]
    zero: NumberSymbolSpec,
}

impl NumberSymbolsSpec {
    pub fn new_nop() -> Self {
        Self::default()
    }

    pub fn new(
        positive: NumberSymbolSpec,
        negative: NumberSymbolSpec,
        zero: NumberSymbolSpec,
    ) -> Self {
        Self {
            positive,
            negative,
            zero,
        }
    }

    pub fn new_symbols_strings(
        positive: SymbolTriple<&str>,
        negative: SymbolTriple<&str>,
        zero: SymbolTriple<&str>,
    ) -> Self {
        let mut spec = Self::new_nop();
        spec.set_symbols_strings(positive, negative, zero);
        spec
    }

    pub fn new_symbols_runes(
        positive: SymbolTriple<&[char]>,
        negative: SymbolTriple<&[char]>,
        zero: SymbolTriple<&[char]>,
    ) -> Self {
        let mut spec = Self::new_nop();
        spec.set_symbols_runes(positive, negative, zero);
        spec
    }

    /// Currency symbols merged with a minus sign.
    ///
    /// A leading `"$"` yields `"$ 123.456"` and `"$ -123.456"`; a trailing
    /// `"€"` yields `"123.456 €"` and `"123.456- €"`. An empty currency
    /// produces a plain signed number.
    pub fn new_simple_currency(currency: &str, leading: bool) -> Self {
        let mut spec = Self::new_nop();
        spec.set_simple_currency(currency, leading);
        spec
    }

    /// A minus sign on negative values and nothing on positive or zero.
    pub fn new_simple_signed_number(leading: bool) -> Self {
        Self::new_simple_currency("", leading)
    }

    /// US convention: `"-123.45"`.
    pub fn signed_default_us_minus() -> Self {
        let mut spec = Self::new_nop();
        spec.set_signed_default_us_minus();
        spec
    }

    /// US accounting convention: `"(123.45)"`.
    pub fn signed_default_us_paren() -> Self {
        let mut spec = Self::new_nop();
        spec.set_signed_default_us_paren();
        spec
    }

    /// French convention: `"123,45-"`.
    pub fn signed_default_france() -> Self {
        let mut spec = Self::new_nop();
        spec.set_signed_default_france();
        spec
    }

    /// German convention: `"123,45-"`.
    pub fn signed_default_germany() -> Self {
        let mut spec = Self::new_nop();
        spec.set_signed_default_germany();
        spec
    }

    pub fn set_signed_default_us_minus(&mut self) {
        self.set_simple_signed_number(true);
    }

    pub fn set_signed_default_us_paren(&mut self) {
        self.empty();
        self.negative.set_leading_trailing(
            "(",
            NumberFieldSymbolPosition::InsideNumField,
            ")",
            NumberFieldSymbolPosition::InsideNumField,
        );
    }

    pub fn set_signed_default_france(&mut self) {
        self.set_simple_signed_number(false);
    }

    pub fn set_signed_default_germany(&mut self) {
        self.set_simple_signed_number(false);
    }

    // Getters

    pub fn positive(&self) -> &NumberSymbolSpec {
        &self.positive
    }

    pub fn negative(&self) -> &NumberSymbolSpec {
        &self.negative
    }

    pub fn zero(&self) -> &NumberSymbolSpec {
        &self.zero
    }

    /// The spec applied to values carrying `sign`.
    pub fn symbols_for(&self, sign: NumericSignValue) -> &NumberSymbolSpec {
        match sign {
            NumericSignValue::Negative => &self.negative,
            NumericSignValue::Zero => &self.zero,
            NumericSignValue::Positive => &self.positive,
        }
    }

    // NOP state

    pub fn is_nop(&self) -> bool {
        self.positive.is_nop() && self.negative.is_nop() && self.zero.is_nop()
    }

    pub fn is_nop_positive(&self) -> bool {
        self.positive.is_nop()
    }

    pub fn is_nop_negative(&self) -> bool {
        self.negative.is_nop()
    }

    pub fn is_nop_zero(&self) -> bool {
        self.zero.is_nop()
    }

    pub fn empty(&mut self) {
        self.positive.empty();
        self.negative.empty();
        self.zero.empty();
    }

    pub fn set_nop(&mut self) {
        self.empty();
    }

    pub fn empty_positive(&mut self) {
        self.positive.empty();
    }

    pub fn empty_negative(&mut self) {
        self.negative.empty();
    }

    pub fn empty_zero(&mut self) {
        self.zero.empty();
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

    pub fn copy_in(&mut self, other: &NumberSymbolsSpec) {
        self.clone_from(other);
    }

    // Setters

    pub fn set_symbols_specs(
        &mut self,
        positive: &NumberSymbolSpec,
        negative: &NumberSymbolSpec,
        zero: &NumberSymbolSpec,
    ) {
        self.positive.copy_in(positive);
        self.negative.copy_in(negative);
        self.zero.copy_in(zero);
    }

    /// Replace all three specs from leading/trailing strings.
    pub fn set_symbols_strings(
        &mut self,
        positive: SymbolTriple<&str>,
        negative: SymbolTriple<&str>,
        zero: SymbolTriple<&str>,
    ) {
        self.positive = positive.to_spec();
        self.negative = negative.to_spec();
        self.zero = zero.to_spec();
    }

    pub fn set_symbols_runes(
        &mut self,
        positive: SymbolTriple<&[char]>,
        negative: SymbolTriple<&[char]>,
        zero: SymbolTriple<&[char]>,
    ) {
        self.positive = positive.to_spec();
        self.negative = negative.to_spec();
        self.zero = zero.to_spec();
    }

    pub fn set_positive_spec(&mut self, spec: &NumberSymbolSpec) {
        self.positive.copy_in(spec);
    }

    pub fn set_negative_spec(&mut self, spec: &NumberSymbolSpec) {
        self.negative.copy_in(spec);
    }

    pub fn set_zero_spec(&mut self, spec: &NumberSymbolSpec) {
        self.zero.copy_in(spec);
    }

    pub fn set_positive_symbols(
        &mut self,
        leading: &str,
        trailing: &str,
        position: NumberFieldSymbolPosition,
    ) {
        self.positive = SymbolTriple::new(leading, trailing, position).to_spec();
    }

    pub fn set_positive_symbols_runes(
        &mut self,
        leading: &[char],
        trailing: &[char],
        position: NumberFieldSymbolPosition,
    ) {
        self.positive = SymbolTriple::new(leading, trailing, position).to_spec();
    }

    pub fn set_negative_symbols(
        &mut self,
        leading: &str,
        trailing: &str,
        position: NumberFieldSymbolPosition,
    ) {
        self.negative = SymbolTriple::new(leading, trailing, position).to_spec();
    }

    pub fn set_negative_symbols_runes(
        &mut self,
        leading: &[char],
        trailing: &[char],
        position: NumberFieldSymbolPosition,
    ) {
        self.negative = SymbolTriple::new(leading, trailing, position).to_spec();
    }

    pub fn set_zero_symbols(
        &mut self,
        leading: &str,
        trailing: &str,
        position: NumberFieldSymbolPosition,
    ) {
        self.zero = SymbolTriple::new(leading, trailing, position).to_spec();
    }

    pub fn set_zero_symbols_runes(
        &mut self,
        leading: &[char],
        trailing: &[char],
        position: NumberFieldSymbolPosition,
    ) {
        self.zero = SymbolTriple::new(leading, trailing, position).to_spec();
    }

    /// Reset all three members and apply the simple currency layout.
    pub fn set_simple_currency(&mut self, currency: &str, leading: bool) {
        self.empty();

        let inside = NumberFieldSymbolPosition::InsideNumField;
        let (unsigned, negative) = match (currency.is_empty(), leading) {
            (true, _) => (String::new(), "-".to_string()),
            (false, true) => (format!("{currency} "), format!("{currency} -")),
            (false, false) => (format!(" {currency}"), format!("- {currency}")),
        };

        if leading {
            self.positive.set_leading(&unsigned, inside);
            self.zero.set_leading(&unsigned, inside);
            self.negative.set_leading(&negative, inside);
        } else {
            self.positive.set_trailing(&unsigned, inside);
            self.zero.set_trailing(&unsigned, inside);
            self.negative.set_trailing(&negative, inside);
        }
    }

    pub fn set_simple_signed_number(&mut self, leading: bool) {
        self.set_simple_currency("", leading);
    }
}
