//! Plain number sign specifications without field positions.

use super::spec::NumberSymbolSpec;
use crate::core::{NumberFieldSymbolPosition, RuneArray};
use serde::{Deserialize, Serialize};

macro_rules! sign_spec {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            #[serde(default)]
            leading: RuneArray,
            #[serde(default)]
            trailing: RuneArray,
        }

        impl $name {
            pub fn new_leading(symbols: &str) -> Self {
                Self {
                    leading: RuneArray::from(symbols),
                    trailing: RuneArray::new(),
                }
            }

            pub fn new_leading_runes(symbols: &[char]) -> Self {
                Self {
                    leading: RuneArray::from_chars(symbols),
                    trailing: RuneArray::new(),
                }
            }

            pub fn new_trailing(symbols: &str) -> Self {
                Self {
                    leading: RuneArray::new(),
                    trailing: RuneArray::from(symbols),
                }
            }

            pub fn new_trailing_runes(symbols: &[char]) -> Self {
                Self {
                    leading: RuneArray::new(),
                    trailing: RuneArray::from_chars(symbols),
                }
            }

            pub fn new_leading_trailing(leading: &str, trailing: &str) -> Self {
                Self {
                    leading: RuneArray::from(leading),
                    trailing: RuneArray::from(trailing),
                }
            }

            pub fn new_leading_trailing_runes(leading: &[char], trailing: &[char]) -> Self {
                Self {
                    leading: RuneArray::from_chars(leading),
                    trailing: RuneArray::from_chars(trailing),
                }
            }

            pub fn leading(&self) -> &RuneArray {
                &self.leading
            }

            pub fn leading_str(&self) -> String {
                self.leading.char_string()
            }

            pub fn trailing(&self) -> &RuneArray {
                &self.trailing
            }

            pub fn trailing_str(&self) -> String {
                self.trailing.char_string()
            }

            /// Replace the leading sign; an empty string clears it.
            pub fn set_leading(&mut self, symbols: &str) {
                self.leading = RuneArray::from(symbols);
            }

            pub fn set_leading_runes(&mut self, symbols: &[char]) {
                self.leading.set_chars(symbols);
            }

            /// Replace the trailing sign; an empty string clears it.
            pub fn set_trailing(&mut self, symbols: &str) {
                self.trailing = RuneArray::from(symbols);
            }

            pub fn set_trailing_runes(&mut self, symbols: &[char]) {
                self.trailing.set_chars(symbols);
            }

            pub fn empty(&mut self) {
                self.leading.clear();
                self.trailing.clear();
            }

            pub fn empty_leading(&mut self) {
                self.leading.clear();
            }

            pub fn empty_trailing(&mut self) {
                self.trailing.clear();
            }

            pub fn is_nop(&self) -> bool {
                self.leading.is_empty() && self.trailing.is_empty()
            }

            pub fn copy_in(&mut self, other: &Self) {
                self.clone_from(other);
            }

            /// Convert to a [`NumberSymbolSpec`] placing both sides at `position`.
            pub fn to_symbol_spec(&self, position: NumberFieldSymbolPosition) -> NumberSymbolSpec {
                NumberSymbolSpec::new_leading_trailing_runes(
                    self.leading.as_chars(),
                    position,
                    self.trailing.as_chars(),
                    position,
                )
            }
        }
    };
}

sign_spec! {
    /// Symbols marking a positive value, e.g. a leading `"+"`.
    PositiveNumberSignSpec
}

sign_spec! {
    /// Symbols marking a negative value, e.g. a leading `"-"` or `"("` and `")"`.
    NegativeNumberSignSpec
}
