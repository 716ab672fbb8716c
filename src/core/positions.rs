//! Enumerations describing where symbols are placed and which sign a value carries.
//!
//! Every enumeration here parses case-insensitively from its canonical name,
//! displays as that name and serializes as that name, so the same spelling
//! works on the command line, in `.numstr.toml` and in JSON output.

use crate::core::errors::Error;
use std::fmt;
use std::str::FromStr;

macro_rules! named_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal, default = $default:ident {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            pub fn parse(s: &str) -> Option<Self> {
                let lower = s.trim().to_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().to_lowercase() == lower)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s).ok_or_else(|| Error::invalid_enum($kind, s))
            }
        }

        impl TryFrom<String> for $name {
            type Error = Error;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

named_enum! {
    /// Position of a number symbol relative to the number field.
    ///
    /// With a field length of 8 and the value `-123.45`:
    /// - `InsideNumField`:  `" -123.45"` (8 characters, the sign is justified with the digits)
    /// - `OutsideNumField`: `"-  123.45"` (9 characters, the sign is added after justification)
    NumberFieldSymbolPosition, "number field symbol position", default = InsideNumField {
        InsideNumField => "InsideNumField",
        OutsideNumField => "OutsideNumField",
    }
}

named_enum! {
    /// Position of a currency symbol relative to a number sign sharing its zone.
    ///
    /// `OutsideNumSign` gives `"$ -123.45"` and `"123.45- €"`;
    /// `InsideNumSign` gives `"-$123.45"` and `"123.45€-"`.
    CurrencyNumSignRelativePosition,
    "currency number sign relative position",
    default = OutsideNumSign {
        OutsideNumSign => "OutsideNumSign",
        InsideNumSign => "InsideNumSign",
    }
}

named_enum! {
    /// Sign classification of a numeric value.
    NumericSignValue, "numeric sign value", default = Zero {
        Negative => "Negative",
        Zero => "Zero",
        Positive => "Positive",
    }
}

named_enum! {
    /// Justification of text inside a fixed-width field.
    TextJustify, "text justification", default = Right {
        Left => "Left",
        Right => "Right",
        Center => "Center",
    }
}
