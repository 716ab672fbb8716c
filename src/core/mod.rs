//! Core building blocks shared by the symbol, filler and formatting modules.

pub mod errors;
pub mod positions;
pub mod runes;

pub use errors::{Error, Result};
pub use positions::{
    CurrencyNumSignRelativePosition, NumberFieldSymbolPosition, NumericSignValue, TextJustify,
};
pub use runes::RuneArray;
