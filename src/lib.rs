// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod formatting;
pub mod symbols;
pub mod text;

// Re-export commonly used types
pub use crate::core::{
    CurrencyNumSignRelativePosition, Error, NumberFieldSymbolPosition, NumericSignValue, Result,
    RuneArray, TextJustify,
};

pub use crate::symbols::{
    NegativeNumberSignSpec, NumberSymbolGroup, NumberSymbolSpec, NumberSymbolsSpec,
    PositiveNumberSignSpec, SymbolPreset, SymbolTriple,
};

pub use crate::text::{justify_text, TextFieldSpecFiller};

pub use crate::formatting::{NumStrFormatSpec, NumberFieldSpec, NumberString};

pub use crate::config::{load_config, NumStrConfig};
