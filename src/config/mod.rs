//! `.numstr.toml` configuration: types, loading and validation.
//!
//! ```toml
//! [format]
//! preset = "us-currency"
//! decimal_separator = "."
//! field_length = 12
//! justification = "Right"
//!
//! [symbols.negative]
//! leading = "("
//! trailing = ")"
//! position = "InsideNumField"
//!
//! [filler]
//! chars = "-"
//! count = 20
//! ```

mod core;
mod loader;
pub mod validation;

// Re-export core types
pub use self::core::{
    apply_symbol_overrides, FillerSection, FormatSection, NumStrConfig, ResolvedConfig,
    SymbolOverride, SymbolsSection,
};

pub use loader::{
    directory_ancestors, load_config, load_config_file, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};

pub use validation::{validate_config, validate_config_result, ConfigValidation};

/// Default file written by `numstr init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# numstr configuration

[format]
preset = "signed-leading"
decimal_separator = "."
justification = "Right"

# Explicit symbols override the preset member of the same name.
# [symbols.negative]
# leading = "("
# trailing = ")"
# position = "InsideNumField"

[filler]
chars = "-"
count = 20
"#;
