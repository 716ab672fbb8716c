//! Number string assembly and terminal output helpers.

pub mod number;
pub mod output;

pub use number::{
    validate_field_length, NumStrFormatSpec, NumberFieldSpec, NumberString, MAX_FIELD_LENGTH,
};
pub use output::{
    formatter_for, ColorMode, ColoredFormatter, FormattingConfig, OutputFormatter, PlainFormatter,
};
