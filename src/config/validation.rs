//! Validation with error accumulation for configuration.
//!
//! Validation functions return stillwater's `Validation` so that every
//! problem in a `.numstr.toml` file is reported in one run instead of
//! stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use numstr::config::validation::validate_config;
//! use numstr::config::NumStrConfig;
//!
//! let config = NumStrConfig::default();
//! let validation = validate_config(&config);
//! assert!(validation.is_success());
//! ```

use stillwater::{NonEmptyVec, Validation};

use super::core::{FillerSection, FormatSection, NumStrConfig};
use crate::core::Error;
use crate::formatting::validate_field_length;
use crate::text::filler::{validate_filler_chars, validate_repeat_count};

/// Validation result accumulating every configuration error.
pub type ConfigValidation<T> = Validation<T, NonEmptyVec<Error>>;

pub fn validation_success<T>(value: T) -> ConfigValidation<T> {
    Validation::Success(value)
}

pub fn validation_failure<T>(error: Error) -> ConfigValidation<T> {
    Validation::Failure(NonEmptyVec::new(error, Vec::new()))
}

/// Pure function to turn collected errors into a validation
fn from_errors(errors: Vec<Error>) -> ConfigValidation<()> {
    match NonEmptyVec::from_vec(errors) {
        Some(errors) => Validation::Failure(errors),
        None => Validation::Success(()),
    }
}

/// Combine multiple validations, accumulating all errors.
pub fn combine_validations<T>(validations: Vec<ConfigValidation<T>>) -> ConfigValidation<Vec<T>> {
    let mut successes = Vec::new();
    let mut failures: Vec<Error> = Vec::new();

    for v in validations {
        match v {
            Validation::Success(value) => successes.push(value),
            Validation::Failure(errors) => failures.extend(errors),
        }
    }

    match NonEmptyVec::from_vec(failures) {
        Some(errors) => Validation::Failure(errors),
        None => Validation::Success(successes),
    }
}

/// Validate entire config, accumulating ALL errors.
pub fn validate_config(config: &NumStrConfig) -> ConfigValidation<()> {
    let validations = vec![
        validate_format_section(config.format.as_ref()),
        validate_filler_section(config.filler.as_ref()),
    ];

    combine_validations(validations).map(|_| ())
}

/// Collapse a validation into a single [`Error::Configuration`].
pub fn validate_config_result(config: &NumStrConfig) -> crate::core::Result<()> {
    run_validation(validate_config(config))
}

pub fn run_validation<T>(validation: ConfigValidation<T>) -> crate::core::Result<T> {
    match validation {
        Validation::Success(value) => Ok(value),
        Validation::Failure(errors) => {
            let messages: Vec<String> = errors.into_vec().iter().map(|e| e.to_string()).collect();
            Err(Error::configuration(messages.join("; ")))
        }
    }
}

fn validate_format_section(format: Option<&FormatSection>) -> ConfigValidation<()> {
    let Some(format) = format else {
        return validation_success(());
    };

    let mut errors = Vec::new();

    if format.decimal_separator.as_deref() == Some("") {
        errors.push(Error::configuration("Decimal separator cannot be empty"));
    }

    if let Some(Err(e)) = format.field_length.map(validate_field_length) {
        errors.push(e);
    }

    from_errors(errors)
}

fn validate_filler_section(filler: Option<&FillerSection>) -> ConfigValidation<()> {
    let Some(filler) = filler else {
        return validation_success(());
    };

    let chars: Vec<char> = filler.chars.chars().collect();
    let errors: Vec<Error> = [validate_filler_chars(&chars), validate_repeat_count(filler.count)]
        .into_iter()
        .filter_map(|r| r.err())
        .collect();

    from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(format: FormatSection, filler: Option<FillerSection>) -> NumStrConfig {
        NumStrConfig {
            format: Some(format),
            symbols: None,
            filler,
        }
    }

    #[test]
    fn test_validate_config_default_succeeds() {
        let result = validate_config(&NumStrConfig::default());
        assert!(result.is_success());
    }

    #[test]
    fn test_validate_accumulates_all_errors() {
        let config = config_with(
            FormatSection {
                decimal_separator: Some(String::new()),
                field_length: Some(0),
                ..Default::default()
            },
            Some(FillerSection {
                chars: String::new(),
                count: 0,
            }),
        );

        match validate_config(&config) {
            Validation::Failure(errors) => assert_eq!(errors.into_vec().len(), 4),
            Validation::Success(_) => panic!("expected validation failure"),
        }
    }

    #[test]
    fn test_validate_result_joins_messages() {
        let config = config_with(
            FormatSection {
                field_length: Some(0),
                ..Default::default()
            },
            None,
        );
        let err = validate_config_result(&config).unwrap_err();
        assert!(err.to_string().contains("Invalid field length 0"));
    }

    #[test]
    fn test_oversized_field_length_is_rejected() {
        let config = config_with(
            FormatSection {
                field_length: Some(usize::MAX),
                ..Default::default()
            },
            None,
        );
        let err = validate_config_result(&config).unwrap_err();
        assert!(err.to_string().contains("must be between 1 and 1000000"));
    }

    #[test]
    fn test_valid_filler_passes() {
        let config = config_with(
            FormatSection::default(),
            Some(FillerSection {
                chars: "=".to_string(),
                count: 10,
            }),
        );
        assert!(validate_config(&config).is_success());
    }

    #[test]
    fn test_combine_validations_collects_successes() {
        let combined = combine_validations(vec![validation_success(1), validation_success(2)]);
        match combined {
            Validation::Success(values) => assert_eq!(values, vec![1, 2]),
            Validation::Failure(_) => panic!("expected success"),
        }
        let failed: ConfigValidation<Vec<i32>> = combine_validations(vec![
            validation_success(1),
            validation_failure(Error::configuration("bad")),
        ]);
        assert!(failed.is_failure());
    }
}
