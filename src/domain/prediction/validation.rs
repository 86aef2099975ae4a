//! Form input validation

use thiserror::Error;

use crate::domain::disease::FeatureField;

/// Lower bound applied to every input regardless of field
pub const MIN_INPUT_VALUE: f64 = 0.0;

/// Upper bound applied to every input regardless of field
pub const MAX_INPUT_VALUE: f64 = 1000.0;

/// Input validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputValidationError {
    /// Number of inputs does not match the number of fields
    #[error("Expected {expected} values, got {actual}")]
    WrongCount { expected: usize, actual: usize },

    /// At least one input does not parse as a number
    #[error("Please enter valid numeric values")]
    NotNumeric,

    /// At least one input is outside the blanket bounds
    #[error("Values should be between {} and {}", MIN_INPUT_VALUE, MAX_INPUT_VALUE)]
    OutOfBounds,

    /// An input is outside its field's declared range
    #[error("{label} should be between {min} and {max}")]
    OutOfFieldRange {
        label: &'static str,
        min: f64,
        max: f64,
    },
}

/// Parse raw inputs as floating point numbers
///
/// `nan` and `inf` parse; the bounds check rejects them.
pub fn parse_inputs<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<f64>, InputValidationError> {
    inputs
        .iter()
        .map(|raw| {
            raw.as_ref()
                .trim()
                .parse::<f64>()
                .map_err(|_| InputValidationError::NotNumeric)
        })
        .collect()
}

/// Check every value against the blanket bounds
pub fn validate_bounds(values: &[f64]) -> Result<(), InputValidationError> {
    if values
        .iter()
        .all(|v| (MIN_INPUT_VALUE..=MAX_INPUT_VALUE).contains(v))
    {
        Ok(())
    } else {
        Err(InputValidationError::OutOfBounds)
    }
}

/// Check every value against its own field's declared range
pub fn validate_field_ranges(
    values: &[f64],
    fields: &[FeatureField],
) -> Result<(), InputValidationError> {
    for (value, field) in values.iter().zip(fields) {
        if !field.contains(*value) {
            return Err(InputValidationError::OutOfFieldRange {
                label: field.label,
                min: field.min,
                max: field.max,
            });
        }
    }

    Ok(())
}

/// Validate raw form inputs for a set of fields, returning the feature vector
pub fn validate_inputs<S: AsRef<str>>(
    inputs: &[S],
    fields: &[FeatureField],
    enforce_field_ranges: bool,
) -> Result<Vec<f64>, InputValidationError> {
    if inputs.len() != fields.len() {
        return Err(InputValidationError::WrongCount {
            expected: fields.len(),
            actual: inputs.len(),
        });
    }

    let values = parse_inputs(inputs)?;
    validate_bounds(&values)?;

    if enforce_field_ranges {
        validate_field_ranges(&values, fields)?;
    }

    Ok(values)
}
