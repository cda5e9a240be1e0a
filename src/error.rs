//! Error types for the rgb_hsi library

use thiserror::Error;

/// Result type alias for validated conversions and color parsing
pub type Result<T> = std::result::Result<T, ConversionError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// A channel or component fell outside the range its model allows
    #[error("Invalid input: {parameter} = {value} (expected {range})")]
    InvalidInput {
        parameter: &'static str,
        value: String,
        range: &'static str,
    },

    /// A color string could not be parsed
    #[error("Invalid color '{input}': {reason}")]
    InvalidColor { input: String, reason: String },
}

impl ConversionError {
    pub fn invalid_input(parameter: &'static str, value: impl ToString, range: &'static str) -> Self {
        Self::InvalidInput {
            parameter,
            value: value.to_string(),
            range,
        }
    }

    pub fn invalid_color(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidColor {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = ConversionError::invalid_input("red", 300, "0..=255");
        assert_eq!(err.to_string(), "Invalid input: red = 300 (expected 0..=255)");
    }

    #[test]
    fn test_invalid_color_message() {
        let err = ConversionError::invalid_color("#12", "expected 6 hex digits");
        assert_eq!(err.to_string(), "Invalid color '#12': expected 6 hex digits");
    }
}
