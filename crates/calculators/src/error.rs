use core_types::CoreError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    /// A required field is missing, zero, negative or out of order.
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    /// The arithmetic produced something that cannot be published (NaN, overflow).
    #[error("Calculation error: {0}")]
    Calculation(String),
}

impl CalculatorError {
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        CalculatorError::InvalidInput { field: field.to_string(), reason: reason.into() }
    }
}

impl From<CoreError> for CalculatorError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput(field, reason) => CalculatorError::InvalidInput { field, reason },
            other => CalculatorError::Calculation(other.to_string()),
        }
    }
}
