use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid input for {0}: {1}")]
    InvalidInput(String, String),

    #[error("Unknown calculator id '{0}'")]
    UnknownCalculator(String),

    #[error("Value {0} cannot be represented as a decimal amount")]
    NonRepresentable(f64),
}
