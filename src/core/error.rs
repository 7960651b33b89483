use crate::core::survey::Field;
use thiserror::Error;

/// A survey answer label that could not be turned into its leading number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("label {0:?} contains no dash separator")]
    MissingSeparator(String),
    #[error("label {0:?} has nothing before the dash")]
    EmptyPrefix(String),
    #[error("label {0:?} does not start with a number")]
    InvalidPrefix(String),
}

/// A survey record that cannot be scored as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no answer given for {field}")]
    MissingField { field: Field },
    #[error("{field} is {value}, expected a value from 1 to {max}")]
    OutOfRange { field: Field, value: u8, max: u8 },
}
