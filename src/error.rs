//! Error types for the conversions that can fail.
//!
//! Classification (status, order type, flags, time-in-force, side, book action) never
//! fails. Only numeric parsing, decimal encoding, and payload decoding return errors.

use thiserror::Error;

/// Numeric conversion failure. Carries the name of the field that failed.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConvertError {
    /// A string-encoded field could not be parsed as a number.
    #[error("cannot parse {field} as a number: {value:?}")]
    Parse { field: &'static str, value: String },
    /// A float is NaN, infinite, or outside the decimal range.
    #[error("{field} is not a finite decimal: {value}")]
    InvalidNumber { field: &'static str, value: f64 },
}

/// Untyped exchange payload could not be decoded into a model.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("payload is not a JSON array")]
    NotAnArray,
    #[error("required field {field} is missing")]
    Missing { field: &'static str },
    #[error("field {field} has the wrong type, expected {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
}

/// Either failure, for callers that decode and convert in one step.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum TranslateError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Convert(#[from] ConvertError),
}
