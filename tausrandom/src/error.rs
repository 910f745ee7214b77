use thiserror::Error;

/// Errors raised at the host boundary.
///
/// The generator itself is total over its inputs and never fails; every
/// variant here is either a storage failure or a caller contract violation
/// caught before the generator runs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TausError {
    #[error("Out signal matrix could not be created: no storage for {len} words")]
    OutputAllocationFailure { len: u32 },

    #[error("Expected {expected} scalar arguments, got {actual}")]
    ArgumentCount { expected: usize, actual: usize },

    #[error("Argument {index} is not a valid unsigned 32-bit value: {value}")]
    InvalidScalar { index: usize, value: f64 },

    #[error("Argument {index} could not be parsed as an unsigned 32-bit value: {input:?}")]
    ParseScalar { index: usize, input: String },

    #[error("Output buffer holds {actual} words, expected {expected}")]
    BufferLength { expected: usize, actual: usize },
}
