use thiserror::Error;

/// Top-level error type for the kinemath value types.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KinemathError {
    #[error(transparent)]
    Numeric(#[from] NumericError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Errors raised by numerically undefined operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericError {
    #[error("{type_name}: {operation} division by zero")]
    DivisionByZero {
        type_name: &'static str,
        operation: &'static str,
    },

    #[error("{type_name}: cannot normalize a zero-norm value")]
    ZeroNorm { type_name: &'static str },
}

/// Errors related to flat float-array layouts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("{type_name}: wrong flat array size, expected one of {expected:?}, given {given}")]
    SizeMismatch {
        type_name: &'static str,
        expected: &'static [usize],
        given: usize,
    },
}

/// Convenience type alias for results using [`KinemathError`].
pub type Result<T> = std::result::Result<T, KinemathError>;
