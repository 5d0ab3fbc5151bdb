use thiserror::Error;

/// If the condition is not met, return a `ParameterInvalid` error. Borrowed in spirit from the
/// `ensure!` pattern of the `anyhow` crate.
macro_rules! ensure {
    ($cond:expr, $kind:ident, $msg:literal $(,)?) => {
        if !$cond {
            return Err($crate::Error::$kind($msg.into()));
        }
    };
}

pub(crate) use ensure;

/// The error taxonomy for every fallible operation in this crate.
///
/// Validation errors (`ParameterInvalid`, `ShapeMismatch`) are returned synchronously before any
/// allocation or randomness draw; `EntropyUnavailable` can only arise from a randomized entry
/// point (key generation, encryption).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A scalar parameter (`s`, `l`, a row index, a parsed field) was zero, malformed, or
    /// otherwise outside its valid domain.
    #[error("parameter invalid: {0}")]
    ParameterInvalid(String),

    /// Two operands that must agree in shape (ciphertext length, row width, entry count)
    /// disagreed.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// The operating system's cryptographic entropy source could not be read.
    #[error("entropy source unavailable")]
    EntropyUnavailable,
}
