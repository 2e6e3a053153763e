use thiserror::Error;

/// Errors produced while reading parameters, converting messages, or encoding.
#[derive(Error, Debug)]
pub enum Error {
    /// `p < 2`, or `g`/`k` outside `[0, p)`.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// The parameter line did not hold three parsable unsigned integers.
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// A value does not fit the requested native width.
    #[error("Arithmetic overflow detected")]
    ArithmeticOverflow,

    #[error("Radix mismatch: {left} vs {right}")]
    RadixMismatch { left: u64, right: u64 },

    #[error("Operation not supported: {0}")]
    Unsupported(&'static str),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
