use core::fmt;

/// Failures are rare: wraparound is the defined semantics, not an error.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// Native division with a zero divisor.
    DivisionByZero,
    /// The value does not fit in the requested (narrower) type.
    Overflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DivisionByZero => f.write_str("division by zero"),
            Error::Overflow => f.write_str("value does not fit"),
        }
    }
}

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;
