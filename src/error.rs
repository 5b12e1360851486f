use std::fmt;

/// Errors returned by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The series (or the set of values a scale is fitted to) is empty.
    EmptySeries,
    /// A palette needs at least 2 stops; holds the number provided.
    PaletteTooShort(usize),
    /// The string is not a color this crate understands.
    InvalidColor(String),
    /// No built-in palette carries this name.
    UnknownPalette(String),
}

/// Result type of this crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Says whether the error rejects the shape of the input (empty
    /// series, palette with less than 2 stops) rather than its content.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::EmptySeries | Error::PaletteTooShort(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptySeries => write!(f, "invalid input: empty series"),
            Error::PaletteTooShort(n) => write!(
                f, "invalid input: a palette needs at least 2 stops, got {n}"),
            Error::InvalidColor(s) => write!(f, "not a color “{s}”"),
            Error::UnknownPalette(s) => write!(f, "unknown palette “{s}”"),
        }
    }
}

impl std::error::Error for Error {}
