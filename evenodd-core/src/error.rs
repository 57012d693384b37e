use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Missing input: name and number are both required")]
    MissingInput,

    #[error("Not a whole number: {0}")]
    NotAWholeNumber(String),

    #[error("Out of range: {0} does not fit in a 64-bit signed integer")]
    OutOfRange(String),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),
}

impl Error {
    /// Stable machine-readable code for API responses.
    pub fn code(&self) -> &'static str {
        match self {
            Error::MissingInput => "MISSING_INPUT",
            Error::NotAWholeNumber(_) => "NOT_A_WHOLE_NUMBER",
            Error::OutOfRange(_) => "OUT_OF_RANGE",
            Error::UnknownLanguage(_) => "UNKNOWN_LANGUAGE",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
