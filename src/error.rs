use thiserror::Error;

use crate::classifier::Category;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
    // config file loading
    #[error("Config error: {0}")]
    Config(String),
}

pub type LexicolorResult<T> = Result<T, Error>;

impl Error {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }
}

/// Raised while building a classifier, never while scanning.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("empty identifier in {category} vocabulary")]
    EmptyIdentifier { category: Category },
    #[error("'{word}' is not a valid identifier for the {category} vocabulary")]
    InvalidIdentifier { category: Category, word: String },
    #[error("failed to compile composite pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Input bytes that are not valid UTF-8. No classification is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("input is not valid UTF-8 (valid up to byte {valid_up_to})")]
pub struct DecodeError {
    pub valid_up_to: usize,
    #[source]
    source: std::str::Utf8Error,
}

impl From<std::str::Utf8Error> for DecodeError {
    fn from(source: std::str::Utf8Error) -> Self {
        Self {
            valid_up_to: source.valid_up_to(),
            source,
        }
    }
}
