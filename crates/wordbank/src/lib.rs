use std::error::Error;
use std::fmt;

mod entry;
mod store;

pub use entry::{Column, VocabularyEntry};
pub use store::WordBank;

/// Default filename for the exported word document.
pub const BANK_FILENAME: &str = "words_database.json";

#[derive(Debug)]
pub enum ParseError {
    Json(serde_json::Error),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Json(error) => write!(f, "invalid words file: {error}"),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseError::Json(error) => Some(error),
        }
    }
}
