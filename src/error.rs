use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("word list is empty")]
    EmptyWordList,

    /// The rejection loop for the first word of a record gave up. The word list must contain at
    /// least one word shorter than 16 bytes.
    #[error("no word shorter than 16 bytes found after {attempts} attempts")]
    NoQualifyingWord { attempts: usize },

    #[error("failed to fetch word list: {0}")]
    Http(#[from] reqwest::Error),

    #[error("word list request to {url} returned {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}
