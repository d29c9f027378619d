//! Synthesizes sample data files of fixed-width word-pair records.
//!
//! Every record is 32 bytes: two words from a word list joined by a comma, cut to 31 bytes and
//! padded with null bytes. A run downloads the word list, writes `n / 32` records and drops any
//! remainder of the requested byte count.
//!
//! ```
//! # use wordrec::{RecordGenerator, Rng, WordList};
//! let words = WordList::parse(b"apple\nbanana\ncherry\n").unwrap();
//! let records = RecordGenerator::new()
//!     .generate(&words, 100, &mut Rng::with_seed(42))
//!     .unwrap();
//! assert_eq!(records.len(), 3);
//! assert!(records.iter().all(|r| r.as_bytes().len() == 32));
//! ```

mod config;
mod error;
mod generator;
#[cfg(feature = "rand")]
mod rand_support;
mod record;
mod rng;
mod sink;
mod words;


pub use config::{run, GenConfig, Summary};
pub use error::{Error, Result};
pub use generator::{RecordGenerator, DEFAULT_MAX_ATTEMPTS, FIRST_WORD_LIMIT};
#[cfg(feature = "rand")]
pub use rand_support::RandSource;
pub use record::{Record, RECORD_CONTENT_LIMIT, RECORD_SIZE, SEPARATOR};
pub use rng::{IndexSource, Rng, Sequence};
pub use sink::{write_records, FileSink};
pub use words::{
    FileWordSource, HttpWordSource, StaticWordSource, WordList, WordSource, DEFAULT_WORD_URL,
};
