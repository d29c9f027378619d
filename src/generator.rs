use std::io::Write;

use tracing::{debug, warn};

use crate::{
    record::{Record, RECORD_SIZE},
    rng::IndexSource,
    Error, Result, WordList,
};

/// The first word of a record must be strictly shorter than this many bytes.
pub const FIRST_WORD_LIMIT: usize = 16;

/// How many draws the first-word rejection loop makes before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1_000_000;

// Upper bound on the records `generate` reserves up front.
const MAX_PREALLOCATED: usize = 1 << 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Turns a byte budget and a word list into fixed-width records of random word pairs.
pub struct RecordGenerator {
    max_attempts: usize,
}

impl RecordGenerator {
    pub fn new() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Bounds the first-word rejection loop. A bound of zero is treated as one.
    pub fn with_max_attempts(max_attempts: usize) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Number of whole records that fit in `requested_bytes`. Any remainder is dropped.
    ///
    /// # Example
    /// ```
    /// # use wordrec::RecordGenerator;
    /// assert_eq!(RecordGenerator::record_count(10), 0);
    /// assert_eq!(RecordGenerator::record_count(64), 2);
    /// assert_eq!(RecordGenerator::record_count(95), 2);
    /// ```
    pub fn record_count(requested_bytes: u64) -> u64 {
        requested_bytes / RECORD_SIZE as u64
    }

    /// Generates `requested_bytes / 32` records.
    ///
    /// # Example
    /// ```
    /// # use wordrec::{RecordGenerator, Sequence, WordList};
    /// let words = WordList::new(vec![b"cat".to_vec(), b"dog".to_vec()]).unwrap();
    /// let mut source = Sequence::new([0, 1, 1, 0]);
    /// let records = RecordGenerator::new().generate(&words, 64, &mut source).unwrap();
    /// assert_eq!(records[0].content(), b"cat,dog");
    /// assert_eq!(records[1].content(), b"dog,cat");
    /// ```
    pub fn generate<S>(
        &self,
        words: &WordList,
        requested_bytes: u64,
        source: &mut S,
    ) -> Result<Vec<Record>>
    where
        S: IndexSource + ?Sized,
    {
        let count = Self::record_count(requested_bytes);
        if count == 0 {
            return Ok(Vec::new());
        }
        check_words(words)?;

        let capacity = usize::try_from(count)
            .map_or(MAX_PREALLOCATED, |count| count.min(MAX_PREALLOCATED));
        let mut records = Vec::with_capacity(capacity);
        self.each_record(words, count, source, |record| {
            records.push(record);
            Ok(())
        })?;
        Ok(records)
    }

    /// Generates records for `requested_bytes` and writes them straight to `sink`, returning the
    /// number of bytes written.
    pub fn write_to<S, W>(
        &self,
        words: &WordList,
        requested_bytes: u64,
        source: &mut S,
        mut sink: W,
    ) -> Result<u64>
    where
        S: IndexSource + ?Sized,
        W: Write,
    {
        let count = Self::record_count(requested_bytes);
        self.each_record(words, count, source, |record| {
            sink.write_all(record.as_bytes())?;
            Ok(())
        })?;
        Ok(count * RECORD_SIZE as u64)
    }

    fn each_record<S, F>(
        &self,
        words: &WordList,
        count: u64,
        source: &mut S,
        mut emit: F,
    ) -> Result<()>
    where
        S: IndexSource + ?Sized,
        F: FnMut(Record) -> Result<()>,
    {
        if count == 0 {
            return Ok(());
        }
        check_words(words)?;
        debug!(
            records = count,
            words = words.len(),
            max_attempts = self.max_attempts,
            "generating records"
        );

        for _ in 0..count {
            let first = self.pick_first(words, source)?;
            let second = &words[source.next_index(words.len())];
            emit(Record::encode(first, second))?;
        }
        Ok(())
    }

    /// Rejection-samples a word shorter than [`FIRST_WORD_LIMIT`].
    fn pick_first<'w, S>(&self, words: &'w WordList, source: &mut S) -> Result<&'w [u8]>
    where
        S: IndexSource + ?Sized,
    {
        for _ in 0..self.max_attempts {
            let word = &words[source.next_index(words.len())];
            if word.len() < FIRST_WORD_LIMIT {
                return Ok(word);
            }
        }
        Err(Error::NoQualifyingWord {
            attempts: self.max_attempts,
        })
    }
}

/// Fails before any draw if no word can ever be picked as a first word.
fn check_words(words: &WordList) -> Result<()> {
    if words.iter().any(|word| word.len() < FIRST_WORD_LIMIT) {
        return Ok(());
    }
    warn!(
        words = words.len(),
        "word list has no word shorter than {FIRST_WORD_LIMIT} bytes"
    );
    Err(Error::NoQualifyingWord { attempts: 0 })
}

impl Default for RecordGenerator {
    fn default() -> Self {
        Self::new()
    }
}
