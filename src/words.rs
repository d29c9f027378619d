use std::{
    fs,
    ops::Index,
    path::{Path, PathBuf},
    time::Duration,
};

use tracing::{debug, info};

use crate::{Error, Result};

/// The word list the sample data has always been generated from.
pub const DEFAULT_WORD_URL: &str =
    "http://svnweb.freebsd.org/csrg/share/dict/words?view=co&content-type=text/plain";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug, PartialEq, Eq)]
/// An ordered, non-empty list of words. Words are opaque byte strings.
pub struct WordList {
    words: Vec<Vec<u8>>,
}

impl WordList {
    /// Wraps `words`, rejecting an empty list.
    pub fn new(words: Vec<Vec<u8>>) -> Result<Self> {
        if words.is_empty() {
            return Err(Error::EmptyWordList);
        }
        Ok(Self { words })
    }

    /// Splits a text resource into one word per line.
    ///
    /// `\n`, `\r\n` and a lone `\r` all end a line. A terminator at the very end does not add an
    /// empty word, but empty lines in the middle are kept.
    ///
    /// # Example
    /// ```
    /// # use wordrec::WordList;
    /// let words = WordList::parse(b"cat\r\ndog\n\nemu\n").unwrap();
    /// assert_eq!(words.len(), 4);
    /// assert_eq!(&words[3], b"emu");
    /// ```
    pub fn parse(text: &[u8]) -> Result<Self> {
        let mut words = Vec::new();
        let mut start = 0;
        let mut pos = 0;
        while pos < text.len() {
            match text[pos] {
                b'\n' => {
                    words.push(text[start..pos].to_vec());
                    pos += 1;
                    start = pos;
                }
                b'\r' => {
                    words.push(text[start..pos].to_vec());
                    pos += if text.get(pos + 1) == Some(&b'\n') { 2 } else { 1 };
                    start = pos;
                }
                _ => pos += 1,
            }
        }
        if start < text.len() {
            words.push(text[start..].to_vec());
        }
        Self::new(words)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&[u8]> {
        self.words.get(index).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.words.iter().map(Vec::as_slice)
    }
}

impl Index<usize> for WordList {
    type Output = [u8];

    fn index(&self, index: usize) -> &[u8] {
        &self.words[index]
    }
}

/// Somewhere a [`WordList`] can be loaded from.
pub trait WordSource {
    fn fetch(&self) -> Result<WordList>;
}

#[derive(Clone, Debug)]
/// Downloads a newline-delimited word list with a single blocking GET. There are no retries.
pub struct HttpWordSource {
    url: String,
}

impl HttpWordSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpWordSource {
    fn default() -> Self {
        Self::new(DEFAULT_WORD_URL)
    }
}

impl WordSource for HttpWordSource {
    fn fetch(&self) -> Result<WordList> {
        debug!(url = %self.url, "fetching word list");
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let response = client.get(&self.url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                url: self.url.clone(),
                status,
            });
        }
        let body = response.bytes()?;
        let words = WordList::parse(&body)?;
        info!(url = %self.url, words = words.len(), "fetched word list");
        Ok(words)
    }
}

#[derive(Clone, Debug)]
/// Reads a newline-delimited word list from disk.
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl WordSource for FileWordSource {
    fn fetch(&self) -> Result<WordList> {
        let text = fs::read(&self.path)?;
        let words = WordList::parse(&text)?;
        info!(path = %self.path.display(), words = words.len(), "loaded word list");
        Ok(words)
    }
}

#[derive(Clone, Debug)]
/// A word list that is already in memory.
pub struct StaticWordSource {
    words: WordList,
}

impl StaticWordSource {
    pub fn new(words: WordList) -> Self {
        Self { words }
    }
}

impl WordSource for StaticWordSource {
    fn fetch(&self) -> Result<WordList> {
        Ok(self.words.clone())
    }
}
