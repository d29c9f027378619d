use std::fmt;

/// Width of every record in bytes.
pub const RECORD_SIZE: usize = 32;

/// Number of content bytes kept before padding. At least one null byte always terminates a
/// record.
pub const RECORD_CONTENT_LIMIT: usize = RECORD_SIZE - 1;

/// Byte placed between the two words of a record.
pub const SEPARATOR: u8 = b',';

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
/// A fixed-width record: `first,second` cut to 31 bytes and padded with `0x00` to 32.
pub struct Record([u8; RECORD_SIZE]);

impl Record {
    /// Encodes a pair of words into a record.
    ///
    /// The separator and the second word are subject to the same 31-byte cut as everything else,
    /// so a long first word can push them out of the record entirely.
    ///
    /// # Example
    /// ```
    /// # use wordrec::Record;
    /// let record = Record::encode(b"cat", b"dog");
    /// assert_eq!(record.content(), b"cat,dog");
    /// assert_eq!(record.as_bytes()[7..], [0; 25]);
    /// ```
    pub fn encode(first: &[u8], second: &[u8]) -> Self {
        let mut bytes = [0; RECORD_SIZE];
        let content = first
            .iter()
            .chain(std::iter::once(&SEPARATOR))
            .chain(second)
            .take(RECORD_CONTENT_LIMIT);
        for (slot, &byte) in bytes.iter_mut().zip(content) {
            *slot = byte;
        }
        Self(bytes)
    }

    pub fn from_bytes(bytes: [u8; RECORD_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; RECORD_SIZE] {
        &self.0
    }

    /// The bytes in front of the first null byte.
    pub fn content(&self) -> &[u8] {
        let end = self
            .0
            .iter()
            .position(|&byte| byte == 0)
            .unwrap_or(RECORD_SIZE);
        &self.0[..end]
    }

    /// Returns `true` if nothing but null bytes follows the first null byte.
    pub fn is_well_padded(&self) -> bool {
        self.0[self.content().len()..].iter().all(|&byte| byte == 0)
    }
}

impl AsRef<[u8]> for Record {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Record")
            .field(&String::from_utf8_lossy(self.content()))
            .finish()
    }
}
