use std::{
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::{record::Record, Result};

/// Writes `records` back to back with no framing and returns the number of bytes written.
pub fn write_records<'a, I, W>(records: I, mut sink: W) -> Result<u64>
where
    I: IntoIterator<Item = &'a Record>,
    W: Write,
{
    let mut written = 0;
    for record in records {
        sink.write_all(record.as_bytes())?;
        written += record.as_bytes().len() as u64;
    }
    sink.flush()?;
    Ok(written)
}

#[derive(Debug)]
/// A buffered output file that counts what goes through it.
///
/// Bytes go to a temporary file next to the target. The target is only replaced by
/// [`FileSink::finish`]; dropping the sink instead leaves any existing file untouched.
pub struct FileSink {
    writer: BufWriter<NamedTempFile>,
    path: PathBuf,
    written: u64,
}

impl FileSink {
    /// Prepares to write `path`. Nothing at `path` changes until `finish`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let file = NamedTempFile::new_in(dir)?;
        Ok(Self {
            writer: BufWriter::new(file),
            path,
            written: 0,
        })
    }

    /// Flushes the buffer, moves the file into place and returns the total number of bytes
    /// written.
    pub fn finish(self) -> Result<u64> {
        let file = self.writer.into_inner().map_err(|err| err.into_error())?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(io::Error::from)?;
        Ok(self.written)
    }
}

impl Write for FileSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.writer.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
