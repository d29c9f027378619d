use std::path::PathBuf;

use tracing::info;

use crate::{
    generator::{RecordGenerator, DEFAULT_MAX_ATTEMPTS},
    rng::IndexSource,
    sink::FileSink,
    words::WordSource,
    Result,
};

#[derive(Clone, Debug, PartialEq, Eq)]
/// Everything one generation run needs besides its word source and randomness.
pub struct GenConfig {
    /// Byte budget. Only whole 32-byte records are written.
    pub requested_bytes: u64,
    /// File the records are written to. It is replaced only when the run succeeds.
    pub output: PathBuf,
    /// Bound on the first-word rejection loop.
    pub max_attempts: usize,
}

impl GenConfig {
    pub fn new(requested_bytes: u64, output: impl Into<PathBuf>) -> Self {
        Self {
            requested_bytes,
            output: output.into(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// What a finished run produced.
pub struct Summary {
    pub words: usize,
    pub records: u64,
    pub bytes: u64,
}

/// Fetches the word list, generates the records and writes them to `config.output`.
pub fn run<W, S>(config: &GenConfig, words: &W, source: &mut S) -> Result<Summary>
where
    W: WordSource + ?Sized,
    S: IndexSource + ?Sized,
{
    let list = words.fetch()?;
    let generator = RecordGenerator::with_max_attempts(config.max_attempts);

    let mut sink = FileSink::create(&config.output)?;
    generator.write_to(&list, config.requested_bytes, source, &mut sink)?;
    let bytes = sink.finish()?;

    let summary = Summary {
        words: list.len(),
        records: RecordGenerator::record_count(config.requested_bytes),
        bytes,
    };
    info!(
        output = %config.output.display(),
        records = summary.records,
        bytes = summary.bytes,
        "wrote records"
    );
    Ok(summary)
}
