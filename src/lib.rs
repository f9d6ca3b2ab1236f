//! Scenario Scrambler Library
//!
//! This library draws an approximate random sample of data lines from a
//! directory of scenario files. Every file starts with a header line that is
//! never sampled; the remaining lines are opaque records. Each eligible line
//! is kept with probability `amount / (amount + total)`, where `total` is the
//! number of eligible lines found by a one-time pre-scan. When a pass over the
//! corpus falls short of the target, sampling restarts from the first file.

pub mod cli;
pub mod models;
pub mod services;

pub use models::{CorpusInventory, ScenarioFile, ScrambleReport};
pub use services::sink::{MemorySink, SampleSink, StreamSink};

use rand::SeedableRng;
use rand::rngs::StdRng;
use services::corpus::Corpus;
use services::sample::{WeightedCoin, sample_corpus};
use std::path::Path;
use std::result;

/// Literal first line of every sample
pub const VERSION_HEADER: &str = "version 1";

/// Extension recognized when no other is configured
pub const DEFAULT_EXTENSION: &str = "scen";

/// Custom error type for the library
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    InvalidInput(String),
    Exhausted {
        requested: u64,
        emitted: u64,
        passes: u64,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Error::Exhausted {
                requested,
                emitted,
                passes,
            } => write!(
                f,
                "Corpus exhausted: requested {requested} lines but emitted {emitted} after {passes} passes"
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

pub type Result<T> = result::Result<T, Error>;

/// Options for a scramble run
#[derive(Debug, Clone)]
pub struct ScrambleOptions {
    /// File extension (without the dot) that marks scenario files
    pub extension: String,
    /// Seed for a reproducible run; entropy is used when absent
    pub seed: Option<u64>,
    /// Give up after this many full passes; unbounded when absent
    pub max_passes: Option<u64>,
    /// Visit files in path order rather than directory-listing order
    pub sorted: bool,
}

impl Default for ScrambleOptions {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            seed: None,
            max_passes: None,
            sorted: false,
        }
    }
}

/// Sample `amount` data lines from the scenario files under `root`
///
/// The corpus is pre-scanned before anything is written, so a missing or
/// unreadable directory fails without output. The header is then written,
/// followed by sampled lines until `amount` is reached.
///
/// # Arguments
/// * `root` - Directory holding the scenario files (not searched recursively)
/// * `amount` - Number of data lines to emit
/// * `opts` - Run options
/// * `sink` - Destination for the header and sampled lines
///
/// # Returns
/// A report describing the corpus and the run
pub fn scramble<P: AsRef<Path>>(
    root: P,
    amount: u64,
    opts: &ScrambleOptions,
    sink: &mut dyn SampleSink,
) -> Result<ScrambleReport> {
    if opts.max_passes == Some(0) {
        return Err(Error::InvalidInput(
            "max passes must be greater than zero".to_string(),
        ));
    }

    let corpus = Corpus::discover(&root, opts)?;
    let total = corpus.total_eligible();
    let coin = WeightedCoin::new(amount, total);

    let mut report = ScrambleReport {
        root: root.as_ref().to_string_lossy().to_string(),
        files: corpus.files().len(),
        eligible_lines: total,
        requested: amount,
        emitted: 0,
        passes: 0,
        seed: opts.seed,
        selection_probability: coin.probability(),
    };

    sink.write_header(VERSION_HEADER)?;

    if amount == 0 {
        sink.finish()?;
        return Ok(report);
    }

    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let outcome = sample_corpus(&corpus, &coin, opts.max_passes, &mut rng, sink);
    let flushed = sink.finish();
    let outcome = outcome?;
    flushed?;

    report.emitted = outcome.emitted;
    report.passes = outcome.passes;
    Ok(report)
}

/// Pre-scan the scenario files under `root` without sampling
///
/// Returns the same file list and eligible-line total a `scramble` run
/// would compute before writing its header.
pub fn inventory<P: AsRef<Path>>(root: P, opts: &ScrambleOptions) -> Result<CorpusInventory> {
    Ok(Corpus::discover(root, opts)?.inventory())
}
