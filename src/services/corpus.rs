//! Scenario file discovery and line-count pre-scan

use crate::models::{CorpusInventory, ScenarioFile};
use crate::{Error, Result, ScrambleOptions};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Reads a file one line at a time, keeping each line's bytes exactly as
/// stored, terminator included. The final line need not end in `\n`.
pub struct LineReader {
    reader: BufReader<File>,
    buf: Vec<u8>,
}

impl LineReader {
    /// Open `path` for line-by-line reading
    pub fn open(path: &Path) -> io::Result<Self> {
        Ok(Self {
            reader: BufReader::new(File::open(path)?),
            buf: Vec::new(),
        })
    }

    /// Next raw line, or `None` at end of file
    pub fn next_line(&mut self) -> io::Result<Option<&[u8]>> {
        self.buf.clear();
        let read = self.reader.read_until(b'\n', &mut self.buf)?;
        if read == 0 {
            Ok(None)
        } else {
            Ok(Some(self.buf.as_slice()))
        }
    }
}

/// Count the lines of a file without retaining their contents
pub fn count_lines(path: &Path) -> io::Result<u64> {
    let mut reader = LineReader::open(path)?;
    let mut count = 0u64;
    while reader.next_line()?.is_some() {
        count += 1;
    }
    Ok(count)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(OsStr::to_str) == Some(extension)
}

/// The set of scenario files in one directory, in visiting order
#[derive(Debug, Clone)]
pub struct Corpus {
    root: PathBuf,
    files: Vec<ScenarioFile>,
}

impl Corpus {
    /// Enumerate scenario files directly under `root` and pre-scan their
    /// line counts. Subdirectories are not searched.
    pub fn discover<P: AsRef<Path>>(root: P, opts: &ScrambleOptions) -> Result<Self> {
        let root = root.as_ref();
        let root_display = root.to_string_lossy();

        if !root.exists() {
            return Err(Error::InvalidInput(format!(
                "Path does not exist: {root_display}"
            )));
        }

        if !root.is_dir() {
            return Err(Error::InvalidInput(format!(
                "Path is not a directory: {root_display}"
            )));
        }

        let extension = opts.extension.trim_start_matches('.');
        let mut paths = Vec::new();
        for entry in fs::read_dir(root)? {
            let entry = entry?;
            let path = entry.path();
            if !has_extension(&path, extension) {
                continue;
            }
            if !entry.file_type()?.is_file() && !path.is_file() {
                log::trace!("Skipping non-file entry: {}", path.display());
                continue;
            }
            paths.push(path);
        }

        if opts.sorted {
            paths.sort();
        }

        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            let line_count = count_lines(&path)?;
            log::debug!("Scenario file: {} ({line_count} lines)", path.display());
            files.push(ScenarioFile { path, line_count });
        }

        let corpus = Self {
            root: root.to_path_buf(),
            files,
        };

        log::debug!(
            "Discovered {} scenario files with {} eligible lines under {root_display}",
            corpus.files.len(),
            corpus.total_eligible()
        );

        Ok(corpus)
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn files(&self) -> &[ScenarioFile] {
        &self.files
    }

    /// Sum of data lines (all lines but the header) across every file
    #[must_use]
    pub fn total_eligible(&self) -> u64 {
        self.files.iter().map(ScenarioFile::eligible_lines).sum()
    }

    #[must_use]
    pub fn inventory(&self) -> CorpusInventory {
        CorpusInventory {
            root: self.root.to_string_lossy().to_string(),
            files: self.files.clone(),
            eligible_lines: self.total_eligible(),
        }
    }
}
