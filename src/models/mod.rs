//! Data models for scenario files, corpus inventories, and run reports

use serde::Serialize;
use std::path::PathBuf;

/// A scenario file found during discovery, with its pre-scanned line count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioFile {
    pub path: PathBuf,
    pub line_count: u64,
}

impl ScenarioFile {
    /// Lines after the header. An empty file has none.
    #[must_use]
    pub fn eligible_lines(&self) -> u64 {
        self.line_count.saturating_sub(1)
    }
}

/// Result of the pre-scan over every scenario file in a directory
#[derive(Debug, Clone, Serialize)]
pub struct CorpusInventory {
    pub root: String,
    pub files: Vec<ScenarioFile>,
    pub eligible_lines: u64,
}

/// Outcome of a completed scramble run
#[derive(Debug, Clone, Serialize)]
pub struct ScrambleReport {
    pub root: String,
    pub files: usize,
    pub eligible_lines: u64,
    pub requested: u64,
    pub emitted: u64,
    pub passes: u64,
    pub seed: Option<u64>,
    pub selection_probability: f64,
}
