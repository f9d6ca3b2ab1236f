//! In-memory sink retaining the sample for callers that inspect it afterwards.

use super::SampleSink;
use std::io;

#[derive(Debug, Default)]
pub struct MemorySink {
    header: Option<String>,
    lines: Vec<Vec<u8>>,
    finished: bool,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    #[must_use]
    pub fn lines(&self) -> &[Vec<u8>] {
        &self.lines
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The full output as a stream sink would have written it.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        if let Some(header) = &self.header {
            out.extend_from_slice(header.as_bytes());
            out.push(b'\n');
        }
        for line in &self.lines {
            out.extend_from_slice(line);
        }
        out
    }
}

impl SampleSink for MemorySink {
    fn write_header(&mut self, header: &str) -> io::Result<()> {
        self.header = Some(header.to_string());
        Ok(())
    }

    fn record_line(&mut self, line: &[u8]) -> io::Result<()> {
        self.lines.push(line.to_vec());
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.finished = true;
        Ok(())
    }
}
