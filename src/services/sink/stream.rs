//! Streaming sink writing each selected line to a writer as soon as it is drawn.

use super::SampleSink;
use std::io::{self, Write};

pub struct StreamSink<W: Write> {
    writer: W,
    lines_written: u64,
}

impl<W: Write> StreamSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            lines_written: 0,
        }
    }

    /// Data lines written so far, header excluded
    #[must_use]
    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SampleSink for StreamSink<W> {
    fn write_header(&mut self, header: &str) -> io::Result<()> {
        writeln!(self.writer, "{header}")
    }

    fn record_line(&mut self, line: &[u8]) -> io::Result<()> {
        self.writer.write_all(line)?;
        self.lines_written += 1;
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
