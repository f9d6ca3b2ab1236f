//! Sample sinks receiving the header and selected lines as they are drawn.

use std::io;

/// Trait implemented by destinations for a sample.
pub trait SampleSink {
    /// Write the header line. A newline is appended.
    fn write_header(&mut self, header: &str) -> io::Result<()>;

    /// Record one selected line exactly as read, terminator included.
    fn record_line(&mut self, line: &[u8]) -> io::Result<()>;

    /// Finalize the sink once sampling stops.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub mod memory;
pub mod stream;

pub use memory::MemorySink;
pub use stream::StreamSink;
