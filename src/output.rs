use crate::Result;
use std::io::{self, Write};
use tracing::debug;

/// Destination for the generated sequence.
pub trait OutputSink {
    /// Write the whole sequence text.
    fn write_sequence(&mut self, text: &str) -> Result<()>;
}

pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn write_sequence(&mut self, text: &str) -> Result<()> {
        debug!("Writing {} bytes", text.len());

        self.writer.write_all(text.as_bytes())?;
        self.writer.flush()?;

        Ok(())
    }
}
