//! SSF output formatter

use super::OutputFormatter;
use anyhow::Result;
use ssftok_core::{ssf, Sentence};
use std::io::Write;

/// SSF formatter - numbers sentences from 1 and writes one block each
pub struct SsfFormatter<W: Write> {
    writer: W,
    next_id: usize,
    block: String,
}

impl<W: Write> SsfFormatter<W> {
    /// Create a new SSF formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            next_id: 1,
            block: String::new(),
        }
    }

    /// Number of sentences written so far
    pub fn sentence_count(&self) -> usize {
        self.next_id - 1
    }
}

impl<W: Write> OutputFormatter for SsfFormatter<W> {
    fn format_sentence(&mut self, sentence: &Sentence) -> Result<()> {
        if sentence.is_empty() {
            return Ok(());
        }

        self.block.clear();
        ssf::write_block(&mut self.block, self.next_id, sentence);
        self.writer.write_all(self.block.as_bytes())?;
        self.next_id += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
