use std::io::{BufRead, Bytes};

use crate::{buffer::LineBuffer, buffer::INITIAL_CAPACITY, error::Error, Result, DELIMITER};

/// What ended a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// The line ended with `\n`
    Delimiter,
    /// The stream ended before a `\n` showed up
    EndOfStream,
}

/// Result of reading one line from a stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// A line was read. `content` doesn't contain the delimiter.
    Line {
        content: Vec<u8>,
        terminator: Terminator,
    },
    /// The stream had no bytes left
    Exhausted,
}

/// Types which produce an input line by line.
pub trait ScanLines {
    /// Should read the next line, omitting the \n. Returns `ScanOutcome::Exhausted` once the
    /// source is empty, a final line without \n is still returned as a line.
    fn next_line(&mut self) -> Result<ScanOutcome>;
}

/// Reads lines of any length from a `BufRead`, one byte at a time.
#[derive(Debug)]
pub struct LineScanner<R: BufRead> {
    bytes: Bytes<R>,
    initial_capacity: usize,
}

impl<R: BufRead> LineScanner<R> {
    #[inline]
    pub fn new(reader: R) -> LineScanner<R> {
        Self::with_initial_capacity(reader, INITIAL_CAPACITY)
    }

    /// Creates a scanner which starts each line buffer with `capacity` bytes.
    #[inline]
    pub fn with_initial_capacity(reader: R, capacity: usize) -> LineScanner<R> {
        Self {
            bytes: reader.bytes(),
            initial_capacity: capacity,
        }
    }
}

impl<R: BufRead> ScanLines for LineScanner<R> {
    fn next_line(&mut self) -> Result<ScanOutcome> {
        let mut line = LineBuffer::with_capacity(self.initial_capacity)?;

        // `Bytes` already retries on `Interrupted`
        for byte in &mut self.bytes {
            match byte.map_err(Error::Read)? {
                DELIMITER => return Ok(line.finish(Terminator::Delimiter)),
                byte => line.push(byte)?,
            }
        }

        Ok(line.finish(Terminator::EndOfStream))
    }
}
