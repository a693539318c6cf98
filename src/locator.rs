use std::io::{BufRead, Write};

use tracing::{debug, trace};

use crate::{
    error::Error,
    ordinal::Ordinal,
    scanner::{LineScanner, ScanLines, ScanOutcome, Terminator},
    Result, DELIMITER,
};

/// A located line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    ordinal: Ordinal,
    content: Vec<u8>,
    terminator: Terminator,
}

impl Line {
    #[inline]
    pub fn ordinal(&self) -> Ordinal {
        self.ordinal
    }

    /// The raw content of the line without the delimiter
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.content
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.content
    }

    /// Returns the content as `String`. Fails if the line isn't valid UTF-8.
    pub fn into_string(self) -> Result<String> {
        Ok(String::from_utf8(self.content)?)
    }

    /// Returns `false` if this was the last line of the input and it wasn't terminated by \n
    #[inline]
    pub fn has_delimiter(&self) -> bool {
        self.terminator == Terminator::Delimiter
    }

    /// Writes the content followed by a single \n into `writer`, regardless of whether the input
    /// line had one. Returns the amount of bytes written.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<usize> {
        writer.write_all(&self.content).map_err(Error::Write)?;
        writer.write_all(&[DELIMITER]).map_err(Error::Write)?;
        writer.flush().map_err(Error::Write)?;
        Ok(self.content.len() + 1)
    }
}

/// Line counting state shared by the sync and async locators. Fed one scan outcome at a time, it
/// decides whether the search is over.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Search {
    target: Ordinal,
    /// Line number of the next line to be read
    current: u64,
}

impl Search {
    #[inline]
    pub(crate) fn new(target: Ordinal) -> Search {
        Self { target, current: 1 }
    }

    /// Returns `None` if more lines have to be read.
    pub(crate) fn advance(&mut self, outcome: ScanOutcome) -> Option<Result<Line>> {
        match outcome {
            ScanOutcome::Line {
                content,
                terminator,
            } => {
                if self.current == self.target.get() {
                    debug!(line = self.current, len = content.len(), "found line");
                    return Some(Ok(Line {
                        ordinal: self.target,
                        content,
                        terminator,
                    }));
                }

                trace!(line = self.current, len = content.len(), "skipped line");
                self.current += 1;
                None
            }
            ScanOutcome::Exhausted => {
                let lines = self.current - 1;
                debug!(ordinal = self.target.get(), lines, "input exhausted");
                Some(Err(Error::NotFound {
                    ordinal: self.target.get(),
                    lines,
                }))
            }
        }
    }
}

/// Finding a line by its line number on top of `ScanLines`.
pub trait LocateLine: ScanLines {
    /// Reads lines until `target` is reached and returns it. Nothing after the target line gets
    /// read. Only one line is held in memory at a time.
    ///
    /// Returns `Error::NotFound` holding the amount of lines seen if the input ends first.
    fn locate(&mut self, target: Ordinal) -> Result<Line> {
        let mut search = Search::new(target);
        loop {
            let outcome = self.next_line()?;
            if let Some(result) = search.advance(outcome) {
                return result;
            }
        }
    }
}

impl<R: BufRead> LocateLine for LineScanner<R> {}

/// Returns line `target` of `reader`.
#[inline]
pub fn locate<R: BufRead>(reader: R, target: Ordinal) -> Result<Line> {
    LineScanner::new(reader).locate(target)
}
