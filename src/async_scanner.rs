use std::path::Path;

use async_std::{
    fs,
    io::{BufReader, Bytes, Read, ReadExt},
    stream::StreamExt,
};
use async_trait::async_trait;
use tracing::debug;

use crate::{
    buffer::{LineBuffer, INITIAL_CAPACITY},
    error::Error,
    locator::{Line, Search},
    ordinal::Ordinal,
    scanner::{ScanOutcome, Terminator},
    Result, DELIMITER,
};

/// Async version of `ScanLines`
#[async_trait]
pub trait AsyncScanLines {
    /// Should read the next line, omitting the \n. Returns `ScanOutcome::Exhausted` once the
    /// source is empty.
    async fn next_line(&mut self) -> Result<ScanOutcome>;
}

/// Async version of `LocateLine`
#[async_trait]
pub trait AsyncLocateLine: AsyncScanLines + Send {
    /// Reads lines until `target` is reached and returns it. See `LocateLine::locate`.
    async fn locate(&mut self, target: Ordinal) -> Result<Line> {
        let mut search = Search::new(target);
        loop {
            let outcome = self.next_line().await?;
            if let Some(result) = search.advance(outcome) {
                return result;
            }
        }
    }
}

/// A `LineScanner` on top of an `async_std::io::Read`.
#[derive(Debug)]
pub struct AsyncLineScanner<R: Read + Unpin + Send> {
    bytes: Bytes<R>,
    initial_capacity: usize,
}

impl<R: Read + Unpin + Send> AsyncLineScanner<R> {
    #[inline]
    pub fn new(reader: R) -> AsyncLineScanner<R> {
        Self::with_initial_capacity(reader, INITIAL_CAPACITY)
    }

    #[inline]
    pub fn with_initial_capacity(reader: R, capacity: usize) -> AsyncLineScanner<R> {
        Self {
            bytes: reader.bytes(),
            initial_capacity: capacity,
        }
    }
}

#[async_trait]
impl<R: Read + Unpin + Send> AsyncScanLines for AsyncLineScanner<R> {
    async fn next_line(&mut self) -> Result<ScanOutcome> {
        let mut line = LineBuffer::with_capacity(self.initial_capacity)?;

        while let Some(byte) = self.bytes.next().await {
            match byte.map_err(Error::Read)? {
                DELIMITER => return Ok(line.finish(Terminator::Delimiter)),
                byte => line.push(byte)?,
            }
        }

        Ok(line.finish(Terminator::EndOfStream))
    }
}

impl<R: Read + Unpin + Send> AsyncLocateLine for AsyncLineScanner<R> {}

/// Opens the file at `path` for async line scanning.
pub async fn open_async<P: AsRef<Path>>(path: P) -> Result<AsyncLineScanner<BufReader<fs::File>>> {
    let path = path.as_ref();
    let file = fs::File::open(async_std::path::Path::new(path.as_os_str()))
        .await
        .map_err(|source| Error::Open {
            path: path.into(),
            source,
        })?;
    debug!(path = %path.display(), "opened file");
    Ok(AsyncLineScanner::new(BufReader::new(file)))
}
