//!A small library to pick a single line out of a file or stream by its line number, without
//!reading more of the input than needed.

/// Async scanning on top of async-std
#[cfg(feature = "async")]
pub mod async_scanner;
/// The growable buffer lines are read into
pub mod buffer;
pub mod error;
/// Counting lines until the requested one shows up
pub mod locator;
/// 1-based line numbers
pub mod ordinal;
/// Reading lines from a `BufRead`
pub mod scanner;
/// Stdin or a file
pub mod source;

#[cfg(feature = "async")]
pub use async_scanner::{open_async, AsyncLineScanner, AsyncLocateLine, AsyncScanLines};
pub use error::Error;
pub use locator::{locate, Line, LocateLine};
pub use ordinal::{Ordinal, ParseOrdinalError};
pub use scanner::{LineScanner, ScanLines, ScanOutcome, Terminator};
pub use source::{Input, Source};

pub type Result<T> = std::result::Result<T, error::Error>;

/// The only byte separating lines. A \r in front of it stays part of the line.
pub const DELIMITER: u8 = b'\n';

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::read;

    #[test]
    fn test_empty() {
        let source = Source::File("./testfiles/empty".into());
        let res = locate(source.open().unwrap(), Ordinal::FIRST);
        assert!(matches!(res, Err(Error::NotFound { lines: 0, .. })));
    }

    #[test]
    fn test() {
        let input_files = &["simple", "crlf", "mixed"];

        for input_file in input_files {
            let file = format!("./testfiles/{}", input_file);
            let source = Source::File(file.clone().into());
            test_sequentially(&source, &file);
        }
    }

    /// Compares every line against splitting the whole file in memory
    fn test_sequentially(source: &Source, original_file: &str) {
        let content = read(original_file).unwrap();
        let mut expected: Vec<&[u8]> = content.split(|b| *b == DELIMITER).collect();
        if content.last() == Some(&DELIMITER) {
            expected.pop();
        }

        for (i, original) in expected.iter().enumerate() {
            let ordinal = Ordinal::new(i as u64 + 1).unwrap();
            let read = locate(source.open().unwrap(), ordinal);

            assert!(read.is_ok());
            assert_eq!(*original, read.unwrap().as_bytes());
        }

        // One past the last line
        let past = Ordinal::new(expected.len() as u64 + 1).unwrap();
        match locate(source.open().unwrap(), past) {
            Err(Error::NotFound { ordinal, lines }) => {
                assert_eq!(ordinal, past.get());
                assert_eq!(lines, expected.len() as u64);
            }
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_no_new_line() {
        let source = Source::File("./testfiles/crlf".into());

        let line = locate(source.open().unwrap(), Ordinal::new(4).unwrap()).unwrap();
        assert_eq!(line.as_bytes(), b"fourth");
        assert!(!line.has_delimiter());

        // Only \n splits lines
        let line = locate(source.open().unwrap(), Ordinal::new(3).unwrap()).unwrap();
        assert_eq!(line.as_bytes(), b"\r");
    }
}
