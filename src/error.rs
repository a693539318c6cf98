use std::{collections::TryReserveError, io, path::PathBuf, string::FromUtf8Error};

use thiserror::Error;

use crate::ordinal::ParseOrdinalError;

/// Exit code for read, write, open and allocation failures
pub const EXIT_RUNTIME: u8 = 1;
/// Exit code for bad arguments
pub const EXIT_ARGUMENT: u8 = 2;
/// Exit code for a line number past the end of the input
pub const EXIT_RANGE: u8 = 3;

#[derive(Debug, Error)]
pub enum Error {
    /// The requested line number could not be parsed or is not positive
    #[error(transparent)]
    Ordinal(#[from] ParseOrdinalError),

    #[error("cannot open '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("read failed: {0}")]
    Read(#[source] io::Error),

    #[error("write failed: {0}")]
    Write(#[source] io::Error),

    /// The input ended before the requested line. `lines` is the amount of lines that were seen.
    #[error("line {ordinal} not found (input has {lines} {})", plural_lines(*.lines))]
    NotFound { ordinal: u64, lines: u64 },

    /// Growing a line buffer failed
    #[error("memory allocation failed (line too long, needed {requested} bytes)")]
    Allocation {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("line is not valid UTF-8")]
    Utf8(#[from] FromUtf8Error),
}

impl Error {
    /// Process exit code the `line` binary reports for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Ordinal(_) => EXIT_ARGUMENT,
            Error::NotFound { .. } => EXIT_RANGE,
            Error::Open { .. }
            | Error::Read(_)
            | Error::Write(_)
            | Error::Allocation { .. }
            | Error::Utf8(_) => EXIT_RUNTIME,
        }
    }
}

/// "line" or "lines", depending on `count`.
pub fn plural_lines(count: u64) -> &'static str {
    if count == 1 {
        "line"
    } else {
        "lines"
    }
}
