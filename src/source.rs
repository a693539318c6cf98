use std::{
    fmt::Display,
    fs,
    io::{self, BufRead, BufReader, Read, StdinLock},
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{error::Error, Result};

/// Where the lines come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// Standard input if `path` is `None`
    pub fn from_path<P: Into<PathBuf>>(path: Option<P>) -> Source {
        match path {
            Some(path) => Source::File(path.into()),
            None => Source::Stdin,
        }
    }

    /// Opens the source for reading. The returned `Input` closes the file once dropped.
    pub fn open(&self) -> Result<Input> {
        match self {
            Source::Stdin => {
                debug!("reading from stdin");
                Ok(Input::Stdin(io::stdin().lock()))
            }
            Source::File(path) => {
                let file = fs::File::open(path).map_err(|source| Error::Open {
                    path: path.clone(),
                    source,
                })?;
                debug!(path = %path.display(), "opened file");
                Ok(Input::File(BufReader::new(file)))
            }
        }
    }

    /// How the source is called in messages: "file" or "input"
    pub fn noun(&self) -> &'static str {
        match self {
            Source::Stdin => "input",
            Source::File(_) => "file",
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Source::Stdin => None,
            Source::File(path) => Some(path),
        }
    }
}

impl Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::Stdin => write!(f, "stdin"),
            Source::File(path) => write!(f, "'{}'", path.display()),
        }
    }
}

/// An opened `Source`
#[derive(Debug)]
pub enum Input {
    Stdin(StdinLock<'static>),
    File(BufReader<fs::File>),
}

impl Read for Input {
    #[inline]
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Input::Stdin(stdin) => stdin.read(buf),
            Input::File(file) => file.read(buf),
        }
    }
}

impl BufRead for Input {
    #[inline]
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            Input::Stdin(stdin) => stdin.fill_buf(),
            Input::File(file) => file.fill_buf(),
        }
    }

    #[inline]
    fn consume(&mut self, amt: usize) {
        match self {
            Input::Stdin(stdin) => stdin.consume(amt),
            Input::File(file) => file.consume(amt),
        }
    }
}
