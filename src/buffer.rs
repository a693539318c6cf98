use crate::{error::Error, scanner::ScanOutcome, scanner::Terminator, Result};

/// Capacity a fresh `LineBuffer` starts with
pub const INITIAL_CAPACITY: usize = 1024;

/// The bytes of a single line while it is being read. Grows by doubling its capacity and never
/// contains the delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    inner: Vec<u8>,
}

impl LineBuffer {
    /// Allocates a buffer holding up to `capacity` bytes before it has to grow. A capacity of 0
    /// is treated as 1 so doubling always makes progress.
    pub fn with_capacity(capacity: usize) -> Result<LineBuffer> {
        let mut inner = Vec::new();
        reserve(&mut inner, capacity.max(1))?;
        Ok(Self { inner })
    }

    /// Appends `byte`, doubling the capacity first if the buffer is full.
    #[inline]
    pub fn push(&mut self, byte: u8) -> Result<()> {
        debug_assert_ne!(byte, crate::DELIMITER);

        if self.inner.len() == self.inner.capacity() {
            let additional = self.inner.capacity().max(1);
            reserve(&mut self.inner, additional)?;
        }

        self.inner.push(byte);
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.inner
    }

    /// Turns the buffer into the outcome of a scan. An empty buffer ended by the end of the
    /// stream means there was no line left at all.
    pub(crate) fn finish(self, terminator: Terminator) -> ScanOutcome {
        if terminator == Terminator::EndOfStream && self.is_empty() {
            return ScanOutcome::Exhausted;
        }

        ScanOutcome::Line {
            content: self.inner,
            terminator,
        }
    }
}

fn reserve(buf: &mut Vec<u8>, additional: usize) -> Result<()> {
    buf.try_reserve_exact(additional)
        .map_err(|source| Error::Allocation {
            requested: buf.len().saturating_add(additional),
            source,
        })
}
