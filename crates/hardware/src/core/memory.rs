//! VSM word memory.
//!
//! A fixed-capacity, zero-initialised array of 16-bit words. Every access is
//! bounds-checked and reports `VsmError::MemoryOutOfBounds` rather than
//! touching anything outside the array.

use crate::common::WordIndex;
use crate::common::error::{Result, VsmError};

/// Word-addressed memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    words: Vec<u16>,
}

impl Memory {
    /// Creates a zeroed memory of `capacity` words.
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity],
        }
    }

    /// Returns the capacity in words.
    pub fn capacity(&self) -> usize {
        self.words.len()
    }

    /// Reads one word.
    ///
    /// # Errors
    ///
    /// Returns `VsmError::MemoryOutOfBounds` if `index` is past the end.
    #[inline]
    pub fn read(&self, index: WordIndex) -> Result<u16> {
        self.words
            .get(index.val())
            .copied()
            .ok_or_else(|| self.out_of_bounds(index.val()))
    }

    /// Writes one word.
    ///
    /// # Errors
    ///
    /// Returns `VsmError::MemoryOutOfBounds` if `index` is past the end.
    #[inline]
    pub fn write(&mut self, index: WordIndex, value: u16) -> Result<()> {
        let capacity = self.capacity();
        let slot = self.words.get_mut(index.val()).ok_or(VsmError::MemoryOutOfBounds {
            index: index.val(),
            capacity,
        })?;
        *slot = value;
        Ok(())
    }

    /// Returns `len` words starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns `VsmError::MemoryOutOfBounds` naming the first missing index.
    pub fn segment(&self, start: usize, len: usize) -> Result<&[u16]> {
        let end = start.saturating_add(len);
        self.words
            .get(start..end)
            .ok_or_else(|| self.out_of_bounds(start.max(self.capacity())))
    }

    /// Returns the whole memory as a slice.
    pub fn as_slice(&self) -> &[u16] {
        &self.words
    }

    /// Zeroes every word.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    fn out_of_bounds(&self, index: usize) -> VsmError {
        VsmError::MemoryOutOfBounds {
            index,
            capacity: self.words.len(),
        }
    }
}
