//! Byte address and word index types.
//!
//! VSM instructions encode memory references as byte addresses, while memory
//! itself is an array of 16-bit words. This module provides:
//! 1. **Type Safety:** Distinct types so a byte address is never used to index memory directly.
//! 2. **Conversion:** The single `byte / 2` conversion from byte address to word index.

use std::fmt;

/// A byte address as carried in the operand field of an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteAddr(pub u16);

/// An index into the word-addressed memory array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WordIndex(pub usize);

impl ByteAddr {
    /// Creates a new byte address from a raw operand value.
    #[inline(always)]
    pub const fn new(addr: u16) -> Self {
        Self(addr)
    }

    /// Returns the raw byte address value.
    #[inline(always)]
    pub const fn val(self) -> u16 {
        self.0
    }

    /// Converts the byte address into the word index it refers to.
    ///
    /// Words are two bytes wide, so the conversion is an integer division by two.
    /// An odd byte address refers to the same word as the even address below it.
    #[inline(always)]
    pub const fn word_index(self) -> WordIndex {
        WordIndex((self.0 / 2) as usize)
    }
}

impl WordIndex {
    /// Creates a new word index.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index value.
    #[inline(always)]
    pub const fn val(self) -> usize {
        self.0
    }

    /// Returns the index of the following word.
    #[inline(always)]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for WordIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ByteAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#05x}", self.0)
    }
}
