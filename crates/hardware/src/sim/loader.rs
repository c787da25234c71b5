//! Program Loader.
//!
//! This module fills memory before the run starts. It performs:
//! 1. **Token loading:** Decodes tokens from the console into consecutive words
//!    from index 0, stopping after the zero sentinel word or at end of input.
//!    A program too large for memory is rejected before anything is stored.
//! 2. **Image loading:** Copies already decoded words into memory verbatim.
//! 3. **File access:** Opens a program file as a buffered token source.
//!
//! The sentinel is stored like any other word; the run loop later executes it
//! as END. The loader never looks at opcode 15.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use crate::common::WordIndex;
use crate::common::constants::LOAD_SENTINEL;
use crate::common::error::{Result, VsmError};
use crate::core::memory::Memory;
use crate::isa::word::decode_word;
use crate::soc::Console;

/// Loads program tokens from `console` into memory starting at word 0.
///
/// Returns the number of words stored, the sentinel included.
///
/// # Errors
///
/// Returns `VsmError::MemoryOutOfBounds` if the program does not fit, or
/// `VsmError::Io` if reading fails.
pub fn load_program<C: Console + ?Sized>(memory: &mut Memory, console: &mut C) -> Result<usize> {
    let words = read_program(console)?;
    load_image(memory, &words)
}

/// Decodes program tokens from `console` up to and including the zero sentinel.
///
/// Tokens after the sentinel stay in the console for READ.
///
/// # Errors
///
/// Returns `VsmError::Io` if reading fails.
pub fn read_program<C: Console + ?Sized>(console: &mut C) -> Result<Vec<u16>> {
    let mut words = Vec::new();
    while let Some(token) = console.read_token()? {
        let word = decode_word(&token);
        words.push(word);
        if word == LOAD_SENTINEL {
            debug!(words = words.len(), "load sentinel reached");
            return Ok(words);
        }
    }
    debug!(words = words.len(), "input exhausted during load");
    Ok(words)
}

/// Copies `words` into memory starting at word 0, without sentinel handling.
///
/// # Errors
///
/// Returns `VsmError::MemoryOutOfBounds` if the image does not fit.
pub fn load_image(memory: &mut Memory, words: &[u16]) -> Result<usize> {
    let capacity = memory.capacity();
    if words.len() > capacity {
        return Err(VsmError::MemoryOutOfBounds {
            index: capacity,
            capacity,
        });
    }
    for (i, &word) in words.iter().enumerate() {
        memory.write(WordIndex::new(i), word)?;
    }
    Ok(words.len())
}

/// Opens a program file for buffered token reading.
///
/// # Errors
///
/// Returns `VsmError::Io` if the file cannot be opened.
pub fn open_program(path: impl AsRef<Path>) -> Result<BufReader<File>> {
    let file = File::open(path.as_ref())?;
    debug!(path = %path.as_ref().display(), "opened program file");
    Ok(BufReader::new(file))
}
