//! Console trait for program I/O.
//!
//! The VSM has a single input stream and a single output stream. The loader
//! and the READ instruction pull whitespace-separated tokens from the input;
//! WRITE pushes decimal values to the output. Both phases share one console,
//! so READ sees whatever tokens remain after the program's load sentinel.

use crate::common::error::Result;

/// Token source and value sink attached to the machine.
pub trait Console {
    /// Returns the next input token, or `None` once the input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns `VsmError::Io` if the underlying reader fails.
    fn read_token(&mut self) -> Result<Option<String>>;

    /// Emits one value as a decimal line.
    ///
    /// # Errors
    ///
    /// Returns `VsmError::Io` if the underlying writer fails.
    fn write_value(&mut self, value: u16) -> Result<()>;

    /// Flushes buffered output (default: nothing to flush).
    ///
    /// # Errors
    ///
    /// Returns `VsmError::Io` if the underlying writer fails.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
