//! Stream-backed console.
//!
//! This module implements [`Console`] over any `BufRead` + `Write` pair. It provides:
//! 1. **Tokenizing:** Splits raw input bytes on ASCII whitespace and cuts long
//!    runs into 16-byte tokens, the way a width-limited `%16s` scan would.
//!    Input need not be UTF-8; bytes outside ASCII become U+FFFD.
//! 2. **Output:** One decimal value per line.
//!
//! Input is read lazily, one line at a time, so an interactive READ blocks
//! only when it actually needs another token.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::common::constants::TOKEN_WIDTH;
use crate::common::error::Result;
use crate::soc::traits::Console;

/// Console reading tokens from `R` and writing values to `W`.
#[derive(Debug)]
pub struct StreamConsole<R, W> {
    reader: R,
    writer: W,
    pending: VecDeque<String>,
    eof: bool,
}

impl<R: BufRead, W: Write> StreamConsole<R, W> {
    /// Creates a console over the given reader and writer.
    pub const fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            pending: VecDeque::new(),
            eof: false,
        }
    }

    /// Returns a reference to the output sink.
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Consumes the console and returns the output sink.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Reads input lines until at least one token is pending or input ends.
    fn fill(&mut self) -> Result<()> {
        let mut line = Vec::new();
        while self.pending.is_empty() && !self.eof {
            line.clear();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                self.eof = true;
                break;
            }
            self.pending.extend(split_tokens(&line));
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Console for StreamConsole<R, W> {
    fn read_token(&mut self) -> Result<Option<String>> {
        self.fill()?;
        Ok(self.pending.pop_front())
    }

    fn write_value(&mut self, value: u16) -> Result<()> {
        writeln!(self.writer, "{value}")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Splits raw input into tokens of at most [`TOKEN_WIDTH`] bytes.
///
/// Separators are the C locale `isspace` set. Each byte becomes one character
/// of the token, so bit positions survive non-ASCII input.
///
/// ```
/// use vsm_core::soc::console::split_tokens;
///
/// let tokens: Vec<String> = split_tokens(b"0001 00000000000000001111").collect();
/// assert_eq!(tokens, ["0001", "0000000000000000", "1111"]);
///
/// let tokens: Vec<String> = split_tokens(b"1\xff1").collect();
/// assert_eq!(tokens, ["1\u{fffd}1"]);
/// ```
pub fn split_tokens(bytes: &[u8]) -> impl Iterator<Item = String> + '_ {
    bytes
        .split(|&b| is_separator(b))
        .filter(|run| !run.is_empty())
        .flat_map(|run| run.chunks(TOKEN_WIDTH).map(token_text))
}

const fn is_separator(b: u8) -> bool {
    b.is_ascii_whitespace() || b == 0x0B
}

fn token_text(chunk: &[u8]) -> String {
    chunk
        .iter()
        .map(|&b| {
            if b.is_ascii() {
                char::from(b)
            } else {
                char::REPLACEMENT_CHARACTER
            }
        })
        .collect()
}
