//! Binary token conversion.
//!
//! Programs and READ input arrive as 16-character strings of '0' and '1',
//! most-significant bit first. Decoding is deliberately forgiving: any
//! character other than '1' is read as a zero bit, so malformed tokens are
//! coerced rather than rejected.

use crate::common::constants::{TOKEN_WIDTH, WORD_BITS};

/// Decodes a binary token into a 16-bit word.
///
/// Character 0 of a full-width token is bit 15 of the result. A token shorter
/// than 16 characters is read as if padded with leading zeros; characters past
/// the 16th are ignored.
///
/// # Examples
///
/// ```
/// use vsm_core::isa::word::decode_word;
///
/// assert_eq!(decode_word("0001100000000101"), 0x1805);
/// assert_eq!(decode_word("000000000000000x"), 0);
/// assert_eq!(decode_word("1\u{fffd}1"), 0b101);
/// ```
pub fn decode_word(token: &str) -> u16 {
    token
        .chars()
        .take(TOKEN_WIDTH)
        .fold(0u16, |acc, c| (acc << 1) | u16::from(c == '1'))
}

/// Renders a word as a 16-character binary token, most-significant bit first.
pub fn format_word(word: u16) -> String {
    format!("{word:0width$b}", width = WORD_BITS as usize)
}
