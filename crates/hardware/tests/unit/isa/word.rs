//! # Word Codec Tests
//!
//! Tokens are read most-significant bit first; anything other than '1' is a
//! zero bit and only the first sixteen characters count.

use proptest::prelude::*;
use rstest::rstest;
use vsm_core::isa::word::{decode_word, format_word};

#[rstest]
#[case("0000000000000000", 0x0000)]
#[case("0001100000000101", 0x1805)]
#[case("1111000000000000", 0xF000)]
#[case("1111111111111111", 0xFFFF)]
fn test_decode_full_tokens(#[case] token: &str, #[case] expected: u16) {
    assert_eq!(decode_word(token), expected);
}

#[test]
fn test_short_token_is_right_aligned() {
    assert_eq!(decode_word("101"), 0b101);
    assert_eq!(decode_word(""), 0);
}

#[test]
fn test_non_binary_characters_read_as_zero() {
    assert_eq!(decode_word("1x1"), 0b101);
    assert_eq!(decode_word("2222222222222221"), 1);
}

#[test]
fn test_replacement_character_is_one_zero_bit() {
    assert_eq!(decode_word("1\u{fffd}1"), 0b101);
    assert_eq!(decode_word("\u{fffd}\u{fffd}\u{fffd}\u{fffd}000000000001"), 1);
}

#[test]
fn test_only_first_sixteen_characters_count() {
    assert_eq!(decode_word("00000000000000011111"), 1);
}

#[test]
fn test_format_is_zero_padded() {
    assert_eq!(format_word(5), "0000000000000101");
    assert_eq!(format_word(0xF000), "1111000000000000");
}

proptest! {
    #[test]
    fn prop_format_then_decode_is_identity(word in any::<u16>()) {
        prop_assert_eq!(decode_word(&format_word(word)), word);
    }

    #[test]
    fn prop_format_is_sixteen_binary_digits(word in any::<u16>()) {
        let text = format_word(word);
        prop_assert_eq!(text.len(), 16);
        prop_assert!(text.bytes().all(|b| b == b'0' || b == b'1'));
    }
}
