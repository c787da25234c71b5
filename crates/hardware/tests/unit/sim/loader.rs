//! # Program Loading Tests
//!
//! This module contains unit tests for the loader: sentinel handling, end of
//! input, capacity overflow, and reading programs from disk.

use std::io::{Cursor, Write};

use tempfile::NamedTempFile;
use vsm_core::common::{VsmError, WordIndex};
use vsm_core::core::Memory;
use vsm_core::isa::instruction::Opcode;
use vsm_core::sim::loader;
use vsm_core::soc::{Console, StreamConsole};

use crate::common::builder::{ProgramBuilder, halt, imm};
use crate::common::harness::console;

/// Helper function to create a temporary program file for testing.
fn create_temp_program(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_stops_after_sentinel() {
    let text = ProgramBuilder::new()
        .inst(imm(Opcode::Load, 5))
        .inst(halt())
        .input(9)
        .build();
    let mut mem = Memory::new(2048);
    let mut con = console(&text);

    assert_eq!(loader::load_program(&mut mem, &mut con).unwrap(), 3);
    assert_eq!(mem.read(WordIndex(0)).unwrap(), 0x1805);
    assert_eq!(mem.read(WordIndex(1)).unwrap(), 0xF000);
    assert_eq!(mem.read(WordIndex(2)).unwrap(), 0);
    assert_eq!(mem.read(WordIndex(3)).unwrap(), 0);

    // The input after the sentinel is left for READ.
    assert_eq!(
        con.read_token().unwrap().as_deref(),
        Some("0000000000001001")
    );
}

#[test]
fn test_halt_word_does_not_end_loading() {
    let text = ProgramBuilder::new()
        .inst(halt())
        .inst(imm(Opcode::Load, 1))
        .build();
    let mut mem = Memory::new(2048);
    assert_eq!(loader::load_program(&mut mem, &mut console(&text)).unwrap(), 3);
    assert_eq!(mem.read(WordIndex(1)).unwrap(), imm(Opcode::Load, 1));
}

#[test]
fn test_load_stops_at_end_of_input() {
    let text = ProgramBuilder::new()
        .inst(imm(Opcode::Load, 5))
        .inst(halt())
        .without_sentinel()
        .build();
    let mut mem = Memory::new(2048);
    assert_eq!(loader::load_program(&mut mem, &mut console(&text)).unwrap(), 2);
}

#[test]
fn test_empty_input_loads_nothing() {
    let mut mem = Memory::new(2048);
    assert_eq!(loader::load_program(&mut mem, &mut console("")).unwrap(), 0);
    assert_eq!(mem, Memory::new(2048));
}

#[test]
fn test_tokens_may_share_lines() {
    let text = "0001100000000101 1111000000000000\t0000000000000000";
    let mut mem = Memory::new(16);
    assert_eq!(loader::load_program(&mut mem, &mut console(text)).unwrap(), 3);
    assert_eq!(mem.read(WordIndex(1)).unwrap(), 0xF000);
}

#[test]
fn test_oversized_program_is_rejected_untouched() {
    let text = ProgramBuilder::new()
        .insts(&[halt(); 8])
        .build();
    let mut mem = Memory::new(4);
    let err = loader::load_program(&mut mem, &mut console(&text)).unwrap_err();
    assert!(matches!(
        err,
        VsmError::MemoryOutOfBounds {
            index: 4,
            capacity: 4
        }
    ));
    assert_eq!(mem, Memory::new(4));
}

#[test]
fn test_non_utf8_bytes_are_zero_bits() {
    let mut bytes = b"0001100000000101\n1111000000000000\n".to_vec();
    bytes.extend_from_slice(&[0xFF; 14]);
    bytes.extend_from_slice(b"11\n0000000000000000\n");
    let mut con = StreamConsole::new(Cursor::new(bytes), Vec::new());
    let mut mem = Memory::new(2048);

    assert_eq!(loader::load_program(&mut mem, &mut con).unwrap(), 4);
    assert_eq!(mem.read(WordIndex(0)).unwrap(), 0x1805);
    assert_eq!(mem.read(WordIndex(1)).unwrap(), 0xF000);
    assert_eq!(mem.read(WordIndex(2)).unwrap(), 0b11);
    assert_eq!(mem.read(WordIndex(3)).unwrap(), 0);
}

#[test]
fn test_all_non_utf8_token_is_the_sentinel() {
    let mut bytes = b"1111000000000000\n".to_vec();
    bytes.extend_from_slice(&[0xFF; 16]);
    bytes.extend_from_slice(b"\n0000000000001001\n");
    let mut con = StreamConsole::new(Cursor::new(bytes), Vec::new());
    let mut mem = Memory::new(2048);

    assert_eq!(loader::load_program(&mut mem, &mut con).unwrap(), 2);
    assert_eq!(
        con.read_token().unwrap().as_deref(),
        Some("0000000000001001")
    );
}

#[test]
fn test_read_program_includes_sentinel() {
    let text = ProgramBuilder::new().inst(halt()).build();
    let words = loader::read_program(&mut console(&text)).unwrap();
    assert_eq!(words, vec![0xF000, 0]);
}

#[test]
fn test_load_image_copies_verbatim() {
    let mut mem = Memory::new(8);
    assert_eq!(loader::load_image(&mut mem, &[0, 1, 0, 2]).unwrap(), 4);
    assert_eq!(&mem.as_slice()[..4], &[0, 1, 0, 2]);
}

#[test]
fn test_open_program_from_file() {
    let text = ProgramBuilder::new()
        .inst(imm(Opcode::Load, 5))
        .inst(halt())
        .build();
    let file = create_temp_program(&text);
    let reader = loader::open_program(file.path()).unwrap();
    let mut con = StreamConsole::new(reader, Vec::new());
    let mut mem = Memory::new(2048);
    assert_eq!(loader::load_program(&mut mem, &mut con).unwrap(), 3);
    assert_eq!(mem.read(WordIndex(0)).unwrap(), 0x1805);
}

#[test]
fn test_open_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = loader::open_program(dir.path().join("missing.vsm")).unwrap_err();
    assert!(matches!(err, VsmError::Io(_)));
}
