//! Instruction Decode Properties.
//!
//! Verifies that `decode()` splits a word into opcode and operand, resolves
//! the addressing mode, and converts byte addresses to word indices.
//!
//! # Coverage Matrix
//!
//! - Mode-flag opcodes: LOAD, ADD, SUB, MUL, DIV, MOD
//! - Address opcodes:   STORE, READ, WRITE, JMP, JNEG, JZERO
//! - No operand:        END, NEG, NOP, HALT

use proptest::prelude::*;
use rstest::rstest;
use vsm_core::common::WordIndex;
use vsm_core::isa::decode::decode;
use vsm_core::isa::instruction::{Instruction, InstructionBits, Opcode, Source};

use crate::common::builder::{at, imm, word};

#[rstest]
#[case(Opcode::Load)]
#[case(Opcode::Add)]
#[case(Opcode::Sub)]
#[case(Opcode::Mul)]
#[case(Opcode::Div)]
#[case(Opcode::Mod)]
fn test_mode_flag_selects_immediate(#[case] op: Opcode) {
    let d = decode(imm(op, 5));
    assert_eq!(d.opcode, op);
    assert_eq!(d.operand_field, 0x805);
    let expected = Source::Immediate(5);
    let src = match d.instruction {
        Instruction::Load(s)
        | Instruction::Add(s)
        | Instruction::Sub(s)
        | Instruction::Mul(s)
        | Instruction::Div(s)
        | Instruction::Mod(s) => s,
        other => panic!("unexpected {other:?}"),
    };
    assert_eq!(src, expected);
}

#[rstest]
#[case(Opcode::Load)]
#[case(Opcode::Add)]
#[case(Opcode::Mod)]
fn test_clear_flag_selects_memory(#[case] op: Opcode) {
    let d = decode(word(op, 0x006));
    assert_eq!(d.instruction.opcode(), op);
    assert!(matches!(
        d.instruction,
        Instruction::Load(Source::Memory(WordIndex(3)))
            | Instruction::Add(Source::Memory(WordIndex(3)))
            | Instruction::Mod(Source::Memory(WordIndex(3)))
    ));
}

#[test]
fn test_address_opcodes_use_full_operand() {
    assert_eq!(
        decode(word(Opcode::Store, 0x800)).instruction,
        Instruction::Store(WordIndex(1024))
    );
    assert_eq!(
        decode(word(Opcode::Read, 0x802)).instruction,
        Instruction::Read(WordIndex(1025))
    );
    assert_eq!(
        decode(word(Opcode::Write, 0x800)).instruction,
        Instruction::Write(WordIndex(1024))
    );
    assert_eq!(
        decode(at(Opcode::Jmp, 4)).instruction,
        Instruction::Jmp(WordIndex(4))
    );
    assert_eq!(
        decode(at(Opcode::Jneg, 9)).instruction,
        Instruction::Jneg(WordIndex(9))
    );
    assert_eq!(
        decode(at(Opcode::Jzero, 0)).instruction,
        Instruction::Jzero(WordIndex(0))
    );
}

#[rstest]
#[case(0x0000, Instruction::End)]
#[case(0xA000, Instruction::Neg)]
#[case(0xB123, Instruction::Nop)]
#[case(0xF000, Instruction::Halt)]
#[case(0xFFFF, Instruction::Halt)]
fn test_operandless_opcodes(#[case] raw: u16, #[case] expected: Instruction) {
    assert_eq!(decode(raw).instruction, expected);
}

#[test]
fn test_mode_flag_opcodes() {
    let with_mode: Vec<Opcode> = (0u8..16)
        .map(Opcode::from_bits)
        .filter(|op| op.has_addressing_mode())
        .collect();
    assert_eq!(
        with_mode,
        [
            Opcode::Load,
            Opcode::Add,
            Opcode::Sub,
            Opcode::Mul,
            Opcode::Div,
            Opcode::Mod
        ]
    );
}

#[test]
fn test_immediate_excludes_mode_flag() {
    let d = decode(imm(Opcode::Load, 0x7FF));
    assert_eq!(d.instruction, Instruction::Load(Source::Immediate(0x7FF)));
    assert_eq!(d.operand_field, 0xFFF);
}

#[test]
fn test_opcode_round_trips_through_bits() {
    for bits in 0u8..16 {
        assert_eq!(Opcode::from_bits(bits).bits(), bits);
    }
}

#[test]
fn test_opcode_display_is_mnemonic() {
    assert_eq!(Opcode::Jzero.to_string(), "JZERO");
    assert_eq!(Opcode::End.to_string(), "END");
}

proptest! {
    #[test]
    fn prop_decode_preserves_fields(raw in any::<u16>()) {
        let d = decode(raw);
        prop_assert_eq!(d.raw, raw);
        prop_assert_eq!(d.opcode.bits(), raw.opcode());
        prop_assert_eq!(d.operand_field, raw & 0x0FFF);
        prop_assert_eq!(d.instruction.opcode(), d.opcode);
    }

    #[test]
    fn prop_only_mode_opcodes_yield_immediates(raw in any::<u16>()) {
        let d = decode(raw);
        let immediate = matches!(
            d.instruction,
            Instruction::Load(Source::Immediate(_))
                | Instruction::Add(Source::Immediate(_))
                | Instruction::Sub(Source::Immediate(_))
                | Instruction::Mul(Source::Immediate(_))
                | Instruction::Div(Source::Immediate(_))
                | Instruction::Mod(Source::Immediate(_))
        );
        prop_assert_eq!(immediate, d.opcode.has_addressing_mode() && raw.is_immediate());
    }

    #[test]
    fn prop_memory_targets_stay_below_2048(raw in any::<u16>()) {
        let target = match decode(raw).instruction {
            Instruction::Store(i)
            | Instruction::Read(i)
            | Instruction::Write(i)
            | Instruction::Jmp(i)
            | Instruction::Jneg(i)
            | Instruction::Jzero(i)
            | Instruction::Load(Source::Memory(i))
            | Instruction::Add(Source::Memory(i))
            | Instruction::Sub(Source::Memory(i))
            | Instruction::Mul(Source::Memory(i))
            | Instruction::Div(Source::Memory(i))
            | Instruction::Mod(Source::Memory(i)) => i.val(),
            _ => 0,
        };
        prop_assert!(target < 2048);
    }
}
