//! VSM Instruction Decoder.
//!
//! Splits a 16-bit word into opcode and operand field, then resolves the
//! operand for the operation at hand:
//! - LOAD, ADD, SUB, MUL, DIV, MOD: immediate when the mode flag is set, memory otherwise.
//! - STORE, READ, WRITE: always memory.
//! - JMP, JNEG, JZERO: always a jump target.
//! - END, NEG, NOP, HALT: no operand.
//!
//! Byte addresses are converted to word indices here, so the execution stage
//! only ever sees word indices.

use crate::common::WordIndex;
use crate::isa::instruction::{Decoded, Instruction, InstructionBits, Opcode, Source};

/// Decodes a VSM instruction word.
///
/// # Examples
///
/// ```
/// use vsm_core::common::WordIndex;
/// use vsm_core::isa::decode::decode;
/// use vsm_core::isa::instruction::{Instruction, Opcode, Source};
///
/// let d = decode(0x1805); // LOAD #5
/// assert_eq!(d.opcode, Opcode::Load);
/// assert_eq!(d.instruction, Instruction::Load(Source::Immediate(5)));
/// assert_eq!(d.operand_field, 0x805);
///
/// let d = decode(0x1006); // LOAD [3]
/// assert_eq!(d.instruction, Instruction::Load(Source::Memory(WordIndex(3))));
/// ```
pub fn decode(word: u16) -> Decoded {
    let opcode = Opcode::from_bits(word.opcode());
    let target = word.address().word_index();
    let src = resolve(opcode, word, target);

    let instruction = match opcode {
        Opcode::End => Instruction::End,
        Opcode::Load => Instruction::Load(src),
        Opcode::Store => Instruction::Store(target),
        Opcode::Read => Instruction::Read(target),
        Opcode::Write => Instruction::Write(target),
        Opcode::Add => Instruction::Add(src),
        Opcode::Sub => Instruction::Sub(src),
        Opcode::Mul => Instruction::Mul(src),
        Opcode::Div => Instruction::Div(src),
        Opcode::Mod => Instruction::Mod(src),
        Opcode::Neg => Instruction::Neg,
        Opcode::Nop => Instruction::Nop,
        Opcode::Jmp => Instruction::Jmp(target),
        Opcode::Jneg => Instruction::Jneg(target),
        Opcode::Jzero => Instruction::Jzero(target),
        Opcode::Halt => Instruction::Halt,
    };

    Decoded {
        raw: word,
        opcode,
        operand_field: word.operand(),
        instruction,
    }
}

/// Selects immediate or memory addressing. Bit 11 is the mode flag only for
/// opcodes that have one; elsewhere it is part of the address.
#[inline]
fn resolve(opcode: Opcode, word: u16, address: WordIndex) -> Source {
    if opcode.has_addressing_mode() && word.is_immediate() {
        Source::Immediate(word.immediate())
    } else {
        Source::Memory(address)
    }
}
