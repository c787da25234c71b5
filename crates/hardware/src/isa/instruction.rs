//! Instruction encoding and decoding utilities.
//!
//! A VSM instruction is one 16-bit word:
//!
//! ```text
//!  15    12 11 10                 0
//! +--------+--+--------------------+
//! | opcode |M |       value        |
//! +--------+--+--------------------+
//!          |<---- operand (12) --->|
//! ```
//!
//! `M` is the addressing-mode flag. Addresses use the full 12-bit operand
//! field; an immediate literal is the 11-bit value below the flag.

use std::fmt;

use crate::common::WordIndex;
use crate::common::addr::ByteAddr;
use crate::common::constants::{
    IMMEDIATE_FLAG, IMMEDIATE_VALUE_MASK, OPCODE_MASK, OPCODE_SHIFT, OPERAND_MASK,
};
use crate::isa::opcodes;

/// Trait for extracting instruction fields from an encoded word.
pub trait InstructionBits {
    /// Extracts the opcode nibble (bits 12-15).
    fn opcode(&self) -> u8;

    /// Extracts the 12-bit operand field (bits 0-11).
    fn operand(&self) -> u16;

    /// Returns true when the addressing-mode flag (bit 11) is set.
    fn is_immediate(&self) -> bool;

    /// Extracts the immediate literal (bits 0-10).
    fn immediate(&self) -> u16;

    /// Interprets the operand field as a byte address.
    fn address(&self) -> ByteAddr;
}

impl InstructionBits for u16 {
    #[inline(always)]
    fn opcode(&self) -> u8 {
        ((self >> OPCODE_SHIFT) & OPCODE_MASK) as u8
    }

    #[inline(always)]
    fn operand(&self) -> u16 {
        self & OPERAND_MASK
    }

    #[inline(always)]
    fn is_immediate(&self) -> bool {
        self & IMMEDIATE_FLAG != 0
    }

    #[inline(always)]
    fn immediate(&self) -> u16 {
        self & IMMEDIATE_VALUE_MASK
    }

    #[inline(always)]
    fn address(&self) -> ByteAddr {
        ByteAddr::new(self.operand())
    }
}

/// The sixteen VSM operations.
///
/// Discriminants are the opcode values of the binary program format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// Program end marker, a no-op when executed.
    End = opcodes::OP_END,
    /// `acc <- operand`
    Load = opcodes::OP_LOAD,
    /// `mem <- acc`
    Store = opcodes::OP_STORE,
    /// `mem <- input`
    Read = opcodes::OP_READ,
    /// `output <- mem`
    Write = opcodes::OP_WRITE,
    /// `acc += operand`
    Add = opcodes::OP_ADD,
    /// `acc -= operand`
    Sub = opcodes::OP_SUB,
    /// `acc *= operand`
    Mul = opcodes::OP_MUL,
    /// `acc /= operand`
    Div = opcodes::OP_DIV,
    /// `acc %= operand`
    Mod = opcodes::OP_MOD,
    /// `acc <- -acc`
    Neg = opcodes::OP_NEG,
    /// No operation.
    Nop = opcodes::OP_NOP,
    /// Unconditional jump.
    Jmp = opcodes::OP_JMP,
    /// Jump when `acc < 0`.
    Jneg = opcodes::OP_JNEG,
    /// Jump when `acc == 0`.
    Jzero = opcodes::OP_JZERO,
    /// Stop the run loop.
    Halt = opcodes::OP_HALT,
}

impl Opcode {
    /// Maps an opcode nibble to its operation. Only the low four bits are used.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & OPCODE_MASK as u8 {
            opcodes::OP_END => Self::End,
            opcodes::OP_LOAD => Self::Load,
            opcodes::OP_STORE => Self::Store,
            opcodes::OP_READ => Self::Read,
            opcodes::OP_WRITE => Self::Write,
            opcodes::OP_ADD => Self::Add,
            opcodes::OP_SUB => Self::Sub,
            opcodes::OP_MUL => Self::Mul,
            opcodes::OP_DIV => Self::Div,
            opcodes::OP_MOD => Self::Mod,
            opcodes::OP_NEG => Self::Neg,
            opcodes::OP_NOP => Self::Nop,
            opcodes::OP_JMP => Self::Jmp,
            opcodes::OP_JNEG => Self::Jneg,
            opcodes::OP_JZERO => Self::Jzero,
            _ => Self::Halt,
        }
    }

    /// Returns the opcode nibble.
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::End => "END",
            Self::Load => "LOAD",
            Self::Store => "STORE",
            Self::Read => "READ",
            Self::Write => "WRITE",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Mod => "MOD",
            Self::Neg => "NEG",
            Self::Nop => "NOP",
            Self::Jmp => "JMP",
            Self::Jneg => "JNEG",
            Self::Jzero => "JZERO",
            Self::Halt => "HALT",
        }
    }

    /// True for operations that honour the addressing-mode flag.
    pub const fn has_addressing_mode(self) -> bool {
        matches!(
            self,
            Self::Load | Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Mod
        )
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// Source of the second operand for LOAD and the arithmetic operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    /// A literal value (the 11 bits below the mode flag).
    Immediate(u16),
    /// A memory word, already converted from the encoded byte address.
    Memory(WordIndex),
}

/// A decoded operation with its resolved operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Opcode 0.
    End,
    /// Opcode 1.
    Load(Source),
    /// Opcode 2.
    Store(WordIndex),
    /// Opcode 3.
    Read(WordIndex),
    /// Opcode 4.
    Write(WordIndex),
    /// Opcode 5.
    Add(Source),
    /// Opcode 6.
    Sub(Source),
    /// Opcode 7.
    Mul(Source),
    /// Opcode 8.
    Div(Source),
    /// Opcode 9.
    Mod(Source),
    /// Opcode 10.
    Neg,
    /// Opcode 11.
    Nop,
    /// Opcode 12.
    Jmp(WordIndex),
    /// Opcode 13.
    Jneg(WordIndex),
    /// Opcode 14.
    Jzero(WordIndex),
    /// Opcode 15.
    Halt,
}

impl Instruction {
    /// Returns the operation without its operand.
    pub const fn opcode(self) -> Opcode {
        match self {
            Self::End => Opcode::End,
            Self::Load(_) => Opcode::Load,
            Self::Store(_) => Opcode::Store,
            Self::Read(_) => Opcode::Read,
            Self::Write(_) => Opcode::Write,
            Self::Add(_) => Opcode::Add,
            Self::Sub(_) => Opcode::Sub,
            Self::Mul(_) => Opcode::Mul,
            Self::Div(_) => Opcode::Div,
            Self::Mod(_) => Opcode::Mod,
            Self::Neg => Opcode::Neg,
            Self::Nop => Opcode::Nop,
            Self::Jmp(_) => Opcode::Jmp,
            Self::Jneg(_) => Opcode::Jneg,
            Self::Jzero(_) => Opcode::Jzero,
            Self::Halt => Opcode::Halt,
        }
    }
}

/// Decoded instruction containing all extracted fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// Raw instruction word.
    pub raw: u16,
    /// Operation nibble as an enum.
    pub opcode: Opcode,
    /// Raw 12-bit operand field, kept for the register dump.
    pub operand_field: u16,
    /// Operation with its operand resolved according to the addressing mode.
    pub instruction: Instruction,
}

impl Default for Decoded {
    fn default() -> Self {
        Self {
            raw: 0,
            opcode: Opcode::End,
            operand_field: 0,
            instruction: Instruction::End,
        }
    }
}
