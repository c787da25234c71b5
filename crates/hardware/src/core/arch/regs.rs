//! VSM register file.
//!
//! The machine has one architectural register, the accumulator, plus the
//! bookkeeping registers of the fetch-decode-execute loop:
//! 1. **Accumulator:** Signed 32-bit, wider than a memory word. Arithmetic
//!    wraps at 32 bits and the word width is only imposed by STORE.
//! 2. **Program Counter:** Word index of the next fetch.
//! 3. **Instruction/Opcode/Operand:** The last fetched and decoded word,
//!    kept after HALT for the final dump.

use crate::common::WordIndex;
use crate::isa::instruction::{Decoded, Opcode};

/// Register state of the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Registers {
    /// Accumulator.
    pub accumulator: i32,
    /// Program counter (word index).
    pub pc: WordIndex,
    /// Instruction register: the last fetched word.
    pub ir: u16,
    /// Opcode of the last decoded instruction.
    pub opcode: Opcode,
    /// 12-bit operand field of the last decoded instruction.
    pub operand: u16,
}

impl Registers {
    /// Creates the power-on register state (everything zero).
    pub const fn new() -> Self {
        Self {
            accumulator: 0,
            pc: WordIndex(0),
            ir: 0,
            opcode: Opcode::End,
            operand: 0,
        }
    }

    /// Latches a freshly decoded instruction into IR, opcode, and operand.
    #[inline]
    pub const fn latch(&mut self, decoded: &Decoded) {
        self.ir = decoded.raw;
        self.opcode = decoded.opcode;
        self.operand = decoded.operand_field;
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}
