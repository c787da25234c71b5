//! Global Machine Constants.
//!
//! This module defines machine-wide constants used across the simulator. It includes:
//! 1. **Memory Constants:** Capacity and the conventional code/data segment ranges.
//! 2. **Instruction Constants:** Field masks and shifts for the 16-bit instruction word.
//! 3. **Token Constants:** Width of a binary program token.

/// Number of 16-bit words in VSM memory.
pub const MEMORY_WORDS: usize = 2048;

/// First word index of the code segment.
pub const CODE_SEGMENT_START: usize = 0;

/// Number of words in the code segment shown by the dump.
pub const CODE_SEGMENT_LEN: usize = 100;

/// First word index of the data segment.
pub const DATA_SEGMENT_START: usize = 1024;

/// Number of words in the data segment shown by the dump.
pub const DATA_SEGMENT_LEN: usize = 100;

/// Width of an instruction word in bits.
pub const WORD_BITS: u32 = 16;

/// Bit shift for extracting the opcode (high nibble).
pub const OPCODE_SHIFT: u32 = 12;

/// Bit mask for the opcode once shifted down.
pub const OPCODE_MASK: u16 = 0xF;

/// Bit mask for the 12-bit operand field.
pub const OPERAND_MASK: u16 = 0x0FFF;

/// Addressing-mode flag (bit 11): set means the operand is an immediate literal.
pub const IMMEDIATE_FLAG: u16 = 0x0800;

/// Bits of the operand field that carry an immediate literal.
pub const IMMEDIATE_VALUE_MASK: u16 = 0x07FF;

/// Mask applied to values consumed by the READ instruction.
pub const READ_VALUE_MASK: u16 = 0x0FFF;

/// Number of characters in a binary program token.
pub const TOKEN_WIDTH: usize = 16;

/// Decoded word that terminates the load phase.
pub const LOAD_SENTINEL: u16 = 0x0000;
