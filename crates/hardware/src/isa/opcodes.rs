//! VSM Opcodes.
//!
//! Numeric values of the high nibble of an instruction word. These numbers are
//! the wire format of a program and must not change.

/// End-of-program marker; executes as a no-op.
pub const OP_END: u8 = 0x0;

/// Load the accumulator from memory or an immediate.
pub const OP_LOAD: u8 = 0x1;

/// Store the accumulator to memory.
pub const OP_STORE: u8 = 0x2;

/// Read an input token into memory.
pub const OP_READ: u8 = 0x3;

/// Write a memory word to the output.
pub const OP_WRITE: u8 = 0x4;

/// Add to the accumulator.
pub const OP_ADD: u8 = 0x5;

/// Subtract from the accumulator.
pub const OP_SUB: u8 = 0x6;

/// Multiply the accumulator.
pub const OP_MUL: u8 = 0x7;

/// Divide the accumulator.
pub const OP_DIV: u8 = 0x8;

/// Remainder of the accumulator.
pub const OP_MOD: u8 = 0x9;

/// Negate the accumulator.
pub const OP_NEG: u8 = 0xA;

/// No operation.
pub const OP_NOP: u8 = 0xB;

/// Unconditional jump.
pub const OP_JMP: u8 = 0xC;

/// Jump if the accumulator is negative.
pub const OP_JNEG: u8 = 0xD;

/// Jump if the accumulator is zero.
pub const OP_JZERO: u8 = 0xE;

/// Stop execution.
pub const OP_HALT: u8 = 0xF;
