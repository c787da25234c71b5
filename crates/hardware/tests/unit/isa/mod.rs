//! # ISA Unit Tests
//!
//! This module contains unit tests for the instruction set: the binary token
//! codec, instruction decoding, and disassembly.

/// Instruction decoding property tests.
///
/// Verifies opcode and operand extraction, addressing-mode resolution, and
/// byte-to-word address conversion for all sixteen opcodes.
pub mod decode_properties;


/// Binary token decoding and rendering.
pub mod word;
