//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode table, field extraction, decoding logic, and the binary
//! token format of VSM programs.

/// Instruction decoding into opcode and resolved operand.
pub mod decode;

/// Instruction disassembler for tracing and program listings.
pub mod disasm;

/// Instruction field extraction and decoded instruction types.
pub mod instruction;

/// Numeric opcode values of the binary program format.
pub mod opcodes;

/// Binary token decoding and rendering.
pub mod word;
