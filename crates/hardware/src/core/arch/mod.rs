//! Architectural state definitions.

/// Accumulator, program counter, and instruction latch registers.
pub mod regs;

pub use regs::Registers;
