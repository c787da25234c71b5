//! CPU core definitions.
//!
//! This module groups the machine proper:
//! - `arch`: the register file.
//! - `cpu`: the `Cpu` structure and its fetch-decode-execute loop.
//! - `memory`: the bounds-checked word array.

/// Architectural register state.
pub mod arch;

/// CPU structure and execution loop.
pub mod cpu;

/// Word-addressed memory.
pub mod memory;

pub use cpu::Cpu;
pub use memory::Memory;
