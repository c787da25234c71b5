//! Very Simple Machine (VSM) simulator library.
//!
//! This crate implements a single-accumulator, 16-bit word machine with the following:
//! 1. **ISA:** Binary-text word decoding, the sixteen opcodes, and a disassembler.
//! 2. **Core:** Registers, bounds-checked word memory, and the fetch-decode-execute loop.
//! 3. **Console:** Whitespace-separated token input and decimal value output.
//! 4. **Simulation:** Program loader, run driver, final state dump, and statistics.

/// Common types and constants (addresses, word layout, errors).
pub mod common;
/// Simulator configuration (defaults, memory layout, run limits).
pub mod config;
/// CPU core (registers, memory, execution).
pub mod core;
/// Final register and memory dump.
pub mod dump;
/// Instruction set (word codec, decode, instruction types, disassembly).
pub mod isa;
/// Program loader and simulator driver.
pub mod sim;
/// Console devices and the traits they implement.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Main CPU type; holds registers, memory, and stats.
pub use crate::core::Cpu;
/// Top-level simulator; construct with `Simulator::new`.
pub use crate::sim::Simulator;
