//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, the container for the
//! entire machine state. It holds:
//! 1. **Registers:** Accumulator, program counter, and the instruction latch.
//! 2. **Memory:** The word array holding both code and data.
//! 3. **Run State:** Halt flag, tracing switch, and statistics.

/// Fetch-decode-execute loop.
pub mod execution;

pub use execution::StepResult;

use crate::config::Config;
use crate::core::arch::Registers;
use crate::core::memory::Memory;
use crate::stats::SimStats;

/// Main CPU structure containing all machine state.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// Accumulator, PC, and instruction latch.
    pub regs: Registers,
    /// Word memory.
    pub memory: Memory,
    /// Run statistics.
    pub stats: SimStats,
    /// Log every executed instruction at trace level.
    pub trace: bool,
    /// Set once HALT has executed.
    pub halted: bool,
}

impl Cpu {
    /// Creates a CPU with zeroed registers and memory sized by `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: Registers::new(),
            memory: Memory::new(config.memory.capacity),
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
            halted: false,
        }
    }

    /// Returns the machine to its power-on state, keeping the memory size.
    pub fn reset(&mut self) {
        self.regs = Registers::new();
        self.memory.clear();
        self.stats = SimStats::default();
        self.halted = false;
    }
}
