//! Simulator error definitions.
//!
//! The VSM has no fault-handling layer of its own: a program that reads past
//! its input, divides by zero, or touches memory outside the array is simply
//! wrong. This module turns those contract violations into reported outcomes:
//! 1. **Machine faults:** Out-of-range memory, zero divisors, exhausted input.
//! 2. **Run control:** The optional step limit.
//! 3. **Host errors:** I/O and configuration failures.

use thiserror::Error;

/// Errors raised while loading or running a VSM program.
#[derive(Debug, Error)]
pub enum VsmError {
    /// A load, store, fetch, or dump touched a word outside memory.
    #[error("memory index {index} out of bounds (capacity {capacity} words)")]
    MemoryOutOfBounds {
        /// The offending word index.
        index: usize,
        /// Memory capacity in words.
        capacity: usize,
    },

    /// DIV or MOD with a zero divisor.
    #[error("division by zero at pc {pc}")]
    DivisionByZero {
        /// Word index of the faulting instruction.
        pc: usize,
    },

    /// READ executed after the token stream ended.
    #[error("input exhausted by READ at pc {pc}")]
    InputExhausted {
        /// Word index of the faulting instruction.
        pc: usize,
    },

    /// The run did not reach HALT within the configured number of steps.
    #[error("step limit of {limit} instructions exceeded")]
    StepLimitExceeded {
        /// The configured limit.
        limit: u64,
    },

    /// Reading tokens or writing output failed on the host side.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration is well-formed but not usable.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The configuration could not be parsed.
    #[error("could not parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

impl VsmError {
    /// Returns true for faults raised by the running program rather than the host.
    pub const fn is_machine_fault(&self) -> bool {
        matches!(
            self,
            Self::MemoryOutOfBounds { .. }
                | Self::DivisionByZero { .. }
                | Self::InputExhausted { .. }
                | Self::StepLimitExceeded { .. }
        )
    }
}

/// Result type used throughout the simulator.
pub type Result<T> = std::result::Result<T, VsmError>;
