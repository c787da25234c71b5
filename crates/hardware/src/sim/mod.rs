//! Simulation utilities and program loading.
//!
//! Provides the loader for the first phase of a run and the `Simulator` that
//! ties the CPU to its console.

/// Program loading into memory.
pub mod loader;

/// Top-level simulator.
pub mod simulator;

pub use simulator::Simulator;
