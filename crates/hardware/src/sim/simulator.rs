//! Simulator: owns the CPU and its console side-by-side.
//!
//! A run is `load` then `run`. Keeping the console outside the `Cpu` lets the
//! loader and the READ instruction share one token stream without the CPU
//! borrowing itself.

use std::io::Write;

use tracing::{debug, info};

use crate::common::error::Result;
use crate::config::Config;
use crate::core::Cpu;
use crate::dump;
use crate::sim::loader;
use crate::soc::Console;

/// Top-level simulator: machine state plus console.
#[derive(Debug)]
pub struct Simulator<C> {
    /// Machine state.
    pub cpu: Cpu,
    /// Program and data I/O.
    pub console: C,
    config: Config,
}

impl<C: Console> Simulator<C> {
    /// Creates a simulator for `config` attached to `console`.
    pub fn new(config: &Config, console: C) -> Self {
        Self {
            cpu: Cpu::new(config),
            console,
            config: config.clone(),
        }
    }

    /// Returns the configuration this simulator was built with.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Runs the load phase and returns the number of words stored.
    ///
    /// # Errors
    ///
    /// See [`loader::load_program`].
    pub fn load(&mut self) -> Result<usize> {
        let words = loader::load_program(&mut self.cpu.memory, &mut self.console)?;
        self.cpu.stats.words_loaded = words as u64;
        info!(words, "program loaded");
        Ok(words)
    }

    /// Runs until HALT and returns the number of instructions executed.
    ///
    /// # Errors
    ///
    /// See [`Cpu::run`]. Register and memory state are left as they were at the fault.
    pub fn run(&mut self) -> Result<u64> {
        let result = self
            .cpu
            .run(&mut self.console, self.config.general.max_steps);
        if let Err(ref e) = result {
            debug!(pc = self.cpu.regs.pc.val(), "run aborted: {e}");
        }
        result
    }

    /// Loads the program and runs it.
    ///
    /// # Errors
    ///
    /// The first error from [`Simulator::load`] or [`Simulator::run`].
    pub fn load_and_run(&mut self) -> Result<u64> {
        let _ = self.load()?;
        self.run()
    }

    /// Writes the final register and memory dump to `out`.
    ///
    /// # Errors
    ///
    /// See [`dump::write_dump`].
    pub fn write_dump<W: Write>(&self, out: &mut W) -> Result<()> {
        dump::write_dump(out, &self.cpu, &self.config.memory)
    }
}
