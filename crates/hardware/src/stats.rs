//! Simulation statistics collection and reporting.
//!
//! This module tracks what a run did. It provides:
//! 1. **Throughput:** Instructions retired, words loaded, and host time.
//! 2. **Instruction mix:** Counts by category (data movement, I/O, arithmetic, control, no-op).
//! 3. **Control flow:** Conditional jumps taken and not taken.

use std::io::{self, Write};
use std::time::Instant;

use crate::isa::instruction::Opcode;

/// Section names for selective stats output.
///
/// Pass an empty slice to [`SimStats::write_sections`] to write all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "control"];

/// Run statistics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Words stored by the loader, sentinel included.
    pub words_loaded: u64,
    /// Instructions executed, HALT included.
    pub instructions_retired: u64,

    /// LOAD and STORE.
    pub inst_data: u64,
    /// READ and WRITE.
    pub inst_io: u64,
    /// ADD, SUB, MUL, DIV, MOD, NEG.
    pub inst_arith: u64,
    /// JMP, JNEG, JZERO.
    pub inst_jump: u64,
    /// END, NOP, HALT.
    pub inst_other: u64,

    /// Conditional jumps whose condition held, plus every JMP.
    pub jumps_taken: u64,
    /// Conditional jumps that fell through.
    pub jumps_not_taken: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            words_loaded: 0,
            instructions_retired: 0,
            inst_data: 0,
            inst_io: 0,
            inst_arith: 0,
            inst_jump: 0,
            inst_other: 0,
            jumps_taken: 0,
            jumps_not_taken: 0,
        }
    }
}

impl SimStats {
    /// Counts one retired instruction under its category.
    pub const fn record(&mut self, opcode: Opcode) {
        self.instructions_retired += 1;
        match opcode {
            Opcode::Load | Opcode::Store => self.inst_data += 1,
            Opcode::Read | Opcode::Write => self.inst_io += 1,
            Opcode::Add
            | Opcode::Sub
            | Opcode::Mul
            | Opcode::Div
            | Opcode::Mod
            | Opcode::Neg => self.inst_arith += 1,
            Opcode::Jmp | Opcode::Jneg | Opcode::Jzero => self.inst_jump += 1,
            Opcode::End | Opcode::Nop | Opcode::Halt => self.inst_other += 1,
        }
    }

    /// Records the outcome of a jump.
    pub const fn record_jump(&mut self, taken: bool) {
        if taken {
            self.jumps_taken += 1;
        } else {
            self.jumps_not_taken += 1;
        }
    }

    /// Writes the requested sections to `out`.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]. An empty
    /// slice writes every section.
    ///
    /// # Errors
    ///
    /// Returns any error produced by `out`.
    pub fn write_sections<W: Write>(&self, out: &mut W, sections: &[String]) -> io::Result<()> {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let instr = self.instructions_retired.max(1) as f64;

        writeln!(out, "==========================================================")?;
        writeln!(out, "VSM SIMULATION STATISTICS")?;
        writeln!(out, "==========================================================")?;
        if want("summary") {
            writeln!(out, "host_seconds             {seconds:.4} s")?;
            writeln!(out, "sim_words_loaded         {}", self.words_loaded)?;
            writeln!(out, "sim_insts                {}", self.instructions_retired)?;
            writeln!(out, "----------------------------------------------------------")?;
        }
        if want("instruction_mix") {
            writeln!(out, "INSTRUCTION MIX")?;
            for (name, count) in [
                ("op.data", self.inst_data),
                ("op.io", self.inst_io),
                ("op.arith", self.inst_arith),
                ("op.jump", self.inst_jump),
                ("op.other", self.inst_other),
            ] {
                writeln!(
                    out,
                    "  {name:<22} {count} ({:.2}%)",
                    count as f64 / instr * 100.0
                )?;
            }
            writeln!(out, "----------------------------------------------------------")?;
        }
        if want("control") {
            writeln!(out, "CONTROL FLOW")?;
            writeln!(out, "  jumps.taken            {}", self.jumps_taken)?;
            writeln!(out, "  jumps.not_taken        {}", self.jumps_not_taken)?;
        }
        writeln!(out, "==========================================================")?;
        Ok(())
    }
}
