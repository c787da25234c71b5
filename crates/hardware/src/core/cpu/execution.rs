//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle. Each step:
//! 1. **Fetch:** `IR <- memory[PC]`.
//! 2. **Decode:** Split IR into opcode and operand, resolve the addressing mode.
//! 3. **Execute:** Apply the operation and compute the next PC.
//!
//! HALT stops the loop without touching any other state; the PC keeps
//! pointing at the HALT word. Faults leave the PC on the faulting instruction.

use tracing::{debug, trace};

use super::Cpu;
use crate::common::WordIndex;
use crate::common::constants::READ_VALUE_MASK;
use crate::common::error::{Result, VsmError};
use crate::isa::decode::decode;
use crate::isa::disasm::format_decoded;
use crate::isa::instruction::{Instruction, Source};
use crate::isa::word::decode_word;
use crate::soc::Console;

/// Outcome of executing one instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// The machine is ready for the next fetch.
    Continue,
    /// HALT was executed.
    Halted,
}

impl Cpu {
    /// Executes the instruction at the current PC.
    ///
    /// # Errors
    ///
    /// - `VsmError::MemoryOutOfBounds` when the fetch or a data access leaves memory.
    /// - `VsmError::DivisionByZero` for DIV or MOD with a zero divisor.
    /// - `VsmError::InputExhausted` for READ with no tokens left.
    /// - `VsmError::Io` when the console fails.
    pub fn step<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<StepResult> {
        let pc = self.regs.pc;
        let word = self.memory.read(pc)?;
        let decoded = decode(word);
        self.regs.latch(&decoded);
        self.stats.record(decoded.opcode);

        if self.trace {
            trace!(
                pc = pc.val(),
                acc = self.regs.accumulator,
                "{word:04X}  {}",
                format_decoded(&decoded)
            );
        }

        let mut next = pc.next();
        match decoded.instruction {
            Instruction::End | Instruction::Nop => {}
            Instruction::Load(src) => self.regs.accumulator = self.operand_value(src)?,
            Instruction::Store(index) => {
                self.memory.write(index, self.regs.accumulator as u16)?;
            }
            Instruction::Read(index) => {
                let token = console
                    .read_token()?
                    .ok_or(VsmError::InputExhausted { pc: pc.val() })?;
                self.memory
                    .write(index, decode_word(&token) & READ_VALUE_MASK)?;
            }
            Instruction::Write(index) => console.write_value(self.memory.read(index)?)?,
            Instruction::Add(src) => {
                let value = self.operand_value(src)?;
                self.regs.accumulator = self.regs.accumulator.wrapping_add(value);
            }
            Instruction::Sub(src) => {
                let value = self.operand_value(src)?;
                self.regs.accumulator = self.regs.accumulator.wrapping_sub(value);
            }
            Instruction::Mul(src) => {
                let value = self.operand_value(src)?;
                self.regs.accumulator = self.regs.accumulator.wrapping_mul(value);
            }
            Instruction::Div(src) => {
                let value = self.divisor(src, pc)?;
                self.regs.accumulator = self.regs.accumulator.wrapping_div(value);
            }
            Instruction::Mod(src) => {
                let value = self.divisor(src, pc)?;
                self.regs.accumulator = self.regs.accumulator.wrapping_rem(value);
            }
            Instruction::Neg => self.regs.accumulator = self.regs.accumulator.wrapping_neg(),
            Instruction::Jmp(target) => {
                self.stats.record_jump(true);
                next = target;
            }
            Instruction::Jneg(target) => {
                next = self.branch(self.regs.accumulator < 0, target, next);
            }
            Instruction::Jzero(target) => {
                next = self.branch(self.regs.accumulator == 0, target, next);
            }
            Instruction::Halt => {
                self.halted = true;
                return Ok(StepResult::Halted);
            }
        }

        self.regs.pc = next;
        Ok(StepResult::Continue)
    }

    /// Steps until HALT and returns the number of instructions executed.
    ///
    /// With `max_steps` set, the run fails once that many instructions have
    /// executed without reaching HALT.
    ///
    /// # Errors
    ///
    /// Any error from [`Cpu::step`], or `VsmError::StepLimitExceeded`.
    pub fn run<C: Console + ?Sized>(
        &mut self,
        console: &mut C,
        max_steps: Option<u64>,
    ) -> Result<u64> {
        let mut steps = 0u64;
        loop {
            if let Some(limit) = max_steps {
                if steps >= limit {
                    return Err(VsmError::StepLimitExceeded { limit });
                }
            }
            steps += 1;
            if self.step(console)? == StepResult::Halted {
                break;
            }
        }
        console.flush()?;
        debug!(
            steps,
            pc = self.regs.pc.val(),
            acc = self.regs.accumulator,
            "halted"
        );
        Ok(steps)
    }

    /// Resolves a LOAD/arithmetic operand to its value.
    #[inline]
    fn operand_value(&self, src: Source) -> Result<i32> {
        match src {
            Source::Immediate(value) => Ok(i32::from(value)),
            Source::Memory(index) => Ok(i32::from(self.memory.read(index)?)),
        }
    }

    /// Resolves a DIV/MOD operand, rejecting zero.
    #[inline]
    fn divisor(&self, src: Source, pc: WordIndex) -> Result<i32> {
        match self.operand_value(src)? {
            0 => Err(VsmError::DivisionByZero { pc: pc.val() }),
            value => Ok(value),
        }
    }

    /// Picks the next PC for a conditional jump and records the outcome.
    #[inline]
    fn branch(&mut self, taken: bool, target: WordIndex, fallthrough: WordIndex) -> WordIndex {
        self.stats.record_jump(taken);
        if taken { target } else { fallthrough }
    }
}
