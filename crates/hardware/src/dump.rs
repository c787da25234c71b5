//! Final machine state dump.
//!
//! Renders the registers followed by the code and data segments as rows of
//! ten bytes. Only the low 8 bits of each memory word are shown. The layout is
//! fixed so that output can be compared textually across runs:
//!
//! ```text
//! REGISTERS:
//! accumulator\t\t0x000A
//! ...
//!
//! CODE:
//!  0 1 2 3 4 5 6 7 8 9
//! 0000 05 03 00 06 00 00 00 00 00 00
//! ...
//! DATA:
//!  0 1 2 3 4 5 6 7 8 9
//! 1024 0A 00 00 00 00 00 00 00 00 00
//! ```

use std::io::Write;

use crate::common::error::Result;
use crate::config::{DUMP_ROW_WORDS, MemoryConfig};
use crate::core::Cpu;
use crate::core::arch::Registers;
use crate::core::memory::Memory;

/// Column header printed above each segment.
const COLUMN_HEADER: &str = " 0 1 2 3 4 5 6 7 8 9";

/// Writes the full dump for `cpu` using the segment layout in `layout`.
///
/// # Errors
///
/// Returns `VsmError::Io` if writing fails, or `VsmError::MemoryOutOfBounds`
/// if a segment lies outside memory.
pub fn write_dump<W: Write>(out: &mut W, cpu: &Cpu, layout: &MemoryConfig) -> Result<()> {
    write_registers(out, &cpu.regs)?;
    writeln!(out)?;
    writeln!(out, "CODE:")?;
    write_segment(
        out,
        &cpu.memory,
        layout.code_segment_start,
        layout.code_segment_len,
        true,
    )?;
    writeln!(out, "...")?;
    writeln!(out, "DATA:")?;
    write_segment(
        out,
        &cpu.memory,
        layout.data_segment_start,
        layout.data_segment_len,
        false,
    )?;
    out.flush()?;
    Ok(())
}

/// Renders the dump into a `String`.
///
/// # Errors
///
/// See [`write_dump`].
pub fn render(cpu: &Cpu, layout: &MemoryConfig) -> Result<String> {
    let mut buf = Vec::new();
    write_dump(&mut buf, cpu, layout)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Writes the register block. The accumulator is shown as its 32-bit two's
/// complement, so negative values print with eight hex digits.
///
/// # Errors
///
/// Returns `VsmError::Io` if writing fails.
pub fn write_registers<W: Write>(out: &mut W, regs: &Registers) -> Result<()> {
    writeln!(out, "REGISTERS:")?;
    writeln!(out, "accumulator\t\t0x{:04X}", regs.accumulator as u32)?;
    writeln!(out, "instructionCounter\t0x{:04X}", regs.pc.val())?;
    writeln!(out, "instructionRegister\t0x{:04X}", regs.ir)?;
    writeln!(out, "opCode\t\t\t0x{:04X}", regs.opcode.bits())?;
    writeln!(out, "operand\t\t\t0x{:04X}", regs.operand)?;
    Ok(())
}

fn write_segment<W: Write>(
    out: &mut W,
    memory: &Memory,
    start: usize,
    len: usize,
    padded_labels: bool,
) -> Result<()> {
    writeln!(out, "{COLUMN_HEADER}")?;
    let words = memory.segment(start, len)?;
    for (row, chunk) in words.chunks(DUMP_ROW_WORDS).enumerate() {
        let label = start + row * DUMP_ROW_WORDS;
        if padded_labels {
            write!(out, "{label:04} ")?;
        } else {
            write!(out, "{label} ")?;
        }
        for word in chunk {
            write!(out, "{:02X} ", word & 0xFF)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
