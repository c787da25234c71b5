//! Instruction Disassembler for the VSM.
//!
//! Converts a 16-bit instruction word into a human-readable string for
//! instruction tracing and program listings.
//!
//! # Syntax
//!
//! - `#n`: immediate literal
//! - `[n]`: memory word `n` (already converted from the byte address)
//! - bare `n`: jump target word
//!
//! ```
//! use vsm_core::isa::disasm::disassemble;
//!
//! assert_eq!(disassemble(0x1805), "LOAD #5");
//! assert_eq!(disassemble(0x5006), "ADD [3]");
//! assert_eq!(disassemble(0xC008), "JMP 4");
//! assert_eq!(disassemble(0xF000), "HALT");
//! ```

use std::fmt::Write;

use crate::isa::decode::decode;
use crate::isa::instruction::{Decoded, Instruction, Source};
use crate::isa::word::format_word;

/// Disassembles a single instruction word.
pub fn disassemble(word: u16) -> String {
    format_decoded(&decode(word))
}

/// Formats an already decoded instruction.
pub fn format_decoded(decoded: &Decoded) -> String {
    let mnemonic = decoded.opcode.mnemonic();
    match decoded.instruction {
        Instruction::End | Instruction::Neg | Instruction::Nop | Instruction::Halt => {
            mnemonic.to_string()
        }
        Instruction::Load(src)
        | Instruction::Add(src)
        | Instruction::Sub(src)
        | Instruction::Mul(src)
        | Instruction::Div(src)
        | Instruction::Mod(src) => match src {
            Source::Immediate(value) => format!("{mnemonic} #{value}"),
            Source::Memory(index) => format!("{mnemonic} [{index}]"),
        },
        Instruction::Store(index) | Instruction::Read(index) | Instruction::Write(index) => {
            format!("{mnemonic} [{index}]")
        }
        Instruction::Jmp(target) | Instruction::Jneg(target) | Instruction::Jzero(target) => {
            format!("{mnemonic} {target}")
        }
    }
}

/// Produces a listing of `words`, one line per word: index, binary, hex, text.
pub fn listing(words: &[u16]) -> String {
    let mut out = String::new();
    for (index, &word) in words.iter().enumerate() {
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "{index:04}: {}  {word:04X}  {}",
            format_word(word),
            disassemble(word)
        );
    }
    out
}
