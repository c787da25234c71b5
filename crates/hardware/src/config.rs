//! Configuration system for the VSM simulator.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** The fixed VSM geometry (2048 words, code at 0, data at 1024).
//! 2. **Structures:** General run control and memory layout sections.
//! 3. **Loading:** JSON parsing and validation.
//!
//! Every field is optional in JSON; `Config::default()` reproduces the stock machine.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::{Result, VsmError};

/// Default configuration constants for the simulator.
mod defaults {
    use crate::common::constants;

    /// Memory capacity in words.
    pub const CAPACITY: usize = constants::MEMORY_WORDS;

    /// First word of the code segment.
    pub const CODE_SEGMENT_START: usize = constants::CODE_SEGMENT_START;

    /// Words of the code segment shown in the dump.
    pub const CODE_SEGMENT_LEN: usize = constants::CODE_SEGMENT_LEN;

    /// First word of the data segment.
    pub const DATA_SEGMENT_START: usize = constants::DATA_SEGMENT_START;

    /// Words of the data segment shown in the dump.
    pub const DATA_SEGMENT_LEN: usize = constants::DATA_SEGMENT_LEN;
}

/// Upper bound on memory capacity in words.
const MAX_CAPACITY: usize = 0x1000;

/// Number of words per dump row; segment lengths must be a multiple of this.
pub const DUMP_ROW_WORDS: usize = 10;

/// Root configuration.
///
/// # Examples
///
/// ```
/// use vsm_core::config::Config;
///
/// let json = r#"{ "general": { "max_steps": 5000 } }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.general.max_steps, Some(5000));
/// assert_eq!(config.memory.capacity, 2048);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General run settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Memory size and segment layout
    #[serde(default)]
    pub memory: MemoryConfig,
}

/// General simulation settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Log every executed instruction at trace level.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Abort the run after this many instructions (None runs until HALT).
    #[serde(default)]
    pub max_steps: Option<u64>,
}

/// Memory geometry.
///
/// The segments only affect what the dump shows; the machine never checks them.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Capacity in 16-bit words
    #[serde(default = "MemoryConfig::default_capacity")]
    pub capacity: usize,

    /// First word of the code segment
    #[serde(default = "MemoryConfig::default_code_segment_start")]
    pub code_segment_start: usize,

    /// Number of code segment words in the dump
    #[serde(default = "MemoryConfig::default_code_segment_len")]
    pub code_segment_len: usize,

    /// First word of the data segment
    #[serde(default = "MemoryConfig::default_data_segment_start")]
    pub data_segment_start: usize,

    /// Number of data segment words in the dump
    #[serde(default = "MemoryConfig::default_data_segment_len")]
    pub data_segment_len: usize,
}

impl MemoryConfig {
    fn default_capacity() -> usize {
        defaults::CAPACITY
    }

    fn default_code_segment_start() -> usize {
        defaults::CODE_SEGMENT_START
    }

    fn default_code_segment_len() -> usize {
        defaults::CODE_SEGMENT_LEN
    }

    fn default_data_segment_start() -> usize {
        defaults::DATA_SEGMENT_START
    }

    fn default_data_segment_len() -> usize {
        defaults::DATA_SEGMENT_LEN
    }

    /// End (exclusive) of the code segment, `None` if it overflows `usize`.
    pub const fn code_segment_end(&self) -> Option<usize> {
        self.code_segment_start.checked_add(self.code_segment_len)
    }

    /// End (exclusive) of the data segment, `None` if it overflows `usize`.
    pub const fn data_segment_end(&self) -> Option<usize> {
        self.data_segment_start.checked_add(self.data_segment_len)
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            capacity: defaults::CAPACITY,
            code_segment_start: defaults::CODE_SEGMENT_START,
            code_segment_len: defaults::CODE_SEGMENT_LEN,
            data_segment_start: defaults::DATA_SEGMENT_START,
            data_segment_len: defaults::DATA_SEGMENT_LEN,
        }
    }
}

impl Config {
    /// Parses and validates a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `VsmError::ConfigParse` for malformed JSON and `VsmError::Config`
    /// when the values fail [`Config::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses, and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns `VsmError::Io` if the file cannot be read, otherwise as [`Config::from_json`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Checks that the memory geometry can hold both dumped segments.
    ///
    /// # Errors
    ///
    /// Returns `VsmError::Config` describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        let mem = &self.memory;
        if mem.capacity == 0 || mem.capacity > MAX_CAPACITY {
            return Err(VsmError::Config(format!(
                "memory capacity must be between 1 and {MAX_CAPACITY} words, got {}",
                mem.capacity
            )));
        }
        for (name, start, len, end) in [
            ("code", mem.code_segment_start, mem.code_segment_len, mem.code_segment_end()),
            ("data", mem.data_segment_start, mem.data_segment_len, mem.data_segment_end()),
        ] {
            if len % DUMP_ROW_WORDS != 0 {
                return Err(VsmError::Config(format!(
                    "{name} segment length {len} is not a multiple of {DUMP_ROW_WORDS}"
                )));
            }
            let Some(end) = end else {
                return Err(VsmError::Config(format!(
                    "{name} segment start {start} plus length {len} overflows"
                )));
            };
            if end > mem.capacity {
                return Err(VsmError::Config(format!(
                    "{name} segment [{start}, {end}) exceeds memory capacity {}",
                    mem.capacity
                )));
            }
        }
        Ok(())
    }
}
