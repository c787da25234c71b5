//! Common utilities and types used throughout the VSM simulator.
//!
//! This module provides the building blocks shared by every other component:
//! 1. **Address Types:** Byte addresses from the instruction encoding and word indices into memory.
//! 2. **Constants:** Memory geometry, segment ranges, and instruction field masks.
//! 3. **Error Handling:** The simulator error type and `Result` alias.

/// Byte address and word index types.
pub mod addr;

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types.
pub mod error;

pub use addr::{ByteAddr, WordIndex};
pub use error::{Result, VsmError};
