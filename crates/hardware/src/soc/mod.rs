//! Machine I/O attachments.
//!
//! The VSM's only peripheral is its console: the token stream that feeds the
//! loader and READ, and the output that receives WRITE.

/// Stream-backed console implementation and tokenizer.
pub mod console;

/// The `Console` trait.
pub mod traits;

pub use console::StreamConsole;
pub use traits::Console;
