//! Unit tests for the CPU core.
