//! Library half of the `scriptalias` binary.
//!
//! Kept separate from `src/bin` so the driver can be exercised by tests.

pub mod args;
pub mod config;
pub mod driver;
pub mod tracing_config;
