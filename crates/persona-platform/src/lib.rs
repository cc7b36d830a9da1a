//! Browser adapters for the `persona-core` ports.

pub mod storage;
pub mod clock;
pub mod config;
