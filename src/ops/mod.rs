//! High-level operations.
//!
//! This module contains the implementation of cmakegen commands.

pub mod clean;
pub mod generate;

pub use clean::{clean, CleanResult};
pub use generate::{discover, generate, plan, plan_with, GenerateOptions, GenerateResult};
