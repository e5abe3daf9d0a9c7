//! cmakegen - CMakeLists.txt generator for Unreal-style module build graphs
//!
//! This crate discovers engine and game modules, buckets their files,
//! aggregates IntelliSense metadata of the generated projects, and writes a
//! single `CMakeLists.txt` that IDEs can open for navigation and for
//! invoking the build driver.

pub mod core;
pub mod generator;
pub mod ops;
pub mod sources;
pub mod util;

/// Test utilities for cmakegen unit tests.
///
/// This module is only available when compiling with `--cfg test` or
/// running tests. It provides temporary engine and game trees.
#[cfg(test)]
pub mod test_support;

pub use core::{
    Configuration, DiscoveredModule, GameProject, GeneratedProject, HostPlatform, ModuleFile,
    ProjectTarget, RootContext,
};
pub use generator::{Descriptor, GenerateError, GeneratorContext};
pub use util::context::GlobalContext;
