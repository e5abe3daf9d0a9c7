//! Core data structures for cmakegen.
//!
//! This module contains the foundational types used throughout generation:
//! - Host platforms and build configurations
//! - Engine/game roots and their symbolic tokens
//! - Modules and generated project metadata

pub mod configuration;
pub mod platform;
pub mod project;
pub mod roots;

pub use configuration::Configuration;
pub use platform::HostPlatform;
pub use project::{DiscoveredModule, GeneratedProject, ModuleFile, ProjectTarget};
pub use roots::{GameProject, RootContext};
