//! Build graph sources.
//!
//! Sources tell the generator which modules exist, which files belong to
//! them, and which projects and targets were generated.

pub mod path;
pub mod projects;
pub mod source;

pub use path::PathSource;
pub use projects::{DeclaredProjects, TargetProjects};
pub use source::{ModuleDiscovery, ProjectSource, SourceFileSearch};
