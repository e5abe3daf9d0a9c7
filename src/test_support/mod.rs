//! Test utilities for cmakegen unit tests.
//!
//! Provides fixtures that lay out fake engine and game trees on disk so
//! discovery and generation can be exercised end to end.
//!
//! # Example
//!
//! ```rust,ignore
//! use cmakegen::test_support::EngineFixture;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = EngineFixture::new()
//!         .module("Engine/Source/Runtime/Core", "Core")
//!         .file("Engine/Source/Runtime/Core/Private/Core.cpp", "");
//!
//!     let roots = fixture.roots();
//!     // Discover and generate against `roots`...
//! }
//! ```

pub mod fixtures;

// Re-export fixtures for convenience
pub use fixtures::*;
