//! Per-platform source exclusion.
//!
//! Filtering stays minimal so symbols from other platforms remain
//! navigable. Only third-party trees and folders that cannot be indexed
//! on the host are hidden.

use crate::core::HostPlatform;

const THIRD_PARTY: &str = "Source/ThirdParty/";

/// Path fragments hidden from the descriptor, per host platform.
///
/// Platforms without an entry exclude nothing.
const EXCLUSIONS: &[(HostPlatform, &[&str])] = &[
    (HostPlatform::Win64, &[THIRD_PARTY]),
    (HostPlatform::Linux, &[THIRD_PARTY]),
    (
        HostPlatform::Mac,
        &[
            THIRD_PARTY,
            "/Windows/",
            "/Linux/",
            "/VisualStudioSourceCodeAccess/",
            "/WmfMedia/",
            "/WindowsDeviceProfileSelector/",
            "/WindowsMoviePlayer/",
            "/WinRT/",
        ],
    ),
];

/// Fragments excluded on `platform`.
pub fn excluded_fragments(platform: HostPlatform) -> &'static [&'static str] {
    EXCLUSIONS
        .iter()
        .find(|(p, _)| *p == platform)
        .map(|(_, fragments)| *fragments)
        .unwrap_or(&[])
}

/// Whether an engine-relative, `/`-separated path is hidden on `platform`.
pub fn is_excluded(rel_path: &str, platform: HostPlatform) -> bool {
    excluded_fragments(platform)
        .iter()
        .any(|fragment| rel_path.contains(fragment))
}
