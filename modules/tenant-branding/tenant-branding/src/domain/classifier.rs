//! System-path classification.
//!
//! One reserved set serves both the resolver (a system path is never a
//! tenant slug) and the applicator (system pages carry no tenant branding).

use crate::config::TenantBrandingConfig;

/// Returns the first non-empty `/`-delimited segment of `path`.
///
/// Query string and fragment are not part of the path. No decoding or case
/// folding is performed.
#[must_use]
pub fn first_segment(path: &str) -> Option<&str> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split('/').find(|segment| !segment.is_empty())
}

/// Exact, case-sensitive lookup in the reserved set.
#[must_use]
pub fn is_system_path(segment: &str, config: &TenantBrandingConfig) -> bool {
    config.system_paths.contains(segment)
}

/// Classifies a full path by its first segment. The root path is public.
#[must_use]
pub fn is_system_location(path: &str, config: &TenantBrandingConfig) -> bool {
    first_segment(path).is_some_and(|segment| is_system_path(segment, config))
}
