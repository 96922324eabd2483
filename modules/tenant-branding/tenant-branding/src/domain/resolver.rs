//! Host/path tenant resolution.
//!
//! Priority order: subdomain label under the root domain, then the first
//! path segment unless it is a reserved system path, then nothing.

use serde::Serialize;
use tracing::trace;

use super::classifier::{first_segment, is_system_path};
use crate::config::TenantBrandingConfig;

/// Where the candidate slug came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlugSource {
    Subdomain,
    Path,
    None,
}

/// Candidate tenant slug signaled by the URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedSlug {
    pub slug: Option<String>,
    pub source: SlugSource,
}

impl ResolvedSlug {
    fn none() -> Self {
        Self {
            slug: None,
            source: SlugSource::None,
        }
    }
}

/// Computes the candidate slug for a location. Pure.
#[must_use]
pub fn resolve(hostname: &str, path: &str, config: &TenantBrandingConfig) -> ResolvedSlug {
    if let Some(label) = subdomain_label(hostname, config) {
        trace!(hostname, label, "slug resolved from subdomain");
        return ResolvedSlug {
            slug: Some(label.to_owned()),
            source: SlugSource::Subdomain,
        };
    }

    match first_segment(path) {
        Some(segment) if !is_system_path(segment, config) => {
            trace!(path, segment, "slug resolved from path");
            ResolvedSlug {
                slug: Some(segment.to_owned()),
                source: SlugSource::Path,
            }
        }
        _ => ResolvedSlug::none(),
    }
}

/// Extracts `<label>` from `<label>.<root_domain>`.
///
/// Exactly one DNS label is accepted, and never a reserved subdomain or a
/// reserved system path. The port and a trailing root dot are ignored; the
/// root domain compares ASCII case-insensitively.
fn subdomain_label<'a>(hostname: &'a str, config: &TenantBrandingConfig) -> Option<&'a str> {
    let host = strip_port(hostname.trim());
    let host = host.strip_suffix('.').unwrap_or(host);
    let root = config.root_domain.trim();

    let split = host.len().checked_sub(root.len() + 1)?;
    if !host.is_char_boundary(split) {
        return None;
    }
    let (label, suffix) = host.split_at(split);
    let suffix = suffix.strip_prefix('.')?;

    if !suffix.eq_ignore_ascii_case(root) || label.is_empty() || label.contains('.') {
        return None;
    }
    if config
        .reserved_subdomains
        .iter()
        .chain(&config.system_paths)
        .any(|reserved| reserved.eq_ignore_ascii_case(label))
    {
        return None;
    }
    Some(label)
}

fn strip_port(host: &str) -> &str {
    match host.rsplit_once(':') {
        Some((name, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => name,
        _ => host,
    }
}
