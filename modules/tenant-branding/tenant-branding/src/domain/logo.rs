//! Logo selection and synthesized initials badges.

use tenant_branding_sdk::{LogoSource, Tenant};

use super::color::{parse_hex_rgb, rgb_or_default};

const BADGE_SIZE: u32 = 200;
const BADGE_RADIUS: u32 = 24;
const BADGE_FONT_SIZE: u32 = 84;
const TEXT_FALLBACK: &str = "#ffffff";

/// Up to two initials: the first letter of each of the first two words.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Square SVG badge: primary-color background, initials in the secondary
/// color (white when missing or malformed).
#[must_use]
pub fn generate_logo_svg(tenant: &Tenant) -> String {
    let background = rgb_or_default(tenant.primary_color.as_deref()).to_hex();
    let foreground = parse_hex_rgb(tenant.secondary_color.as_deref())
        .map_or_else(|| TEXT_FALLBACK.to_owned(), |rgb| rgb.to_hex());
    let text = escape_xml(&initials(&tenant.name));
    let center = BADGE_SIZE / 2;

    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{BADGE_SIZE}\" height=\"{BADGE_SIZE}\" \
         viewBox=\"0 0 {BADGE_SIZE} {BADGE_SIZE}\">\
         <rect width=\"{BADGE_SIZE}\" height=\"{BADGE_SIZE}\" rx=\"{BADGE_RADIUS}\" fill=\"{background}\"/>\
         <text x=\"{center}\" y=\"{center}\" dominant-baseline=\"central\" text-anchor=\"middle\" \
         font-family=\"Arial, Helvetica, sans-serif\" font-size=\"{BADGE_FONT_SIZE}\" font-weight=\"700\" \
         fill=\"{foreground}\">{text}</text></svg>"
    )
}

/// Encodes an SVG document as a `data:` URI.
#[must_use]
pub fn logo_data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;charset=utf-8,{}", urlencoding::encode(svg))
}

/// The tenant's own logo when set, otherwise a generated badge.
#[must_use]
pub fn resolve_logo(tenant: &Tenant) -> LogoSource {
    match tenant.logo.as_deref() {
        Some(url) if !url.trim().is_empty() => LogoSource::Url(url.to_owned()),
        _ => LogoSource::Generated(logo_data_uri(&generate_logo_svg(tenant))),
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
