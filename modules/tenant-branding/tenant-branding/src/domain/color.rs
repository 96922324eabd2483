//! Brand color parsing.

use tenant_branding_sdk::Rgb;

/// Parses `#rrggbb` (the `#` is optional). Anything else is `None`.
#[must_use]
pub fn parse_hex_rgb(input: Option<&str>) -> Option<Rgb> {
    let raw = input?;
    let hex = raw.strip_prefix('#').unwrap_or(raw);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Like [`parse_hex_rgb`], substituting the platform gold.
#[must_use]
pub fn rgb_or_default(input: Option<&str>) -> Rgb {
    parse_hex_rgb(input).unwrap_or(Rgb::DEFAULT_GOLD)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(parse_hex_rgb(Some("#112233")), Some(Rgb(17, 34, 51)));
        assert_eq!(parse_hex_rgb(Some("FFaa00")), Some(Rgb(255, 170, 0)));
    }

    #[test]
    fn malformed_input_falls_back_to_gold() {
        for input in [
            None,
            Some(""),
            Some("#"),
            Some("#fff"),
            Some("#12345"),
            Some("#1234567"),
            Some("##112233"),
            Some("#11223g"),
            Some("  #112233 "),
            Some("112233\n"),
            Some("rgb(1,2,3)"),
            Some("red"),
            Some("#\u{e7}\u{e7}\u{e7}"),
        ] {
            assert_eq!(rgb_or_default(input), Rgb::DEFAULT_GOLD, "input {input:?}");
        }
    }
}
