//! CSS color strings, the format chart renderers take.
//!
//! ```
//! use rank_palette::{css, RGB8};
//! assert_eq!(css::parse("rgb(8, 48, 107)")?, RGB8::new(8, 48, 107));
//! assert_eq!(css::hex(RGB8::new(8, 48, 107)), "#08306b");
//! # Ok::<(), rank_palette::Error>(())
//! ```

use crate::{Error, Result, RGB8};

const NAMES: [(&str, RGB8); 9] = [
    ("black", RGB8 { r: 0, g: 0, b: 0 }),
    ("blue", RGB8 { r: 0, g: 0, b: 255 }),
    ("gray", RGB8 { r: 128, g: 128, b: 128 }),
    ("green", RGB8 { r: 0, g: 128, b: 0 }),
    ("grey", RGB8 { r: 128, g: 128, b: 128 }),
    ("orange", RGB8 { r: 255, g: 165, b: 0 }),
    ("red", RGB8 { r: 255, g: 0, b: 0 }),
    ("white", RGB8 { r: 255, g: 255, b: 255 }),
    ("yellow", RGB8 { r: 255, g: 255, b: 0 }),
];

/// `#rrggbb` notation of `c`.
pub fn hex(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

/// `rgb(r, g, b)` notation of `c`.
pub fn rgb(c: RGB8) -> String {
    format!("rgb({}, {}, {})", c.r, c.g, c.b)
}

/// Parse `#rrggbb`, `#rgb`, `rgb(r, g, b)` or one of a few color
/// names (`red`, `blue`, …).
pub fn parse(s: &str) -> Result<RGB8> {
    let t = s.trim();
    let invalid = || Error::InvalidColor(s.to_string());
    if let Some(h) = t.strip_prefix('#') {
        parse_hex(h).ok_or_else(invalid)
    } else if let Some(args) = t.strip_prefix("rgb(")
        .and_then(|t| t.strip_suffix(')')) {
        parse_rgb(args).ok_or_else(invalid)
    } else {
        NAMES.iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(t))
            .map(|&(_, c)| c)
            .ok_or_else(invalid)
    }
}

fn parse_hex(h: &str) -> Option<RGB8> {
    if !h.bytes().all(|b| b.is_ascii_hexdigit()) { return None }
    let digit = |i: usize, len: usize| u8::from_str_radix(&h[i .. i + len], 16).ok();
    match h.len() {
        6 => Some(RGB8::new(digit(0, 2)?, digit(2, 2)?, digit(4, 2)?)),
        3 => Some(RGB8::new(17 * digit(0, 1)?, 17 * digit(1, 1)?,
                            17 * digit(2, 1)?)),
        _ => None,
    }
}

fn parse_rgb(args: &str) -> Option<RGB8> {
    let mut c = [0u8; 3];
    let mut parts = args.split(',');
    for x in c.iter_mut() {
        let d = parts.next()?.trim();
        if d.is_empty() || !d.bytes().all(|b| b.is_ascii_digit()) { return None }
        *x = d.parse().ok()?;
    }
    if parts.next().is_some() { return None }
    Some(RGB8::new(c[0], c[1], c[2]))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_notation() {
        assert_eq!(hex(RGB8::new(247, 251, 255)), "#f7fbff");
        assert_eq!(rgb(RGB8::new(247, 251, 255)), "rgb(247, 251, 255)");
    }

    #[test]
    fn parse_forms() {
        assert_eq!(parse("#08306B").unwrap(), RGB8::new(8, 48, 107));
        assert_eq!(parse("#f0a").unwrap(), RGB8::new(255, 0, 170));
        assert_eq!(parse(" rgb(8,48,107) ").unwrap(), RGB8::new(8, 48, 107));
        assert_eq!(parse("Red").unwrap(), RGB8::new(255, 0, 0));
    }

    #[test]
    fn parse_errors() {
        for s in ["", "#12345", "#ggg", "rgb(1,2)", "rgb(1,2,3,4)",
                  "rgb(256,0,0)", "rgb(+1, 2, 3)", "rgb(1, -0, 3)",
                  "rgb(1, , 3)", "mauve", "#ééé", "#+ff", "#+fffff"] {
            assert_eq!(parse(s), Err(Error::InvalidColor(s.to_string())), "{s}");
        }
    }
}
