//! Textual color parsing — five grammars tried in fixed priority order.
//!
//! The grammar set and its priority follow the jquery-color conventions:
//! integer rgb()/rgba(), percentage rgb()/rgba(), 6-digit hex, 3-digit
//! hex, then hsl()/hsla(). Input is lower-cased before matching and a
//! match may sit anywhere in the string; the first grammar to match
//! structurally wins regardless of specificity. Channel ranges are not
//! re-validated — `rgb(300,0,0)` passes through out of gamut.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use thiserror::Error;

use crate::color::Color;
use crate::math;

/// No recognized color grammar matched the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized color string: {0:?}")]
pub struct ParseError(pub String);

static RGB_INT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*(\d+(?:\.\d+)?)\s*)?\)")
        .expect("valid regex")
});

static RGB_PCT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"rgba?\(\s*(\d+(?:\.\d+)?)%\s*,\s*(\d+(?:\.\d+)?)%\s*,\s*(\d+(?:\.\d+)?)%\s*(?:,\s*(\d+(?:\.\d+)?)\s*)?\)",
    )
    .expect("valid regex")
});

static HEX6: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([a-f0-9]{2})([a-f0-9]{2})([a-f0-9]{2})").expect("valid regex"));

static HEX3: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#([a-f0-9])([a-f0-9])([a-f0-9])").expect("valid regex"));

static HSL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"hsla?\(\s*(\d+(?:\.\d+)?)\s*,\s*(\d+(?:\.\d+)?)%\s*,\s*(\d+(?:\.\d+)?)%\s*(?:,\s*(\d+(?:\.\d+)?)\s*)?\)",
    )
    .expect("valid regex")
});

/// Required capture as f64. The grammars only capture digit runs, so the
/// numeric parse cannot fail.
fn num(caps: &Captures<'_>, i: usize) -> f64 {
    caps.get(i)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0.0)
}

/// Optional trailing alpha capture; absent means fully opaque. An
/// explicit `0` is kept as-is.
fn alpha(caps: &Captures<'_>, i: usize) -> f64 {
    caps.get(i)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(1.0)
}

/// Two hex digits as a 0–255 value.
fn hex_pair(s: &str) -> f64 {
    u8::from_str_radix(s, 16).unwrap_or(0) as f64
}

/// One hex digit duplicated into both nibbles (`a` → `aa`).
fn hex_nibble(s: &str) -> f64 {
    hex_pair(s) * 17.0
}

pub(crate) fn parse(text: &str) -> Result<Color, ParseError> {
    let lower = text.to_lowercase();
    if let Some(c) = RGB_INT.captures(&lower) {
        return Ok(Color::from_rgb_255(
            num(&c, 1),
            num(&c, 2),
            num(&c, 3),
            alpha(&c, 4),
        ));
    }
    if let Some(c) = RGB_PCT.captures(&lower) {
        return Ok(Color::from_rgb_255(
            2.55 * num(&c, 1),
            2.55 * num(&c, 2),
            2.55 * num(&c, 3),
            alpha(&c, 4),
        ));
    }
    if let Some(c) = HEX6.captures(&lower) {
        return Ok(Color::from_rgb_255(
            hex_pair(&c[1]),
            hex_pair(&c[2]),
            hex_pair(&c[3]),
            1.0,
        ));
    }
    if let Some(c) = HEX3.captures(&lower) {
        return Ok(Color::from_rgb_255(
            hex_nibble(&c[1]),
            hex_nibble(&c[2]),
            hex_nibble(&c[3]),
            1.0,
        ));
    }
    if let Some(c) = HSL.captures(&lower) {
        let (r, g, b) = math::hsl_to_rgb(num(&c, 1) / 360.0, num(&c, 2) / 100.0, num(&c, 3) / 100.0);
        return Ok(Color::from_rgb_255(r, g, b, alpha(&c, 4)));
    }
    Err(ParseError(text.to_string()))
}

impl Color {
    /// Parse a color string in any of the five recognized grammars.
    ///
    /// Fails with [`ParseError`] when nothing matches; the caller owns
    /// any fallback seed — no color is substituted here.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        parse(text)
    }
}
