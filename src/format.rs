//! Output formatting — a closed set of textual color formats.
//!
//! Formatting is a pure function from [`Color`] + format kind to string.
//! Only token resolution can fail; rendering itself is total, and the
//! picker downgrades a broken token to hex at the render site.

use std::fmt;

use thiserror::Error;

use crate::color::Color;

/// Output-format token outside the recognized set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color format token: {0:?}")]
pub struct FormatError(pub String);

/// The five textual output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Hex,
    Rgb,
    Rgba,
    Hsl,
    Hsla,
}

impl Format {
    /// Resolve a format token. Anything outside the closed set fails
    /// with [`FormatError`].
    pub fn from_token(token: &str) -> Result<Self, FormatError> {
        match token {
            "hex" => Ok(Self::Hex),
            "rgb" => Ok(Self::Rgb),
            "rgba" => Ok(Self::Rgba),
            "hsl" => Ok(Self::Hsl),
            "hsla" => Ok(Self::Hsla),
            _ => Err(FormatError(token.to_string())),
        }
    }

    /// Infer a format from a seed string's own grammar.
    ///
    /// Walks the grammar tokens in parser order and keeps the last prefix
    /// match, so `rgba(…)` infers `Rgba` rather than stopping at `Rgb`.
    /// Hex seeds start with `#` and plain `hsl(…)` prefixes no token;
    /// both infer nothing and leave the caller on the hex default.
    pub fn infer(seed: &str) -> Option<Self> {
        let mut found = None;
        for (token, format) in [
            ("rgb", Self::Rgb),
            ("rgba", Self::Rgba),
            ("hex", Self::Hex),
            ("hsla", Self::Hsla),
        ] {
            if seed.starts_with(token) {
                found = Some(format);
            }
        }
        found
    }

    /// Whether this format carries an alpha component (drives the alpha
    /// strip's visibility in the embedding layer).
    pub fn has_alpha(&self) -> bool {
        matches!(self, Self::Rgba | Self::Hsla)
    }

    /// Format `color` per `self`.
    pub fn render(&self, color: &Color) -> String {
        match self {
            Self::Hex => color.to_hex(),
            Self::Rgb => {
                let rgb = color.to_rgb();
                format!("rgb({},{},{})", rgb.r, rgb.g, rgb.b)
            }
            Self::Rgba => {
                let rgb = color.to_rgb();
                format!("rgba({},{},{},{})", rgb.r, rgb.g, rgb.b, rgb.a)
            }
            Self::Hsl => {
                let hsl = color.to_hsl();
                format!(
                    "hsl({},{}%,{}%)",
                    (hsl.h * 360.0).round() as i64,
                    (hsl.s * 100.0).round() as i64,
                    (hsl.l * 100.0).round() as i64
                )
            }
            Self::Hsla => {
                let hsl = color.to_hsl();
                format!(
                    "hsla({},{}%,{}%,{})",
                    (hsl.h * 360.0).round() as i64,
                    (hsl.s * 100.0).round() as i64,
                    (hsl.l * 100.0).round() as i64,
                    hsl.a
                )
            }
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
            Self::Hsl => "hsl",
            Self::Hsla => "hsla",
        })
    }
}
