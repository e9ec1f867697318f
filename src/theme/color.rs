// Color literals accepted by terminal preference stores
//
// Two syntaxes, nothing else:
// - Hex: #RRGGBB (either case)
// - RGBA: rgba(r,g,b,a) with r,g,b in 0-255 and a in [0,1], no spaces
//
// Digits are ASCII only; the regex crate's \d would admit any Unicode digit.
//
// The literal is stored verbatim so whatever a theme author wrote is exactly
// what lands in the host's preference store.

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use super::ThemeError;

static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid hex color regex"));

static RGBA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgba\(([0-9]+),([0-9]+),([0-9]+),(0|1|0?\.[0-9]+)\)$")
        .expect("valid rgba color regex")
});

/// Which of the two accepted syntaxes a color was written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSyntax {
    Hex,
    Rgba,
}

/// A validated color literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColorValue {
    raw: String,
    syntax: ColorSyntax,
    rgb: (u8, u8, u8),
}

impl ColorValue {
    /// Validate `value` as the color for `field`.
    ///
    /// `field` only feeds the error message so a bad literal can be traced
    /// back to its slot.
    pub fn parse(field: &str, value: &str) -> Result<Self, ThemeError> {
        let invalid = || ThemeError::InvalidColorFormat {
            field: field.to_string(),
            value: value.to_string(),
        };

        if HEX_RE.is_match(value) {
            let channel = |i: usize| u8::from_str_radix(&value[i..i + 2], 16).map_err(|_| invalid());
            return Ok(Self {
                raw: value.to_string(),
                syntax: ColorSyntax::Hex,
                rgb: (channel(1)?, channel(3)?, channel(5)?),
            });
        }

        if let Some(caps) = RGBA_RE.captures(value) {
            // [0-9]+ admits values past 255 (and past u8 entirely); reject both
            let channel = |i: usize| caps[i].parse::<u8>().map_err(|_| invalid());
            return Ok(Self {
                raw: value.to_string(),
                syntax: ColorSyntax::Rgba,
                rgb: (channel(1)?, channel(2)?, channel(3)?),
            });
        }

        Err(invalid())
    }

    /// The literal exactly as written
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn syntax(&self) -> ColorSyntax {
        self.syntax
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        self.rgb
    }

    /// Lowercase `#rrggbb` form; alpha is dropped for rgba literals.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.rgb;
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for ColorValue {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse("color", s)
    }
}

impl AsRef<str> for ColorValue {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}
