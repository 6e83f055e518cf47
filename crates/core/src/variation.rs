//! Font variation descriptions.
//!
//! The loader declares variants with a compact two-character code: a style
//! letter (`n`/`i`/`o`) followed by a weight digit (`4` = 400, `7` = 700).

use std::{fmt, str::FromStr};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

impl FontStyle {
    pub const fn code(self) -> char {
        match self {
            FontStyle::Normal => 'n',
            FontStyle::Italic => 'i',
            FontStyle::Oblique => 'o',
        }
    }

    fn from_code(code: char) -> Option<Self> {
        match code {
            'n' => Some(FontStyle::Normal),
            'i' => Some(FontStyle::Italic),
            'o' => Some(FontStyle::Oblique),
            _ => None,
        }
    }
}

/// CSS weight class, 100 through 900.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weight(pub u16);

impl Weight {
    pub const NORMAL: Self = Weight(400);
    pub const BOLD: Self = Weight(700);

    const fn digit(self) -> u16 {
        self.0 / 100
    }

    fn from_digit(digit: u32) -> Option<Self> {
        matches!(digit, 1..=9).then(|| Weight(digit as u16 * 100))
    }
}

impl Default for Weight {
    fn default() -> Self {
        Weight::NORMAL
    }
}

/// A single style/weight variant of a family, e.g. `n4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Variation {
    pub style: FontStyle,
    pub weight: Weight,
}

impl FromStr for Variation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let err = || Error::Variation(s.to_string());
        let mut chars = s.chars();
        let style = chars.next().and_then(FontStyle::from_code).ok_or_else(err)?;
        let weight = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .and_then(Weight::from_digit)
            .ok_or_else(err)?;
        if chars.next().is_some() {
            return Err(err());
        }
        Ok(Self { style, weight })
    }
}

impl fmt::Display for Variation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.style.code(), self.weight.digit())
    }
}
