//! Canonical hex color codes.
//!
//! Every hex value is canonicalized to `#rrggbb` (lowercase) before it is
//! compared or stored, so `#FFFFFF`, `ffffff` and `#fff` are the same color.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::errors::domain::{DomainError, ValidationKind};

/// A validated color in canonical `#rrggbb` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    /// Parse user or config input.
    ///
    /// Accepts an optional leading `#` followed by 3 or 6 hex digits;
    /// surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid(input));
        }

        let expanded: String = match digits.len() {
            6 => digits.to_ascii_lowercase(),
            3 => digits
                .chars()
                .flat_map(|c| {
                    let c = c.to_ascii_lowercase();
                    [c, c]
                })
                .collect(),
            _ => return Err(invalid(input)),
        };

        Ok(Self(format!("#{expanded}")))
    }

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(format!("#{r:02x}{g:02x}{b:02x}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        // Canonical form guarantees six valid hex digits after '#'
        let channel = |i: usize| u8::from_str_radix(&self.0[i..i + 2], 16).unwrap_or(0);
        (channel(1), channel(3), channel(5))
    }
}

fn invalid(input: &str) -> DomainError {
    DomainError::validation(
        ValidationKind::InvalidHex,
        format!("'{input}' is not a hex color; expected #rrggbb or #rgb"),
    )
}

impl FromStr for HexColor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
