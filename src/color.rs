use crate::error::{ConversionError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 8-bit RGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn is_achromatic(&self) -> bool {
        self.r == self.g && self.g == self.b
    }

    /// Largest per-channel absolute difference
    pub fn max_channel_diff(&self, other: &Rgb) -> u8 {
        self.r
            .abs_diff(other.r)
            .max(self.g.abs_diff(other.g))
            .max(self.b.abs_diff(other.b))
    }

    fn parse_hex(input: &str, hex: &str) -> Result<Self> {
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ConversionError::invalid_color(input, "expected 6 hex digits"));
        }

        let channel = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&hex[range], 16).map_err(|e| {
                ConversionError::invalid_color(input, format!("failed to parse {} component: {}", name, e))
            })
        };

        Ok(Self {
            r: channel(0..2, "red")?,
            g: channel(2..4, "green")?,
            b: channel(4..6, "blue")?,
        })
    }

    fn parse_triple(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ConversionError::invalid_color(input, "expected three comma-separated channels"));
        }

        let mut channels = [0u8; 3];
        for (slot, (part, name)) in channels.iter_mut().zip(parts.iter().zip(["red", "green", "blue"])) {
            *slot = part.parse::<u8>().map_err(|e| {
                ConversionError::invalid_color(input, format!("{} channel '{}': {}", name, part, e))
            })?;
        }

        Ok(Self::from(channels))
    }
}

impl FromStr for Rgb {
    type Err = ConversionError;

    /// Accepts `#RRGGBB`, `RRGGBB` or `r,g,b`
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.contains(',') {
            Self::parse_triple(trimmed)
        } else {
            Self::parse_hex(s, trimmed.trim_start_matches('#'))
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// Hue in degrees, saturation and intensity in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsi {
    pub h: f64,
    pub s: f64,
    pub i: f64,
}

impl Hsi {
    pub const fn new(h: f64, s: f64, i: f64) -> Self {
        Self { h, s, i }
    }
}

impl fmt::Display for Hsi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "H={:.2}°, S={:.2}, I={:.2}", self.h, self.s, self.i)
    }
}

impl From<(f64, f64, f64)> for Hsi {
    fn from((h, s, i): (f64, f64, f64)) -> Self {
        Self { h, s, i }
    }
}
