//! Round-trip reports: RGB -> HSI -> RGB for a list of named colors.

use crate::color::{Hsi, Rgb};
use crate::converter::ColorSpaceConverter;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A color as written in config files or on the command line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedColor {
    pub name: String,
    /// `#RRGGBB`, `RRGGBB` or `r,g,b`
    pub color: String,
}

impl NamedColor {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    pub fn to_rgb(&self) -> Result<Rgb> {
        self.color.parse()
    }
}

pub fn default_examples() -> Vec<NamedColor> {
    vec![
        NamedColor::new("Red", "255,0,0"),
        NamedColor::new("Cyan", "0,255,255"),
        NamedColor::new("Mid-Gray", "128,128,128"),
        NamedColor::new("Complex", "150,75,200"),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundTrip {
    pub name: String,
    pub original: Rgb,
    pub hsi: Hsi,
    pub restored: Rgb,
}

impl RoundTrip {
    pub fn new(name: impl Into<String>, original: Rgb) -> Self {
        let (h, s, i) = ColorSpaceConverter::rgb_to_hsi(original.r as i32, original.g as i32, original.b as i32);
        let restored = ColorSpaceConverter::hsi_to_rgb(h, s, i);

        Self {
            name: name.into(),
            original,
            hsi: Hsi::new(h, s, i),
            restored: restored.into(),
        }
    }

    pub fn max_error(&self) -> u8 {
        self.original.max_channel_diff(&self.restored)
    }
}

impl fmt::Display for RoundTrip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- {} ---", self.name)?;
        writeln!(f, "Original RGB: {}", self.original)?;
        writeln!(f, "Converted to HSI: {}", self.hsi)?;
        writeln!(f, "Converted back to RGB: {}", self.restored)
    }
}

/// Run every color through the round trip, stopping at the first unparsable one
pub fn run_round_trips(colors: &[NamedColor]) -> Result<Vec<RoundTrip>> {
    colors
        .iter()
        .map(|named| {
            let rgb = named.to_rgb()?;
            let report = RoundTrip::new(named.name.as_str(), rgb);
            if report.max_error() > 1 {
                crate::log_warn!("{} drifted by {} after round trip", report.name, report.max_error());
            }
            Ok(report)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_examples_parse() {
        let reports = run_round_trips(&default_examples()).unwrap();
        assert_eq!(reports.len(), 4);
        for report in &reports {
            assert_eq!(report.original, report.restored, "{}", report.name);
        }
    }

    #[test]
    fn test_display_matches_printout_format() {
        let report = RoundTrip::new("Red", Rgb::new(255, 0, 0));
        assert_eq!(
            report.to_string(),
            "--- Red ---\n\
             Original RGB: (255, 0, 0)\n\
             Converted to HSI: H=0.00°, S=1.00, I=0.33\n\
             Converted back to RGB: (255, 0, 0)\n"
        );
    }

    #[test]
    fn test_bad_color_is_reported() {
        let colors = vec![NamedColor::new("Good", "#000000"), NamedColor::new("Bad", "nope")];
        assert!(run_round_trips(&colors).is_err());
    }

    #[test]
    fn test_json_shape() {
        let report = RoundTrip::new("Cyan", Rgb::new(0, 255, 255));
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["name"], "Cyan");
        assert_eq!(value["restored"]["g"], 255);
        assert!((value["hsi"]["h"].as_f64().unwrap() - 180.0).abs() < 1e-9);
    }
}
