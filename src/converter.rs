//! RGB <-> HSI conversion
//!
//! Hue is reported in degrees, saturation and intensity in [0, 1]. The
//! permissive functions never fail: out-of-range inputs produce whatever the
//! formulas yield. The `try_*` variants reject them instead.

use crate::color::{Hsi, Rgb};
use crate::error::{ConversionError, Result};

/// Floor for the hue denominator, guarding residual noise on near-gray input
const MIN_HUE_DENOMINATOR: f64 = 1e-10;

const SECTOR_WIDTH: f64 = 120.0;

const RED: usize = 0;
const GREEN: usize = 1;
const BLUE: usize = 2;

/// One 120° hue sector of the HSI -> RGB inverse.
///
/// `low` is the channel fixed at `I(1 - S)`, `primary` is solved from the hue
/// angle, `remaining` takes what is left of the `R + G + B = 3I` sum.
struct Sector {
    offset: f64,
    low: usize,
    primary: usize,
    remaining: usize,
}

const SECTORS: [Sector; 3] = [
    Sector { offset: 0.0, low: BLUE, primary: RED, remaining: GREEN },
    Sector { offset: 120.0, low: RED, primary: GREEN, remaining: BLUE },
    Sector { offset: 240.0, low: GREEN, primary: BLUE, remaining: RED },
];

impl Sector {
    /// Sector containing a hue already normalized into [0, 360).
    /// Intervals are half-open, so 120 and 240 open the next sector.
    fn for_hue(hue: f64) -> &'static Sector {
        let index = ((hue / SECTOR_WIDTH) as usize).min(SECTORS.len() - 1);
        &SECTORS[index]
    }

    fn solve(&self, hue: f64, s: f64, i: f64) -> [f64; 3] {
        let h_rad = (hue - self.offset).to_radians();
        // h_rad lies in [0, 120°) so the divisor stays within [0.5, 1]
        let divisor = (60.0_f64.to_radians() - h_rad).cos();

        let mut channels = [0.0; 3];
        channels[self.low] = i * (1.0 - s);
        channels[self.primary] = i * (1.0 + s * h_rad.cos() / divisor);
        channels[self.remaining] = 3.0 * i - (channels[self.low] + channels[self.primary]);
        channels
    }
}

/// Wrap any hue into [0, 360)
pub fn normalize_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Clamp a unit channel to [0, 1] and quantize it to 8 bits.
///
/// Ties round half away from zero (`f64::round`), so 126.5 becomes 127.
fn to_channel(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

pub struct ColorSpaceConverter;

impl ColorSpaceConverter {
    /// Convert an RGB triple to `(hue°, saturation, intensity)`.
    ///
    /// Channels are expected in [0, 255] but not checked; see
    /// [`ColorSpaceConverter::try_rgb_to_hsi`] for the validated form.
    ///
    /// Intensity and saturation are taken from the integer channel sum, so a
    /// gray input gives exactly `S == 0` and `I == k / 255`.
    pub fn rgb_to_hsi(r: i32, g: i32, b: i32) -> (f64, f64, f64) {
        let total = r as i64 + g as i64 + b as i64;
        let min = r.min(g).min(b) as i64;

        let i = total as f64 / 765.0;
        let s = if total == 0 {
            0.0
        } else {
            1.0 - (3 * min) as f64 / total as f64
        };

        if s == 0.0 {
            return (0.0, s, i);
        }

        let r = r as f64 / 255.0;
        let g = g as f64 / 255.0;
        let b = b as f64 / 255.0;

        let numerator = 0.5 * ((r - g) + (r - b));
        let denominator = ((r - g).powi(2) + (r - b) * (g - b))
            .sqrt()
            .max(MIN_HUE_DENOMINATOR);
        let theta = (numerator / denominator).clamp(-1.0, 1.0).acos().to_degrees();

        let h = if b <= g { theta } else { 360.0 - theta };

        (h, s, i)
    }

    /// Convert `(hue°, saturation, intensity)` to an RGB triple.
    ///
    /// Hue is wrapped modulo 360 first. Each channel is clamped to [0, 1]
    /// before scaling, and rounding sends ties away from zero.
    pub fn hsi_to_rgb(h: f64, s: f64, i: f64) -> (u8, u8, u8) {
        if s == 0.0 {
            let v = to_channel(i);
            return (v, v, v);
        }

        let [r, g, b] = Self::hsi_to_unit_rgb(h, s, i);
        (to_channel(r), to_channel(g), to_channel(b))
    }

    /// Unquantized, unclamped `[r, g, b]` in unit range for a chromatic color.
    pub fn hsi_to_unit_rgb(h: f64, s: f64, i: f64) -> [f64; 3] {
        let hue = normalize_hue(h);
        Sector::for_hue(hue).solve(hue, s, i)
    }

    /// Like [`ColorSpaceConverter::rgb_to_hsi`], but rejects channels outside [0, 255]
    pub fn try_rgb_to_hsi(r: i32, g: i32, b: i32) -> Result<Hsi> {
        for (name, value) in [("red", r), ("green", g), ("blue", b)] {
            if !(0..=255).contains(&value) {
                return Err(ConversionError::invalid_input(name, value, "0..=255"));
            }
        }

        Ok(Self::rgb_to_hsi(r, g, b).into())
    }

    /// Like [`ColorSpaceConverter::hsi_to_rgb`], but rejects non-finite input
    /// and saturation or intensity outside [0, 1]
    pub fn try_hsi_to_rgb(h: f64, s: f64, i: f64) -> Result<Rgb> {
        if !h.is_finite() {
            return Err(ConversionError::invalid_input("hue", h, "a finite angle"));
        }
        for (name, value) in [("saturation", s), ("intensity", i)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConversionError::invalid_input(name, value, "0..=1"));
            }
        }

        Ok(Self::hsi_to_rgb(h, s, i).into())
    }
}

impl From<Rgb> for Hsi {
    fn from(rgb: Rgb) -> Self {
        ColorSpaceConverter::rgb_to_hsi(rgb.r as i32, rgb.g as i32, rgb.b as i32).into()
    }
}

impl From<Hsi> for Rgb {
    fn from(hsi: Hsi) -> Self {
        ColorSpaceConverter::hsi_to_rgb(hsi.h, hsi.s, hsi.i).into()
    }
}
