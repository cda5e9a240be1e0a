//! # rgb_hsi
//!
//! Conversion between the RGB and HSI (Hue, Saturation, Intensity) color
//! models, plus the pieces the `rgb-hsi` binary is built from: round-trip
//! reports, swatch rendering, configuration and session logging.
//!
//! ```rust
//! use rgb_hsi::ColorSpaceConverter;
//!
//! let (h, s, i) = ColorSpaceConverter::rgb_to_hsi(0, 255, 255);
//! assert!((h - 180.0).abs() < 1e-9);
//! assert_eq!(ColorSpaceConverter::hsi_to_rgb(h, s, i), (0, 255, 255));
//! ```

pub mod color;
pub mod config;
pub mod converter;
pub mod error;
pub mod logger;
pub mod report;
pub mod swatch;

pub use color::{Hsi, Rgb};
pub use config::{AppConfig, Config, VisualizerSettings};
pub use converter::ColorSpaceConverter;
pub use error::{ConversionError, Result};
pub use report::{run_round_trips, NamedColor, RoundTrip};
pub use swatch::Swatch;
