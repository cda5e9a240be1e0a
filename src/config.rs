use crate::report::{default_examples, NamedColor};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "rgb-hsi";

/// Largest swatch edge the visualizer and `--swatch-dir` will render
pub const MAX_SWATCH_SIZE: u32 = 4096;

/// Initial slider positions and swatch size for the visualizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerSettings {
    pub hue: f64,
    pub saturation: f64,
    pub intensity: f64,
    pub swatch_size: u32,
}

impl Default for VisualizerSettings {
    fn default() -> Self {
        Self {
            hue: 0.0,
            saturation: 1.0,
            intensity: 0.5,
            swatch_size: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_retention_count: usize,
    pub stream_logs: bool,
    pub examples: Vec<NamedColor>,
    pub visualizer: VisualizerSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_retention_count: 10,
            stream_logs: false,
            examples: default_examples(),
            visualizer: VisualizerSettings::default(),
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        let v = &self.visualizer;
        if !(0.0..=360.0).contains(&v.hue) {
            anyhow::bail!("Visualizer hue {} out of range [0.0, 360.0]", v.hue);
        }
        if !(0.0..=1.0).contains(&v.saturation) {
            anyhow::bail!("Visualizer saturation {} out of range [0.0, 1.0]", v.saturation);
        }
        if !(0.0..=1.0).contains(&v.intensity) {
            anyhow::bail!("Visualizer intensity {} out of range [0.0, 1.0]", v.intensity);
        }
        if !(1..=MAX_SWATCH_SIZE).contains(&v.swatch_size) {
            anyhow::bail!(
                "Visualizer swatch size {} out of range [1, {}]",
                v.swatch_size,
                MAX_SWATCH_SIZE
            );
        }

        for example in &self.examples {
            example
                .to_rgb()
                .with_context(|| format!("Example color '{}' is invalid", example.name))?;
        }

        Ok(())
    }
}

pub struct Config {
    config_path: PathBuf,
    pub data_dir: PathBuf,
}

impl Config {
    /// Config rooted at the platform data directory
    pub fn new() -> Result<Self> {
        Self::at(resolve_data_dir()?)
    }

    pub fn at(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)
            .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;

        Ok(Self {
            config_path: data_dir.join("config.json"),
            data_dir,
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn log_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }

    pub fn load(&self) -> Result<AppConfig> {
        if !self.config_path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.config_path).context("Failed to read config file")?;

        let config: AppConfig = serde_json::from_str(&content).context("Failed to parse config file")?;
        config.validate()?;

        Ok(config)
    }

    pub fn save(&self, config: &AppConfig) -> Result<()> {
        let content = serde_json::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, content).context("Failed to write config file")?;

        Ok(())
    }

    /// Write the default config unless one exists. Returns whether a file was written.
    pub fn init_default(&self) -> Result<bool> {
        if self.config_path.exists() {
            return Ok(false);
        }
        self.save(&AppConfig::default())?;
        Ok(true)
    }
}

fn resolve_data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os("RGB_HSI_HOME") {
        return Ok(PathBuf::from(home));
    }
    if let Some(app_data) = std::env::var_os("APPDATA") {
        return Ok(PathBuf::from(app_data).join(APP_DIR_NAME));
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join(APP_DIR_NAME));
    }

    let home = std::env::var_os("HOME").context("Failed to locate a data directory: HOME is not set")?;
    Ok(PathBuf::from(home).join(".config").join(APP_DIR_NAME))
}
