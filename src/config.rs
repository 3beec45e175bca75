use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SourceSetting {
    Noise,
    Sine,
}

impl Default for SourceSetting {
    fn default() -> Self {
        Self::Noise
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "RenderConfig::default_sample_rate")]
    pub sample_rate: u32,
    #[serde(default = "RenderConfig::default_block_size")]
    pub block_size: usize,
    #[serde(default = "RenderConfig::default_duration_s")]
    pub duration_s: f32,
    /// Source distance in head radii; the model is fitted for >= 1.
    #[serde(default = "RenderConfig::default_rho")]
    pub rho: f32,
    #[serde(default = "RenderConfig::default_orbit_period_s")]
    pub orbit_period_s: f32,
    #[serde(default = "RenderConfig::default_amplitude")]
    pub amplitude: f32,
    #[serde(default)]
    pub source: SourceSetting,
    #[serde(default = "RenderConfig::default_sine_hz")]
    pub sine_hz: f32,
}

impl RenderConfig {
    fn default_sample_rate() -> u32 {
        48_000
    }
    fn default_block_size() -> usize {
        256
    }
    fn default_duration_s() -> f32 {
        6.0
    }
    fn default_rho() -> f32 {
        2.0
    }
    fn default_orbit_period_s() -> f32 {
        3.0
    }
    fn default_amplitude() -> f32 {
        0.25
    }
    fn default_sine_hz() -> f32 {
        440.0
    }

    /// Read the config file if present, otherwise fall back to defaults.
    pub fn load_or_default(path: &str) -> Self {
        if Path::new(path).exists() {
            match fs::read_to_string(path) {
                Ok(contents) => match toml::from_str(&contents) {
                    Ok(cfg) => return cfg,
                    Err(err) => warn!("failed to parse {path}: {err}; using defaults"),
                },
                Err(err) => warn!("failed to read {path}: {err}; using defaults"),
            }
        }
        Self::default()
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            sample_rate: Self::default_sample_rate(),
            block_size: Self::default_block_size(),
            duration_s: Self::default_duration_s(),
            rho: Self::default_rho(),
            orbit_period_s: Self::default_orbit_period_s(),
            amplitude: Self::default_amplitude(),
            source: SourceSetting::default(),
            sine_hz: Self::default_sine_hz(),
        }
    }
}
