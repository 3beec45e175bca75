use clap::Parser;

use crate::config::SourceSetting;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Write rendered audio to this wav file
    #[arg(long, default_value = "dvf_orbit.wav")]
    pub wav: String,

    /// Path to config TOML
    #[arg(long, default_value = "render.toml")]
    pub config: String,

    /// Source distance in head radii (>= 1), overrides config
    #[arg(long)]
    pub rho: Option<f32>,

    /// Render duration in seconds, overrides config
    #[arg(long)]
    pub duration: Option<f32>,

    /// Seconds per full orbit around the head, overrides config
    #[arg(long)]
    pub orbit_period: Option<f32>,

    /// Source signal, overrides config
    #[arg(long, value_enum)]
    pub source: Option<SourceSetting>,

    /// Sine source frequency in Hz, overrides config
    #[arg(long)]
    pub sine_hz: Option<f32>,
}
