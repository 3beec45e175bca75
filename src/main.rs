// Demo renderer: orbits a source around the head and writes the binaural
// result (distance variation filtering only, no HRTF) to a stereo wav file.
mod cli;
mod config;

use anyhow::Context;
use clap::Parser;
use hound::{SampleFormat, WavSpec, WavWriter};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use nearfield::core::util::{sine, white_noise};
use nearfield::{apply_dvf, frontal_to_ipsilateral, FilterState};

use crate::config::SourceSetting;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = cli::Args::parse();
    let mut cfg = config::RenderConfig::load_or_default(&args.config);
    if let Some(rho) = args.rho {
        cfg.rho = rho;
    }
    if let Some(duration) = args.duration {
        cfg.duration_s = duration;
    }
    if let Some(period) = args.orbit_period {
        cfg.orbit_period_s = period;
    }
    if let Some(source) = args.source {
        cfg.source = source;
    }
    if let Some(hz) = args.sine_hz {
        cfg.sine_hz = hz;
    }

    let fs = cfg.sample_rate as f32;
    let n_total = (cfg.duration_s * fs) as usize;
    let input = match cfg.source {
        SourceSetting::Noise => white_noise(n_total, 0xD1F7),
        SourceSetting::Sine => sine(fs, cfg.sine_hz, n_total),
    };

    info!(
        sample_rate = cfg.sample_rate,
        block_size = cfg.block_size,
        rho = cfg.rho,
        orbit_period_s = cfg.orbit_period_s,
        "rendering {} samples to {}",
        n_total,
        args.wav
    );

    let spec = WavSpec {
        channels: 2,
        sample_rate: cfg.sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };
    let mut writer =
        WavWriter::create(&args.wav, spec).with_context(|| format!("create {}", args.wav))?;

    let mut state_l = FilterState::default();
    let mut state_r = FilterState::default();
    let mut out_l = vec![0.0f32; cfg.block_size];
    let mut out_r = vec![0.0f32; cfg.block_size];

    for (block_idx, chunk) in input.chunks(cfg.block_size).enumerate() {
        // Frontal bearing at the start of the block, kept in (-180, 180].
        let t = (block_idx * cfg.block_size) as f32 / fs;
        let mut theta_front = 360.0 * (t / cfg.orbit_period_s) % 360.0;
        if theta_front > 180.0 {
            theta_front -= 360.0;
        }
        let (theta_l, theta_r) = frontal_to_ipsilateral(theta_front);
        debug!(block_idx, theta_front, theta_l, theta_r, "dvf update");

        apply_dvf(theta_l, cfg.rho, chunk, fs, &mut state_l, &mut out_l[..chunk.len()]);
        apply_dvf(theta_r, cfg.rho, chunk, fs, &mut state_r, &mut out_r[..chunk.len()]);

        for i in 0..chunk.len() {
            let l = (out_l[i] * cfg.amplitude).clamp(-1.0, 1.0);
            let r = (out_r[i] * cfg.amplitude).clamp(-1.0, 1.0);
            writer.write_sample((l * i16::MAX as f32) as i16)?;
            writer.write_sample((r * i16::MAX as f32) as i16)?;
        }
    }

    writer.finalize().context("finalize wav")?;
    info!("render complete");
    Ok(())
}
