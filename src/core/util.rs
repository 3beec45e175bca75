//! Signal generators shared by tests, benches and the demo renderer.

use rand::{Rng, SeedableRng};

/// Generate sine wave samples.
pub fn sine(fs: f32, f: f32, n: usize) -> Vec<f32> {
    (0..n)
        .map(|i| (2.0 * std::f32::consts::PI * f * (i as f32) / fs).sin())
        .collect()
}

/// Unit impulse of length n.
pub fn impulse(n: usize) -> Vec<f32> {
    let mut out = vec![0.0; n];
    if n > 0 {
        out[0] = 1.0;
    }
    out
}

/// Seeded white noise in [-1, 1).
pub fn white_noise(n: usize, seed: u64) -> Vec<f32> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(-1.0..1.0)).collect()
}
