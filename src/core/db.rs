//! dB conversion helpers, amplitude semantics (20*log10).
//!
//! The shelf model expresses its DC and high-frequency gains in dB; the
//! coefficient mapping exponentiates them back to amplitude ratios.

/// Minimum amplitude floor for log conversions.
pub const EPS_AMP: f32 = 1e-10;

/// Convert dB to an amplitude ratio.
#[inline]
pub fn db_to_amp(db: f32) -> f32 {
    10.0_f32.powf(db / 20.0)
}

/// Convert an amplitude ratio to dB.
pub fn amp_to_db(a: f32) -> f32 {
    20.0 * a.max(EPS_AMP).log10()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_to_amp_basics() {
        assert!((db_to_amp(0.0) - 1.0).abs() < 1e-6);
        assert!((db_to_amp(20.0) - 10.0).abs() < 1e-4);
        assert!((db_to_amp(-6.0206) - 0.5).abs() < 1e-4);
    }

    #[test]
    fn amp_to_db_round_trip() {
        for db in [-24.0, -3.0, 0.0, 6.0, 18.0] {
            assert!((amp_to_db(db_to_amp(db)) - db).abs() < 1e-3);
        }
    }
}
