//! Near-field distance variation filter (DVF).
//!
//! Models how a nearby source's spectrum changes with distance and lateral
//! angle at each ear, as a first-order high-shelf fitted to boundary-element
//! simulations (Spagnol, Tavazzi & Avanzini 2017). The shelf is parameterized
//! per ear by the ipsilateral azimuth theta [0, 180] degrees and the source
//! distance rho normalized to head radius (rho = 1 is the head surface).
//!
//! Pipeline per ear and per block: table lookup + angular interpolation of
//! the shelf parameters, mapping to digital coefficients for the sample rate,
//! then a first-order IIR recursion over the block with persisted state.

use crate::core::db::db_to_amp;
use crate::core::dvf_table::{
    AZ_STEP_DEG, HEAD_DIM, NUM_AZ_STEPS, P11, P12, P13, P21, P22, P23, P33, Q11, Q12, Q13, Q21,
    Q22, Q23, SOS_DIV_2PI_A,
};
use crate::core::iir::{FilterState, FirstOrderCoeffs};

/// High-shelf parameters of the distance model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShelfParams {
    /// Shelf gain at DC, in dB.
    pub g0: f32,
    /// Shelf gain at infinite frequency, in dB.
    pub g_inf: f32,
    /// Shelf cutoff frequency, in Hz.
    pub fc: f32,
}

#[inline]
fn lerp(a: f32, b: f32, ifac: f32) -> f32 {
    a + (b - a) * ifac
}

/// Evaluate the shelf parameters at one azimuth table entry.
///
/// `index` picks the 10-degree azimuth step (0..=18), `rho` is the source
/// distance in head radii. The model is fitted for rho >= 1; smaller values
/// are not rejected and simply extrapolate the rational functions. Evaluated
/// in f64 because several table entries have large, near-cancelling terms.
pub fn compute_shelf_params(index: usize, rho: f32) -> ShelfParams {
    debug_assert!(index < NUM_AZ_STEPS, "azimuth table index out of range");
    let rho = rho as f64;
    let rho_sq = rho * rho;

    // Eqs. (8), (13) and (14): rational functions of normalized distance.
    let g0 = (P11[index] as f64 * rho + P21[index] as f64)
        / (rho_sq + Q11[index] as f64 * rho + Q21[index] as f64);
    let g_inf = (P12[index] as f64 * rho + P22[index] as f64)
        / (rho_sq + Q12[index] as f64 * rho + Q22[index] as f64);
    let fc = (P13[index] as f64 * rho_sq + P23[index] as f64 * rho + P33[index] as f64)
        / (rho_sq + Q13[index] as f64 * rho + Q23[index] as f64);

    ShelfParams {
        g0: g0 as f32,
        g_inf: g_inf as f32,
        // Denormalize the dimensionless cutoff: fc * c / (2 pi a).
        fc: fc as f32 * SOS_DIV_2PI_A,
    }
}

/// Shelf parameters at an arbitrary ipsilateral azimuth, in degrees.
///
/// Evaluates the two bracketing table entries and blends each parameter
/// linearly by the fractional table position. Azimuths outside [0, 180] are
/// not clamped; they extrapolate along the nearest edge pair of entries.
pub fn interp_shelf_params(theta_deg: f32, rho: f32) -> ShelfParams {
    // Table is in 10-degree steps; floor(theta/10) is the lower entry.
    let theta_div = theta_deg / AZ_STEP_DEG;
    let mut idx_lower = theta_div as usize;
    let mut idx_upper = idx_lower + 1;
    if idx_upper >= NUM_AZ_STEPS {
        // Reuse the last two entries; at exactly 180 the blend lands on
        // the final entry (ifac = 1), beyond that it extrapolates.
        idx_upper = NUM_AZ_STEPS - 1;
        idx_lower = NUM_AZ_STEPS - 2;
    }

    let lo = compute_shelf_params(idx_lower, rho);
    let hi = compute_shelf_params(idx_upper, rho);

    let ifac = theta_div - idx_lower as f32;
    ShelfParams {
        g0: lerp(lo.g0, hi.g0, ifac),
        g_inf: lerp(lo.g_inf, hi.g_inf, ifac),
        fc: lerp(lo.fc, hi.fc, ifac),
    }
}

/// Map shelf parameters to digital first-order high-shelf coefficients.
///
/// Bilinear-equivalent mapping with cutoff pre-warp through
/// tan(pi * fc / fs), head-size corrected. The singularity at
/// v0 * tan -> -1 is a known numerical edge and is not guarded.
pub fn dvf_iir_coeffs(params: ShelfParams, fs: f32) -> FirstOrderCoeffs {
    // Eqs. (10)-(12).
    let v0 = db_to_amp(params.g_inf);
    let g0_mag = db_to_amp(params.g0);
    let tan_f = ((HEAD_DIM / fs) * params.fc).tan();
    let v0_tan_f = v0 * tan_f;
    let a_c = (v0_tan_f - 1.0) / (v0_tan_f + 1.0);

    let v = (v0 - 1.0) * 0.5;
    let va_c = v * a_c;
    FirstOrderCoeffs {
        b0: g0_mag * (v - va_c + 1.0),
        b1: g0_mag * (va_c - v + a_c),
        a1: a_c,
    }
}

/// Filter one block of samples through the distance variation filter.
///
/// Shelf parameters and coefficients are computed once and held constant for
/// the whole block; smoothness across blocks comes from block size, not from
/// per-sample interpolation. `state` is the caller-owned delay line of this
/// channel and is updated in place for the next call.
pub fn apply_dvf(
    theta_deg: f32,
    rho: f32,
    input: &[f32],
    fs: f32,
    state: &mut FilterState,
    output: &mut [f32],
) {
    let params = interp_shelf_params(theta_deg, rho);
    let coeffs = dvf_iir_coeffs(params, fs);
    coeffs.process_block(input, state, output);
}

/// Split a frontal direction of arrival into per-ear ipsilateral azimuths.
///
/// `theta_front_deg` is measured from straight ahead, in (-180, 180).
/// Returns (left, right), each on the interaural-axis convention [0, 180]
/// used by the coefficient table; the ears mirror each other, so
/// right = 180 - left.
pub fn frontal_to_ipsilateral(theta_front_deg: f32) -> (f32, f32) {
    let mut theta_l = (90.0 - theta_front_deg).abs();
    if theta_l > 180.0 {
        theta_l = 360.0 - theta_l;
    }
    (theta_l, 180.0 - theta_l)
}
