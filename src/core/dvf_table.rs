//! Coefficient data for the near-field distance variation filter.
//!
//! Table 1 of Spagnol, Tavazzi & Avanzini, "Distance rendering and perception
//! of nearby virtual sound sources with a near-field filter model", Applied
//! Acoustics 115 (2017). Each array holds one rational-function coefficient
//! per 10 degrees of ipsilateral azimuth, 0..=180.

use std::f32::consts::PI;

/// Number of azimuth steps in the lookup table (0°..=180°, 10° apart).
pub const NUM_AZ_STEPS: usize = 19;

/// Azimuth spacing of the table entries, in degrees.
pub const AZ_STEP_DEG: f32 = 10.0;

/// Head radius used when fitting the table, in meters.
pub const REF_HEAD_RADIUS: f32 = 0.0875;

/// Head radius assumed by this renderer, in meters.
pub const HEAD_RADIUS: f32 = 0.09096;

/// Cutoff pre-warp constant: pi * (fitted radius / rendered radius).
pub const HEAD_DIM: f32 = PI * (REF_HEAD_RADIUS / HEAD_RADIUS);

/// Denormalizes the dimensionless cutoff to Hz: c / (2 pi a).
pub const SOS_DIV_2PI_A: f32 = 343.0 / (2.0 * PI * HEAD_RADIUS);

// Eq. (8): DC gain numerator/denominator terms.
pub(crate) const P11: [f32; NUM_AZ_STEPS] = [
    12.97, 13.19, 12.13, 11.19, 9.91, 8.328, 6.493, 4.455, 2.274, 0.018, -2.24, -4.43, -6.49,
    -8.34, -9.93, -11.3, -12.2, -12.8, -13.0,
];
pub(crate) const P21: [f32; NUM_AZ_STEPS] = [
    -9.69, 234.2, -11.2, -9.03, -7.87, -7.42, -7.31, -7.28, -7.29, -7.48, -8.04, -9.23, -11.6,
    -17.4, -48.4, 9.149, 1.905, -0.75, -1.32,
];
pub(crate) const Q11: [f32; NUM_AZ_STEPS] = [
    -1.14, 18.48, -1.25, -1.02, -0.83, -0.67, -0.5, -0.32, -0.11, -0.13, 0.395, 0.699, 1.084,
    1.757, 4.764, -0.64, 0.109, 0.386, 0.45,
];
pub(crate) const Q21: [f32; NUM_AZ_STEPS] = [
    0.219, -8.5, 0.346, 0.336, 0.379, 0.421, 0.423, 0.382, 0.314, 0.24, 0.177, 0.132, 0.113,
    0.142, 0.462, -0.14, -0.08, -0.06, -0.05,
];

// Eq. (13): high-frequency gain numerator/denominator terms.
pub(crate) const P12: [f32; NUM_AZ_STEPS] = [
    -4.39, -4.31, -4.18, -4.01, -3.87, -4.1, -3.87, -5.02, -6.72, -8.69, -11.2, -12.1, -11.1,
    -11.1, -9.72, -8.42, -7.44, -6.78, -6.58,
];
pub(crate) const P22: [f32; NUM_AZ_STEPS] = [
    2.123, -2.78, 4.224, 3.039, -0.57, -34.7, 3.271, 0.023, -8.96, -58.4, 11.47, 8.716, 21.8,
    1.91, -0.04, -0.66, 0.395, 2.662, 3.387,
];
pub(crate) const Q12: [f32; NUM_AZ_STEPS] = [
    -0.55, 0.59, -1.01, -0.56, 0.665, 11.39, -1.57, -0.87, 0.37, 5.446, -1.13, -0.63, -2.01,
    0.15, 0.243, 0.147, -0.18, -0.67, -0.84,
];
pub(crate) const Q22: [f32; NUM_AZ_STEPS] = [
    -0.06, -0.17, -0.02, -0.32, -1.13, -8.3, 0.637, 0.325, -0.08, -1.19, 0.103, -0.12, 0.098,
    -0.4, -0.41, -0.34, -0.18, 0.05, 0.131,
];

// Eq. (14): cutoff frequency numerator/denominator terms.
pub(crate) const P13: [f32; NUM_AZ_STEPS] = [
    0.457, 0.455, -0.87, 0.465, 0.494, 0.549, 0.663, 0.691, 3.507, -27.4, 6.371, 7.032, 7.092,
    7.463, 7.453, 8.101, 8.702, 8.925, 9.317,
];
pub(crate) const P23: [f32; NUM_AZ_STEPS] = [
    -0.67, 0.142, 3404., -0.91, -0.67, -1.21, -1.76, 4.655, 55.09, 10336., 1.735, 40.88, 23.86,
    102.8, -6.14, -18.1, -9.05, -9.03, -6.89,
];
pub(crate) const P33: [f32; NUM_AZ_STEPS] = [
    0.174, -0.11, -1699., 0.437, 0.658, 2.02, 6.815, 0.614, 589.3, 16818., -9.39, -44.1, -23.6,
    -92.3, -1.81, 10.54, 0.532, 0.285, -2.08,
];
pub(crate) const Q13: [f32; NUM_AZ_STEPS] = [
    -1.75, -0.01, 7354., -2.18, -1.2, -1.59, -1.23, -0.89, 29.23, 1945., -0.06, 5.635, 3.308,
    13.88, -0.88, -2.23, -0.96, -0.9, -0.57,
];
pub(crate) const Q23: [f32; NUM_AZ_STEPS] = [
    0.699, -0.35, -5350., 1.188, 0.256, 0.816, 1.166, 0.76, 59.51, 1707., -1.12, -6.18, -3.39,
    -12.7, -0.19, 1.295, -0.02, -0.08, -0.4,
];
